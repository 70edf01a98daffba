// src/placement/distribute.rs
//! Splitting the total object count across clusters.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::CountPolicy;

/// Split `total` objects over `cluster_count` clusters.
///
/// `Fixed(q)` gives every cluster `q` and appends one remainder entry when
/// `cluster_count * q` falls short of `total`, so the output can be one entry
/// longer than `cluster_count` (the caller grows its center list to match).
/// `Range { min, max }` walks clusters in order, drawing each count so every
/// remaining cluster can still receive at least one; the last cluster absorbs
/// whatever remains.
pub fn distribute(
    total: usize,
    cluster_count: usize,
    policy: &CountPolicy,
    rng: &mut ChaCha8Rng,
) -> Vec<usize> {
    match *policy {
        CountPolicy::Fixed(quota) => {
            let mut counts = vec![quota; cluster_count];
            let assigned = quota * cluster_count;
            if assigned < total {
                counts.push(total - assigned);
            }
            counts
        }
        CountPolicy::Range { min, max } => {
            let mut counts = Vec::with_capacity(cluster_count);
            let mut remaining = total;
            for i in 0..cluster_count {
                let left_after = cluster_count - i - 1;
                if left_after == 0 {
                    counts.push(remaining);
                    break;
                }
                // Keep one object in reserve for every cluster still to come.
                let hi = max.min(remaining.saturating_sub(left_after));
                let lo = min.max(1).min(hi);
                let n = if hi == 0 { 0 } else { rng.random_range(lo..=hi) };
                counts.push(n);
                remaining -= n;
            }
            counts
        }
    }
}
