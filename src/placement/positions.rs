// src/placement/positions.rs
//! Intra-cluster position rejection sampling.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;

use super::MAX_POSITION_ATTEMPTS;
use crate::config::PlacementConfig;
use crate::core::ExclusionZone;
use crate::rng::sample_in_disk;
use crate::surface::{GroundAdjust, GroundAdjuster};

/// Scatter up to `n` member positions in a disk of `radius` around `center`.
///
/// Candidates are clamped into the placement footprint before the surface
/// probe runs, so a point can leave its nominal cluster radius but never the
/// area. Slots whose candidates keep landing on excluded surfaces or inside
/// exclusion zones are dropped after the attempt budget; dropped slots are
/// not redistributed to other clusters.
pub fn generate_positions(
    center: Vec3,
    n: usize,
    radius: f32,
    cfg: &PlacementConfig,
    zones: &[ExclusionZone],
    adjuster: &GroundAdjuster<'_>,
    rng: &mut ChaCha8Rng,
) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(n);

    for _ in 0..n {
        for _ in 0..MAX_POSITION_ATTEMPTS {
            let off = sample_in_disk(rng, radius);
            let (x, z) = cfg.area.clamp_xz(center.x + off.x, center.z + off.y);

            if zones.iter().any(|zone| zone.contains_xz(x, z)) {
                continue;
            }
            match adjuster.adjust(x, z, rng) {
                GroundAdjust::Adjusted(p) | GroundAdjust::Fallback(p) => {
                    out.push(p);
                    break;
                }
                GroundAdjust::Excluded => {}
            }
        }
    }

    out
}
