// src/placement/centers.rs
//! Cluster-center rejection sampling.

use glam::Vec3;
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::{MAX_CENTER_ATTEMPTS, MAX_CENTER_SURFACE_REJECTIONS};
use crate::config::PlacementConfig;
use crate::core::ExclusionZone;
use crate::surface::{GroundAdjust, GroundAdjuster};

/// Rejection-sample `count` cluster centers inside the placement footprint.
///
/// Checks run cheapest-first per candidate: exclusion zones, then spacing
/// against previously accepted centers, then the surface probe. A candidate
/// that only fails the surface check restarts the whole center with a fresh
/// spacing budget. Budgets degrade softly: an exhausted spacing budget accepts
/// the last candidate anyway, an exhausted surface budget accepts the
/// candidate at the fallback height, and either sets the returned flag.
pub fn generate_centers(
    count: usize,
    cfg: &PlacementConfig,
    zones: &[ExclusionZone],
    adjuster: &GroundAdjuster<'_>,
    rng: &mut ChaCha8Rng,
) -> (Vec<Vec3>, bool) {
    let min = cfg.area.min_xz();
    let max = cfg.area.max_xz();
    let min_dist2 = cfg.min_cluster_distance * cfg.min_cluster_distance;

    let mut centers: Vec<Vec3> = Vec::with_capacity(count);
    let mut degraded = false;

    for _ in 0..count {
        let mut surface_rejections = 0u32;
        let accepted = loop {
            let mut attempts = 0u32;
            let (x, z) = loop {
                let x = rng.random_range(min.x..max.x);
                let z = rng.random_range(min.y..max.y);
                attempts += 1;

                let in_zone = zones.iter().any(|zone| zone.contains_xz(x, z));
                let too_close = !in_zone
                    && centers.iter().any(|c| {
                        let dx = c.x - x;
                        let dz = c.z - z;
                        dx * dx + dz * dz < min_dist2
                    });
                if !in_zone && !too_close {
                    break (x, z);
                }
                if attempts >= MAX_CENTER_ATTEMPTS {
                    if !degraded {
                        warn!(
                            "cluster spacing infeasible after {} attempts; accepting a crowded \
                             center (reduce min_cluster_distance, lower the cluster count, or \
                             enlarge the placement area)",
                            MAX_CENTER_ATTEMPTS
                        );
                    }
                    degraded = true;
                    break (x, z);
                }
            };

            match adjuster.adjust(x, z, rng) {
                GroundAdjust::Adjusted(p) | GroundAdjust::Fallback(p) => break p,
                GroundAdjust::Excluded => {
                    surface_rejections += 1;
                    if surface_rejections >= MAX_CENTER_SURFACE_REJECTIONS {
                        degraded = true;
                        break Vec3::new(x, cfg.fallback_height, z);
                    }
                }
            }
        };
        centers.push(accepted);
    }

    (centers, degraded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountPolicy, SurfaceRule};
    use crate::core::{PlacementArea, SurfaceHit, SurfaceProbe, SurfaceTag};
    use crate::rng::SeedSettings;

    const GROUND: SurfaceTag = SurfaceTag(1);
    const WATER: SurfaceTag = SurfaceTag(2);

    struct FlatProbe {
        tag: SurfaceTag,
    }

    impl SurfaceProbe for FlatProbe {
        fn cast(&self, origin: Vec3, _: Vec3, _: f32) -> Option<SurfaceHit> {
            Some(SurfaceHit {
                point: Vec3::new(origin.x, 0.0, origin.z),
                tag: self.tag,
            })
        }
    }

    fn config(min_dist: f32) -> PlacementConfig {
        PlacementConfig {
            area: PlacementArea {
                center: Vec3::ZERO,
                half_extents: Vec3::new(50.0, 5.0, 50.0),
            },
            total_objects: 20,
            cluster_count: CountPolicy::Fixed(4),
            objects_per_cluster: CountPolicy::Fixed(5),
            min_cluster_distance: min_dist,
            cluster_radius: 4.0,
            radius_variability: 0.0,
            min_height_above_surface: 0.0,
            max_height_above_surface: 0.0,
            fallback_height: -1.0,
            surface_rule: SurfaceRule {
                accepted: [GROUND].into_iter().collect(),
                excluded: [WATER].into_iter().collect(),
            },
            seeding: SeedSettings::fixed(5),
        }
    }

    #[test]
    fn centers_honor_spacing_when_feasible() {
        let cfg = config(15.0);
        let probe = FlatProbe { tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        let (centers, degraded) = generate_centers(5, &cfg, &[], &adjuster, &mut rng);
        assert_eq!(centers.len(), 5);
        assert!(!degraded);
        for (i, a) in centers.iter().enumerate() {
            for b in &centers[i + 1..] {
                let dx = a.x - b.x;
                let dz = a.z - b.z;
                assert!(
                    (dx * dx + dz * dz).sqrt() >= cfg.min_cluster_distance,
                    "centers {:?} and {:?} too close",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn centers_avoid_exclusion_zones() {
        let cfg = config(5.0);
        let probe = FlatProbe { tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        // Zone covering the west half of the area.
        let zones = [ExclusionZone {
            center: Vec3::new(-25.0, 0.0, 0.0),
            size: Vec3::new(50.0, 10.0, 100.0),
        }];
        let (centers, degraded) = generate_centers(8, &cfg, &zones, &adjuster, &mut rng);
        assert!(!degraded);
        for c in &centers {
            assert!(!zones[0].contains_xz(c.x, c.z), "center {:?} inside zone", c);
        }
    }

    #[test]
    fn infeasible_spacing_sets_flag_but_completes() {
        // 30 centers, 40m apart, in a 100x100 footprint: cannot fit.
        let cfg = config(40.0);
        let probe = FlatProbe { tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        let (centers, degraded) = generate_centers(30, &cfg, &[], &adjuster, &mut rng);
        assert_eq!(centers.len(), 30);
        assert!(degraded);
    }

    #[test]
    fn fully_excluded_scene_degrades_to_fallback_centers() {
        let cfg = config(5.0);
        let probe = FlatProbe { tag: WATER };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        let (centers, degraded) = generate_centers(2, &cfg, &[], &adjuster, &mut rng);
        assert_eq!(centers.len(), 2);
        assert!(degraded);
        for c in &centers {
            assert_eq!(c.y, cfg.fallback_height);
        }
    }

    #[test]
    fn centers_sit_on_adjusted_ground() {
        let cfg = config(5.0);
        let probe = FlatProbe { tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        let (centers, _) = generate_centers(3, &cfg, &[], &adjuster, &mut rng);
        for c in &centers {
            // Flat ground at y=0 and a collapsed height band pin y to 0.
            assert_eq!(c.y, 0.0);
        }
    }
}
