// src/surface.rs
//! Ground adjustment: the single channel through which surface information
//! enters placement. Wraps a vertical probe and turns its classification into
//! an adjusted point, a rejection signal, or a fallback point.

use glam::Vec3;
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::PlacementConfig;
use crate::core::SurfaceProbe;

/// Headroom above the area top for the probe origin; the cast range gets the
/// same margin below the area bottom.
const PROBE_CLEARANCE: f32 = 100.0;

/// Three-way result of snapping a horizontal candidate onto supporting ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroundAdjust {
    /// Valid ground under the candidate; y is the hit plus a jittered height
    /// offset inside the configured band.
    Adjusted(Vec3),
    /// The supporting surface is excluded by the classification rule.
    Excluded,
    /// Nothing under the candidate; y is the configured fallback height.
    Fallback(Vec3),
}

impl GroundAdjust {
    /// The placed point, if any.
    pub fn point(&self) -> Option<Vec3> {
        match *self {
            GroundAdjust::Adjusted(p) | GroundAdjust::Fallback(p) => Some(p),
            GroundAdjust::Excluded => None,
        }
    }
}

/// Wraps the host probe with the config's classification rule and height band.
pub struct GroundAdjuster<'a> {
    probe: &'a dyn SurfaceProbe,
    cfg: &'a PlacementConfig,
}

impl<'a> GroundAdjuster<'a> {
    pub fn new(cfg: &'a PlacementConfig, probe: &'a dyn SurfaceProbe) -> Self {
        Self { probe, cfg }
    }

    /// Probe straight down through the whole area (plus clearance both ways)
    /// and classify whatever sits under `(x, z)`.
    pub fn adjust(&self, x: f32, z: f32, rng: &mut ChaCha8Rng) -> GroundAdjust {
        let cfg = self.cfg;
        let origin = Vec3::new(x, cfg.area.top_y() + PROBE_CLEARANCE, z);
        let range = cfg.area.height() + PROBE_CLEARANCE * 2.0;

        let hit = match self.probe.cast(origin, Vec3::NEG_Y, range) {
            Some(hit) => hit,
            None => {
                warn!(
                    "no supporting surface under ({:.2}, {:.2}); using fallback height",
                    x, z
                );
                return GroundAdjust::Fallback(Vec3::new(x, cfg.fallback_height, z));
            }
        };
        if !cfg.surface_rule.allows(hit.tag) {
            return GroundAdjust::Excluded;
        }

        // x/z come from the query, not the hit point, so horizontal placement
        // stays exact on sloped surfaces.
        let t = rng.random::<f32>();
        let lift = cfg.min_height_above_surface
            + t * (cfg.max_height_above_surface - cfg.min_height_above_surface);
        GroundAdjust::Adjusted(Vec3::new(x, hit.point.y + lift, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CountPolicy, SurfaceRule};
    use crate::core::{PlacementArea, SurfaceHit, SurfaceTag};
    use crate::rng::SeedSettings;

    const GROUND: SurfaceTag = SurfaceTag(1);
    const WATER: SurfaceTag = SurfaceTag(2);

    /// Flat plane at a fixed height, reporting a fixed tag.
    struct FlatProbe {
        height: f32,
        tag: SurfaceTag,
    }

    impl SurfaceProbe for FlatProbe {
        fn cast(&self, origin: Vec3, _direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
            let travel = origin.y - self.height;
            (travel >= 0.0 && travel <= max_distance).then(|| SurfaceHit {
                point: Vec3::new(origin.x, self.height, origin.z),
                tag: self.tag,
            })
        }
    }

    /// Probe that never hits anything.
    struct VoidProbe;

    impl SurfaceProbe for VoidProbe {
        fn cast(&self, _: Vec3, _: Vec3, _: f32) -> Option<SurfaceHit> {
            None
        }
    }

    fn config() -> PlacementConfig {
        PlacementConfig {
            area: PlacementArea {
                center: Vec3::ZERO,
                half_extents: Vec3::new(50.0, 10.0, 50.0),
            },
            total_objects: 1,
            cluster_count: CountPolicy::Fixed(1),
            objects_per_cluster: CountPolicy::Fixed(1),
            min_cluster_distance: 0.0,
            cluster_radius: 1.0,
            radius_variability: 0.0,
            min_height_above_surface: 1.0,
            max_height_above_surface: 3.0,
            fallback_height: -7.5,
            surface_rule: SurfaceRule {
                accepted: [GROUND].into_iter().collect(),
                excluded: [WATER].into_iter().collect(),
            },
            seeding: SeedSettings::fixed(11),
        }
    }

    #[test]
    fn accepted_surface_lifts_within_band() {
        let cfg = config();
        let probe = FlatProbe { height: 2.0, tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();

        for _ in 0..100 {
            match adjuster.adjust(3.0, -4.0, &mut rng) {
                GroundAdjust::Adjusted(p) => {
                    assert_eq!(p.x, 3.0);
                    assert_eq!(p.z, -4.0);
                    let lift = p.y - 2.0;
                    assert!((1.0..=3.0).contains(&lift), "lift {} out of band", lift);
                }
                other => panic!("expected Adjusted, got {:?}", other),
            }
        }
    }

    #[test]
    fn excluded_surface_rejects() {
        let cfg = config();
        let probe = FlatProbe { height: 0.0, tag: WATER };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();
        assert_eq!(adjuster.adjust(0.0, 0.0, &mut rng), GroundAdjust::Excluded);
    }

    #[test]
    fn unknown_tag_rejects_when_accept_list_given() {
        let cfg = config();
        let probe = FlatProbe { height: 0.0, tag: SurfaceTag(42) };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();
        assert_eq!(adjuster.adjust(0.0, 0.0, &mut rng), GroundAdjust::Excluded);
    }

    #[test]
    fn missing_surface_uses_exact_fallback_height() {
        let cfg = config();
        let adjuster = GroundAdjuster::new(&cfg, &VoidProbe);
        let mut rng = cfg.seeding.stream();
        match adjuster.adjust(12.5, 8.0, &mut rng) {
            GroundAdjust::Fallback(p) => assert_eq!(p, Vec3::new(12.5, -7.5, 8.0)),
            other => panic!("expected Fallback, got {:?}", other),
        }
    }

    #[test]
    fn collapsed_band_pins_lift_exactly() {
        let mut cfg = config();
        cfg.min_height_above_surface = 2.0;
        cfg.max_height_above_surface = 2.0;
        let probe = FlatProbe { height: 5.0, tag: GROUND };
        let adjuster = GroundAdjuster::new(&cfg, &probe);
        let mut rng = cfg.seeding.stream();
        match adjuster.adjust(0.0, 0.0, &mut rng) {
            GroundAdjust::Adjusted(p) => assert_eq!(p.y, 7.0),
            other => panic!("expected Adjusted, got {:?}", other),
        }
    }
}
