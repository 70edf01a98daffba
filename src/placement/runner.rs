// src/placement/runner.rs
//! Orchestrates one placement run: cluster count, centers, count
//! distribution, then member positions, all in a fixed draw order.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::centers::generate_centers;
use super::distribute::distribute;
use super::positions::generate_positions;
use crate::config::{CountPolicy, PlacementConfig};
use crate::core::{Cluster, ClusterLayout, ExclusionZone, PlacementOutcome, SurfaceProbe};
use crate::rng::SeedMode;
use crate::surface::{GroundAdjust, GroundAdjuster};

/// Stateful front-end that owns the probe and keeps a session stream alive
/// across runs, so `TimeBased` seeding keeps advancing instead of reseeding
/// on every call. `Fixed` seeding reseeds from the config per run.
pub struct PlacementRunner<P: SurfaceProbe> {
    probe: P,
    session_rng: ChaCha8Rng,
}

impl<P: SurfaceProbe> PlacementRunner<P> {
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            session_rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Run the full pipeline, discarding any previous layout.
    pub fn run(&mut self, config: &PlacementConfig, zones: &[ExclusionZone]) -> PlacementOutcome {
        let cfg = config.normalized();
        match cfg.seeding.mode {
            SeedMode::Fixed => {
                let mut rng = cfg.seeding.stream();
                run_with_stream(&cfg, zones, &self.probe, &mut rng)
            }
            SeedMode::TimeBased => run_with_stream(&cfg, zones, &self.probe, &mut self.session_rng),
        }
    }

    /// Snap one standalone point, reusing the ground adjuster directly.
    pub fn adjust_single(&mut self, x: f32, z: f32, config: &PlacementConfig) -> GroundAdjust {
        let cfg = config.normalized();
        let adjuster = GroundAdjuster::new(&cfg, &self.probe);
        match cfg.seeding.mode {
            SeedMode::Fixed => adjuster.adjust(x, z, &mut cfg.seeding.stream()),
            SeedMode::TimeBased => adjuster.adjust(x, z, &mut self.session_rng),
        }
    }
}

/// One-shot entry point; builds the draw stream from the config's seeding.
pub fn run_placement(
    config: &PlacementConfig,
    zones: &[ExclusionZone],
    probe: &dyn SurfaceProbe,
) -> PlacementOutcome {
    let cfg = config.normalized();
    let mut rng = cfg.seeding.stream();
    run_with_stream(&cfg, zones, probe, &mut rng)
}

/// One-shot single-point adjustment mirroring `run_placement`.
pub fn adjust_single(
    x: f32,
    z: f32,
    config: &PlacementConfig,
    probe: &dyn SurfaceProbe,
) -> GroundAdjust {
    let cfg = config.normalized();
    let mut rng = cfg.seeding.stream();
    GroundAdjuster::new(&cfg, probe).adjust(x, z, &mut rng)
}

/// The pipeline proper. Expects an already-normalized config; every draw and
/// probe happens in a fixed order (centers in index order, then per cluster:
/// one radius-spread draw followed by its member slots).
fn run_with_stream(
    cfg: &PlacementConfig,
    zones: &[ExclusionZone],
    probe: &dyn SurfaceProbe,
    rng: &mut ChaCha8Rng,
) -> PlacementOutcome {
    let adjuster = GroundAdjuster::new(cfg, probe);

    let cluster_count = cfg.cluster_count.sample(rng);
    // A fixed quota that undershoots the total grows one remainder cluster.
    let actual_clusters = match cfg.objects_per_cluster {
        CountPolicy::Fixed(quota) if cluster_count * quota < cfg.total_objects => cluster_count + 1,
        _ => cluster_count,
    };

    let (centers, constraints_degraded) = generate_centers(actual_clusters, cfg, zones, &adjuster, rng);
    let counts = distribute(cfg.total_objects, cluster_count, &cfg.objects_per_cluster, rng);
    debug_assert_eq!(counts.len(), centers.len());

    let mut clusters = Vec::with_capacity(centers.len());
    for (center, want) in centers.into_iter().zip(counts) {
        let spread = rng.random::<f32>();
        let radius = cfg.cluster_radius * (1.0 + spread * cfg.radius_variability);
        let points = generate_positions(center, want, radius, cfg, zones, &adjuster, rng);
        clusters.push(Cluster { center, points });
    }

    let outcome = PlacementOutcome {
        layout: ClusterLayout { clusters },
        constraints_degraded,
        requested: cfg.total_objects,
    };
    debug!(
        "placement run: {} clusters, {}/{} points realized (constraints degraded: {})",
        outcome.layout.clusters.len(),
        outcome.realized(),
        outcome.requested,
        outcome.constraints_degraded
    );
    outcome
}
