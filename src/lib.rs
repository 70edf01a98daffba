//! Thicket — clustered scatter placement for procedural object population.
//!
//! Partitions a bounded area into clusters, fills each cluster with candidate
//! points, and projects every point onto supporting ground through a
//! host-provided vertical probe. Fully deterministic for a fixed seed: every
//! draw comes from one ChaCha8 stream threaded through the pipeline.

pub mod config;
pub mod core;
pub mod logging;
pub mod placement;
pub mod rng;
pub mod surface;

// Re-export the bits hosts actually need.
pub use crate::config::{ConfigLoadError, CountPolicy, PlacementConfig, SurfaceRule};
pub use crate::core::{
    Cluster, ClusterLayout, ExclusionZone, PlacementArea, PlacementOutcome, SurfaceHit,
    SurfaceProbe, SurfaceTag,
};
pub use crate::placement::{adjust_single, run_placement, PlacementRunner};
pub use crate::rng::{SeedMode, SeedSettings};
pub use crate::surface::{GroundAdjust, GroundAdjuster};
