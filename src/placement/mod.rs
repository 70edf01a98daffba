// src/placement/mod.rs
//! Deterministic clustered placement: centers, count distribution, member
//! positions, and the orchestrating runner.

mod centers;
mod distribute;
mod positions;
mod runner;

pub use centers::generate_centers;
pub use distribute::distribute;
pub use positions::generate_positions;
pub use runner::{adjust_single, run_placement, PlacementRunner};

/// Attempt budget per cluster center for the zone/spacing rejection loop.
pub(crate) const MAX_CENTER_ATTEMPTS: u32 = 100;

/// Separate cap on surface rejections per center, so a fully excluded scene
/// degrades instead of looping forever.
pub(crate) const MAX_CENTER_SURFACE_REJECTIONS: u32 = 100;

/// Attempt budget per member slot; exhausted slots are dropped.
pub(crate) const MAX_POSITION_ATTEMPTS: u32 = 20;
