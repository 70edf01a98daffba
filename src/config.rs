// src/config.rs
//! Data-driven run configuration, loadable from RON.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::{PlacementArea, SurfaceTag};
use crate::rng::SeedSettings;

// ---------- Count policies ----------

/// Count policy shared by the cluster count and the per-cluster object count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountPolicy {
    Fixed(usize),
    Range { min: usize, max: usize },
}

impl CountPolicy {
    /// Resolve to a concrete count, consuming one draw for `Range`.
    pub fn sample(&self, rng: &mut ChaCha8Rng) -> usize {
        match *self {
            CountPolicy::Fixed(n) => n,
            CountPolicy::Range { min, max } => rng.random_range(min..=max.max(min)),
        }
    }
}

// ---------- Surface classification rule ----------

/// Tagged-set membership deciding which surfaces support placement. A tag in
/// `excluded` always rejects. An empty `accepted` set means "anything not
/// excluded"; otherwise only listed tags count as valid ground, and unknown
/// tags reject.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRule {
    #[serde(default)]
    pub accepted: HashSet<SurfaceTag>,
    #[serde(default)]
    pub excluded: HashSet<SurfaceTag>,
}

impl SurfaceRule {
    pub fn allows(&self, tag: SurfaceTag) -> bool {
        if self.excluded.contains(&tag) {
            return false;
        }
        self.accepted.is_empty() || self.accepted.contains(&tag)
    }
}

// ---------- Placement config ----------

/// Immutable-per-run parameters for one placement run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub area: PlacementArea,
    pub total_objects: usize,
    pub cluster_count: CountPolicy,
    pub objects_per_cluster: CountPolicy,
    /// Minimum horizontal distance between accepted cluster centers (meters).
    #[serde(default)]
    pub min_cluster_distance: f32,
    /// Base disk radius members scatter in around a center (meters).
    pub cluster_radius: f32,
    /// Per-cluster radius spread in 0..=1; the effective radius is
    /// `cluster_radius * (1 + u * radius_variability)` for one draw per cluster.
    #[serde(default = "default_radius_variability")]
    pub radius_variability: f32,
    #[serde(default)]
    pub min_height_above_surface: f32,
    #[serde(default)]
    pub max_height_above_surface: f32,
    /// Y used when a probe finds no surface at all.
    #[serde(default)]
    pub fallback_height: f32,
    #[serde(default)]
    pub surface_rule: SurfaceRule,
    #[serde(default)]
    pub seeding: SeedSettings,
}

fn default_radius_variability() -> f32 {
    0.25
}

impl PlacementConfig {
    /// Apply the documented auto-corrections. Inconsistent configs are fixed
    /// up, never rejected: the height band collapses onto its max when
    /// inverted, and a fixed-by-fixed cluster layout raises the total to the
    /// product so every cluster can be filled.
    pub fn normalized(&self) -> Self {
        let mut cfg = self.clone();

        cfg.area.half_extents.x = cfg.area.half_extents.x.max(0.001);
        cfg.area.half_extents.z = cfg.area.half_extents.z.max(0.001);
        cfg.area.half_extents.y = cfg.area.half_extents.y.max(0.0);

        cfg.min_cluster_distance = cfg.min_cluster_distance.max(0.0);
        cfg.cluster_radius = cfg.cluster_radius.max(0.001);
        cfg.radius_variability = cfg.radius_variability.clamp(0.0, 1.0);

        if cfg.min_height_above_surface > cfg.max_height_above_surface {
            cfg.min_height_above_surface = cfg.max_height_above_surface;
        }

        if let (CountPolicy::Fixed(clusters), CountPolicy::Fixed(quota)) =
            (cfg.cluster_count, cfg.objects_per_cluster)
        {
            cfg.total_objects = cfg.total_objects.max(clusters * quota);
        }

        cfg
    }
}

// ---------- RON loader ----------

#[derive(thiserror::Error, Debug)]
pub enum ConfigLoadError {
    #[error("I/O while reading placement config: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}

impl PlacementConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigLoadError> {
        ron::de::from_str(s).map_err(|e| ConfigLoadError::Ron(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let bytes = std::fs::read(path)?;
        ron::de::from_bytes(&bytes).map_err(|e| ConfigLoadError::Ron(e.to_string()))
    }
}
