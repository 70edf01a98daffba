// src/core.rs
//! Core types/traits for deterministic clustered scatter placement.
//! Keep this file dependency-light; it should compile before any placement impls.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

// ---------- Surfaces ----------

/// Opaque tag for whatever kind of surface a probe hit (ground, rock, water...).
/// Hosts define their own constants; the core only does set membership on these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceTag(pub u32);

/// Nearest intersection returned by a vertical probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub point: Vec3,
    pub tag: SurfaceTag,
}

/// Host-provided surface query. Must be a pure query: no mutation,
/// deterministic for a static scene, returning the nearest intersection
/// along the ray.
pub trait SurfaceProbe: Send + Sync + 'static {
    fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<SurfaceHit>;
}

// ---------- Placement area & exclusion ----------

/// Axis-aligned world-space volume that every placed point must stay inside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementArea {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl PlacementArea {
    pub fn min_xz(&self) -> Vec2 {
        Vec2::new(
            self.center.x - self.half_extents.x,
            self.center.z - self.half_extents.z,
        )
    }

    pub fn max_xz(&self) -> Vec2 {
        Vec2::new(
            self.center.x + self.half_extents.x,
            self.center.z + self.half_extents.z,
        )
    }

    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        let min = self.min_xz();
        let max = self.max_xz();
        x >= min.x && x <= max.x && z >= min.y && z <= max.y
    }

    /// Clamp a point into the horizontal footprint.
    #[inline]
    pub fn clamp_xz(&self, x: f32, z: f32) -> (f32, f32) {
        let min = self.min_xz();
        let max = self.max_xz();
        (x.clamp(min.x, max.x), z.clamp(min.y, max.y))
    }

    pub fn top_y(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }
}

/// Axis-aligned box where no point (cluster center or member position) may land.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExclusionZone {
    pub center: Vec3,
    pub size: Vec3,
}

impl ExclusionZone {
    /// Horizontal membership test. Placement is a footprint operation, so
    /// zones block by their XZ extent regardless of the candidate's height.
    #[inline]
    pub fn contains_xz(&self, x: f32, z: f32) -> bool {
        (x - self.center.x).abs() <= self.size.x * 0.5
            && (z - self.center.z).abs() <= self.size.z * 0.5
    }
}

// ---------- Layout output ----------

/// One cluster: the validated center plus every validated member point.
/// The cluster's index is its position in the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub center: Vec3,
    pub points: Vec<Vec3>,
}

/// Ordered result of one placement run. Replaced wholesale on every run;
/// nothing here is shared with the generator afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterLayout {
    pub clusters: Vec<Cluster>,
}

impl ClusterLayout {
    pub fn total_points(&self) -> usize {
        self.clusters.iter().map(|c| c.points.len()).sum()
    }

    pub fn iter_points(&self) -> impl Iterator<Item = &Vec3> {
        self.clusters.iter().flat_map(|c| c.points.iter())
    }
}

/// Full report from one run: the layout, the soft spacing diagnostic, and the
/// requested count so callers can detect dropped slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub layout: ClusterLayout,
    /// Set when center generation exhausted an attempt budget (spacing or
    /// surface) and accepted a best-effort candidate instead.
    pub constraints_degraded: bool,
    /// Object count the config asked for.
    pub requested: usize,
}

impl PlacementOutcome {
    pub fn realized(&self) -> usize {
        self.layout.total_points()
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.realized())
    }
}
