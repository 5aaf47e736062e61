//! Reference navigable surface: flat walkable rectangles with blocked holes.
//!
//! Good enough to exercise sampling against holes and ragged boundaries;
//! real levels would supply their own `SurfaceSampler`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use pursuit_core::nav::SurfaceSampler;

/// Axis-aligned rectangle on the ground plane (XZ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Region {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_z: min_z.min(max_z),
            max_z: min_z.max(max_z),
        }
    }

    /// Square of half-width `half` centered at (`x`, `z`).
    pub fn square(x: f32, z: f32, half: f32) -> Self {
        Self::new(x - half, x + half, z - half, z + half)
    }

    /// Inclusive containment (edges belong to the region).
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    /// Strict containment (edges do not belong to the interior).
    pub fn interior_contains(&self, x: f32, z: f32) -> bool {
        x > self.min_x && x < self.max_x && z > self.min_z && z < self.max_z
    }

    fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (x.clamp(self.min_x, self.max_x), z.clamp(self.min_z, self.max_z))
    }
}

/// Flat walkable surface at a fixed height.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavSurface {
    pub height: f32,
    pub walkable: Vec<Region>,
    pub holes: Vec<Region>,
}

impl NavSurface {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.walkable.push(region);
        self
    }

    pub fn with_hole(mut self, hole: Region) -> Self {
        self.holes.push(hole);
        self
    }

    /// Whether `point` lies on the walkable surface (height is ignored).
    pub fn contains(&self, point: Vec3) -> bool {
        self.walkable.iter().any(|r| r.contains(point.x, point.z)) && !self.in_hole(point.x, point.z)
    }

    fn in_hole(&self, x: f32, z: f32) -> bool {
        self.holes.iter().any(|h| h.interior_contains(x, z))
    }

    /// Nearest walkable point to `near`, with no distance limit.
    pub fn nearest_point(&self, near: Vec3) -> Option<Vec3> {
        let mut best: Option<(f32, Vec3)> = None;
        for region in &self.walkable {
            let (x, z) = region.clamp(near.x, near.z);
            for (cx, cz) in self.escape_holes(region, x, z) {
                let candidate = Vec3::new(cx, self.height, cz);
                let dist_sq = candidate.distance_squared(near);
                if best.map_or(true, |(d, _)| dist_sq < d) {
                    best = Some((dist_sq, candidate));
                }
            }
        }
        best.map(|(_, p)| p)
    }

    /// Candidate points near (`x`, `z`) that are inside `region` and outside every hole.
    fn escape_holes(&self, region: &Region, x: f32, z: f32) -> Vec<(f32, f32)> {
        if !self.in_hole(x, z) {
            return vec![(x, z)];
        }
        self.holes
            .iter()
            .filter(|h| h.interior_contains(x, z))
            .flat_map(|h| [(h.min_x, z), (h.max_x, z), (x, h.min_z), (x, h.max_z)])
            .filter(|&(cx, cz)| region.contains(cx, cz) && !self.in_hole(cx, cz))
            .collect()
    }
}

impl SurfaceSampler for NavSurface {
    fn sample(&self, near: Vec3, max_distance: f32) -> Option<Vec3> {
        self.nearest_point(near)
            .filter(|p| p.distance_squared(near) <= max_distance * max_distance)
    }
}
