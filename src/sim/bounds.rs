//! Axis-aligned bounding boxes
//!
//! Every collision test in the simulation goes through an [`Aabb`]: shapes
//! project themselves onto one, and overlap is a cheap interval check per
//! axis. Bounds are inclusive on both ends, so boxes that merely touch count
//! as overlapping.

use serde::{Deserialize, Serialize};

/// An axis-aligned box `[x_start, x_end] x [y_start, y_end]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x_start: f32,
    pub x_end: f32,
    pub y_start: f32,
    pub y_end: f32,
}

impl Aabb {
    pub fn new(x_start: f32, x_end: f32, y_start: f32, y_end: f32) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_end - self.x_start
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_end - self.y_start
    }

    /// Inclusive overlap test: boxes sharing only an edge or corner overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let overlaps_x = self.x_end >= other.x_start && self.x_start <= other.x_end;
        let overlaps_y = self.y_end >= other.y_start && self.y_start <= other.y_end;
        overlaps_x && overlaps_y
    }
}

/// Canvas dimensions consumed by wall-boundary tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The full canvas as a box anchored at the origin
    pub fn as_aabb(&self) -> Aabb {
        Aabb::new(0.0, self.width, 0.0, self.height)
    }
}
