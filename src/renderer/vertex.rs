//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color. `Pod` so a whole tessellated
/// frame can be uploaded to any GPU backend as one byte slice.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
    pub const SHAPE_FILL: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const SHAPE_STROKE: [f32; 4] = [0.9, 0.9, 1.0, 1.0];
    pub const WALL: [f32; 4] = [0.3, 0.3, 0.4, 1.0];
}
