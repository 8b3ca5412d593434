//! Drawing surface abstraction and the per-frame render walk
//!
//! The simulation never draws; the driver hands the current [`WorldState`]
//! to [`render_frame`] together with some [`Surface`]. The trait mirrors the
//! 2D-context primitives the animation consumes; [`MeshSurface`] is the
//! built-in implementation, tessellating every call into a vertex buffer a
//! GPU backend can upload wholesale.

use glam::Vec2;
use std::f32::consts::TAU;

use super::shapes::{circle_segments, push_arc_fill, push_arc_stroke, push_rect};
use super::vertex::{Vertex, colors};
use crate::consts::STROKE_HALF_WIDTH;
use crate::sim::{Aabb, Shape, ShapeKind, WorldState};

/// The 2D drawing primitives the animation consumes
pub trait Surface {
    fn clear(&mut self, region: Aabb);
    fn set_fill_color(&mut self, color: [f32; 4]);
    fn set_stroke_color(&mut self, color: [f32; 4]);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn begin_path(&mut self);
    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    );
    fn stroke(&mut self);
    fn fill(&mut self);
}

/// Issue the draw calls for one shape: rectangles are a single filled rect,
/// circles a stroked-and-filled full arc
pub fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape) {
    let pos = shape.pos();
    match shape.kind {
        ShapeKind::Rect { width, height } => {
            surface.fill_rect(pos.x, pos.y, width, height);
        }
        ShapeKind::Circle { radius } => {
            surface.begin_path();
            surface.arc(pos.x, pos.y, radius, 0.0, TAU, false);
            surface.stroke();
            surface.fill();
        }
    }
}

/// Repaint one frame: clear the canvas, draw every active shape in world
/// order, then the wall on top
pub fn render_frame<S: Surface>(surface: &mut S, state: &WorldState) {
    surface.clear(state.canvas.as_aabb());

    surface.set_fill_color(colors::SHAPE_FILL);
    surface.set_stroke_color(colors::SHAPE_STROKE);
    for shape in &state.shapes {
        draw_shape(surface, shape);
    }

    surface.set_fill_color(colors::WALL);
    draw_shape(surface, &state.wall);
}

/// Arc recorded between `begin_path` and `stroke`/`fill`
#[derive(Debug, Clone, Copy)]
struct PathArc {
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
}

/// Headless tessellating surface.
///
/// Accumulates one frame's triangles; `clear` starts the next frame with a
/// background quad over the cleared region. The buffer is `Pod`, so
/// [`MeshSurface::as_bytes`] hands the whole frame to a GPU queue unchanged.
#[derive(Debug)]
pub struct MeshSurface {
    vertices: Vec<Vertex>,
    path: Option<PathArc>,
    fill_color: [f32; 4],
    stroke_color: [f32; 4],
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshSurface {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            path: None,
            fill_color: colors::SHAPE_FILL,
            stroke_color: colors::SHAPE_STROKE,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The frame as raw bytes, ready for a vertex-buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, region: Aabb) {
        self.vertices.clear();
        self.path = None;
        push_rect(
            &mut self.vertices,
            Vec2::new(region.x_start, region.y_start),
            region.width(),
            region.height(),
            colors::BACKGROUND,
        );
    }

    fn set_fill_color(&mut self, color: [f32; 4]) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: [f32; 4]) {
        self.stroke_color = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        push_rect(
            &mut self.vertices,
            Vec2::new(x, y),
            width,
            height,
            self.fill_color,
        );
    }

    fn begin_path(&mut self) {
        self.path = None;
    }

    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        counterclockwise: bool,
    ) {
        // A reversed sweep covers the same band with endpoints swapped
        let (start_angle, end_angle) = if counterclockwise {
            (end_angle, start_angle)
        } else {
            (start_angle, end_angle)
        };
        self.path = Some(PathArc {
            center: Vec2::new(x, y),
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        if let Some(arc) = self.path {
            let segments = circle_segments(arc.radius, arc.start_angle, arc.end_angle);
            push_arc_stroke(
                &mut self.vertices,
                arc.center,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                STROKE_HALF_WIDTH,
                self.stroke_color,
                segments,
            );
        }
    }

    fn fill(&mut self) {
        if let Some(arc) = self.path {
            let segments = circle_segments(arc.radius, arc.start_angle, arc.end_angle);
            push_arc_fill(
                &mut self.vertices,
                arc.center,
                arc.radius,
                arc.start_angle,
                arc.end_angle,
                self.fill_color,
                segments,
            );
        }
    }
}
