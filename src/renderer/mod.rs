//! Rendering module
//!
//! A canvas-style [`Surface`] trait at the boundary, and a headless mesh
//! tessellator behind it. No GPU or window dependency lives in this crate;
//! embedders upload [`MeshSurface::as_bytes`] however they like.

pub mod shapes;
pub mod surface;
pub mod vertex;

pub use surface::{MeshSurface, Surface, draw_shape, render_frame};
pub use vertex::Vertex;
