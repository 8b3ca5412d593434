//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick motion only
//! - Seeded RNG only (scene construction)
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod motion;
pub mod shape;
pub mod state;
pub mod tick;

pub use bounds::{Aabb, Extent};
pub use motion::Motion;
pub use shape::{Shape, ShapeKind};
pub use state::{Phase, WorldState};
pub use tick::{classic_scene, generate_scene, tick};
