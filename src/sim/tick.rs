//! Per-tick state transition and scene construction
//!
//! The tick is a pure step function over [`WorldState`]: no drawing, no
//! clock, no platform dependency. The frame driver renders the current state
//! and then calls [`tick`] once per fixed timestep.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bounds::Extent;
use super::shape::Shape;
use super::state::WorldState;
use crate::consts::{DEFAULT_CIRCLE_RADIUS, DEFAULT_RECT_SIZE};

/// Advance the world by one tick.
///
/// For each active shape, in insertion order: bounce off the obstacle if the
/// bounding boxes overlap, then reverse against the canvas edges, then move.
/// The obstacle check and the edge check are independent; both can fire in
/// the same tick. The wall is excluded from the iteration and never moves.
pub fn tick(state: &mut WorldState) {
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;

    let canvas = state.canvas;
    let wall = state.wall;
    for shape in &mut state.shapes {
        if shape.collides(&wall) {
            shape.bounce();
        }
        shape.check_wall_collision(canvas);
        shape.advance();
    }
}

/// The classic demo arrangement: a circle and a square bouncing around one
/// small square obstacle
pub fn classic_scene(canvas: Extent) -> WorldState {
    let mut state = WorldState::new(canvas, 0);
    state.push_shape(Shape::circle(20.0, Vec2::new(300.0, 200.0)));
    state.push_shape(Shape::rect(
        DEFAULT_RECT_SIZE,
        DEFAULT_RECT_SIZE,
        Vec2::new(100.0, 100.0),
    ));
    state
}

/// Generate a scene of `count` random shapes from a seed.
///
/// Kind, geometry, and position vary per shape; velocity stays at the fixed
/// construction default. Positions leave a margin so nothing starts embedded
/// in a canvas edge. Same seed, same world.
pub fn generate_scene(canvas: Extent, seed: u64, count: usize) -> WorldState {
    let mut state = WorldState::new(canvas, seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    for _ in 0..count {
        let shape = if rng.random_bool(0.5) {
            let radius = rng.random_range(DEFAULT_CIRCLE_RADIUS..=4.0 * DEFAULT_CIRCLE_RADIUS);
            let x = rng.random_range(radius..canvas.width - radius);
            let y = rng.random_range(radius..canvas.height - radius);
            Shape::circle(radius, Vec2::new(x, y))
        } else {
            let width = rng.random_range(20.0..=DEFAULT_RECT_SIZE);
            let height = rng.random_range(20.0..=DEFAULT_RECT_SIZE);
            let x = rng.random_range(0.0..canvas.width - width);
            let y = rng.random_range(0.0..canvas.height - height);
            Shape::rect(width, height, Vec2::new(x, y))
        };
        state.push_shape(shape);
    }

    log::debug!("generated scene: {} shapes, seed {}", count, seed);
    state
}
