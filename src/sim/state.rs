//! World state and the animation phase machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::Extent;
use super::shape::Shape;

/// Current phase of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// World is built but the frame driver has not started ticking
    Idle,
    /// Perpetual per-frame ticking; there is no transition back
    Running,
}

/// Complete animation state (deterministic, serializable)
///
/// The world owns every shape exclusively. The population is fixed at
/// startup: ticking never creates or destroys an entity, and the wall never
/// moves because nothing advances it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Scene seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Canvas dimensions used for boundary reversal
    pub canvas: Extent,
    /// Active shapes, iterated in insertion order every tick
    pub shapes: Vec<Shape>,
    /// The one static obstacle shapes bounce off
    pub wall: Shape,
    /// Next entity ID
    next_id: u32,
}

impl WorldState {
    /// Wall geometry of the classic demo scene
    pub const WALL_SIZE: f32 = 50.0;
    pub const WALL_POS: Vec2 = Vec2::new(400.0, 300.0);

    /// Create an idle world with the standard wall and no active shapes
    pub fn new(canvas: Extent, seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: Phase::Idle,
            time_ticks: 0,
            canvas,
            shapes: Vec::new(),
            wall: Shape::rect(Self::WALL_SIZE, Self::WALL_SIZE, Self::WALL_POS),
            next_id: 1,
        };
        state.wall.id = state.next_entity_id();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an active shape, assigning its ID. Startup-time operation: the
    /// population never changes once the loop is running.
    pub fn push_shape(&mut self, mut shape: Shape) {
        shape.id = self.next_entity_id();
        self.shapes.push(shape);
    }

    /// Start ticking. Happens once; Running is terminal.
    pub fn start(&mut self) {
        self.phase = Phase::Running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_idle() {
        let state = WorldState::new(Extent::new(900.0, 600.0), 1);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.time_ticks, 0);
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_start_is_terminal() {
        let mut state = WorldState::new(Extent::new(900.0, 600.0), 1);
        state.start();
        assert!(state.is_running());
        state.start();
        assert!(state.is_running());
    }

    #[test]
    fn test_push_shape_assigns_increasing_ids() {
        let mut state = WorldState::new(Extent::new(900.0, 600.0), 1);
        state.push_shape(Shape::circle(20.0, Vec2::new(300.0, 200.0)));
        state.push_shape(Shape::rect(100.0, 100.0, Vec2::new(100.0, 100.0)));
        assert!(state.shapes[0].id < state.shapes[1].id);
        assert!(state.wall.id < state.shapes[0].id);
    }
}
