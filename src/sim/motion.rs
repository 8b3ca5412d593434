//! Per-entity motion state

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and velocity of one shape, mutated in place every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance position by the current velocity (one tick of travel)
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Negate both velocity components
    pub fn reverse(&mut self) {
        self.vel = -self.vel;
    }

    /// Negate the x velocity component only
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Negate the y velocity component only
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_velocity() {
        let mut m = Motion::new(Vec2::new(300.0, 200.0), Vec2::new(10.0, 10.0));
        m.advance();
        assert_eq!(m.pos, Vec2::new(310.0, 210.0));
        // Velocity is untouched by advancing
        assert_eq!(m.vel, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_reverse_negates_both() {
        let mut m = Motion::new(Vec2::ZERO, Vec2::new(10.0, -4.0));
        m.reverse();
        assert_eq!(m.vel, Vec2::new(-10.0, 4.0));
        m.reverse();
        assert_eq!(m.vel, Vec2::new(10.0, -4.0));
    }

    #[test]
    fn test_reverse_single_axis() {
        let mut m = Motion::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        m.reverse_x();
        assert_eq!(m.vel, Vec2::new(-10.0, 10.0));
        m.reverse_y();
        assert_eq!(m.vel, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_zero_velocity_is_fixed_point() {
        let mut m = Motion::new(Vec2::new(5.0, 5.0), Vec2::ZERO);
        m.reverse();
        m.advance();
        assert_eq!(m.pos, Vec2::new(5.0, 5.0));
    }
}
