//! Shape entities and their collision behavior
//!
//! A shape is a motion state plus variant-specific geometry. The two variants
//! share one update algorithm: everything the tick does to a shape goes
//! through its bounding box, so rectangles and circles differ only in how
//! they project onto an [`Aabb`] and how the renderer draws them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::{Aabb, Extent};
use super::motion::Motion;
use crate::consts::{DEFAULT_VELOCITY_X, DEFAULT_VELOCITY_Y};

/// Variant-specific geometry, fixed after construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rect { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// A moving (or, for the wall, stationary) entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    pub motion: Motion,
    pub kind: ShapeKind,
}

impl Shape {
    /// Construction velocity shared by every shape. Constructors take no
    /// velocity parameter; callers that need a different one write
    /// `shape.motion.vel` after construction.
    pub const DEFAULT_VELOCITY: Vec2 = Vec2::new(DEFAULT_VELOCITY_X, DEFAULT_VELOCITY_Y);

    /// A rectangle anchored at `pos` (its top-left corner)
    pub fn rect(width: f32, height: f32, pos: Vec2) -> Self {
        Self {
            id: 0,
            motion: Motion::new(pos, Self::DEFAULT_VELOCITY),
            kind: ShapeKind::Rect { width, height },
        }
    }

    /// A circle centered at `pos`
    pub fn circle(radius: f32, pos: Vec2) -> Self {
        Self {
            id: 0,
            motion: Motion::new(pos, Self::DEFAULT_VELOCITY),
            kind: ShapeKind::Circle { radius },
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.motion.pos
    }

    /// Bounding box at the current position.
    ///
    /// A circle's vertical extent runs from its center down to `y + radius`,
    /// while its horizontal extent is the full `x - radius` to `x + radius`.
    /// Edge reversal and obstacle tests rely on that asymmetry; changing it
    /// changes every bounce height.
    pub fn bounds(&self) -> Aabb {
        let Vec2 { x, y } = self.motion.pos;
        match self.kind {
            ShapeKind::Rect { width, height } => Aabb::new(x, x + width, y, y + height),
            ShapeKind::Circle { radius } => Aabb::new(x - radius, x + radius, y, y + radius),
        }
    }

    /// Bounding-box overlap test, inclusive on both axes. Circles are tested
    /// via their box, not their disk, so near-corner pairs can report a hit
    /// the exact geometry would miss.
    pub fn collides(&self, other: &Shape) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    /// Reverse a velocity component for each canvas edge the bounding box
    /// touches or crosses. The x and y checks are independent: a shape in a
    /// corner flips both axes in one call.
    pub fn check_wall_collision(&mut self, canvas: Extent) {
        let b = self.bounds();
        if b.x_end >= canvas.width || b.x_start <= 0.0 {
            self.motion.reverse_x();
        }
        if b.y_end >= canvas.height || b.y_start <= 0.0 {
            self.motion.reverse_y();
        }
    }

    /// Full velocity reversal, regardless of approach angle or which side
    /// was struck. Not a reflection off a collision normal.
    pub fn bounce(&mut self) {
        self.motion.reverse();
    }

    /// Advance position by the current velocity
    pub fn advance(&mut self) {
        self.motion.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_bounds() {
        let rect = Shape::rect(100.0, 100.0, Vec2::new(100.0, 100.0));
        let b = rect.bounds();
        assert_eq!((b.x_start, b.x_end, b.y_start, b.y_end), (100.0, 200.0, 100.0, 200.0));
    }

    #[test]
    fn test_circle_bounds_vertical_asymmetry() {
        let circle = Shape::circle(20.0, Vec2::new(300.0, 200.0));
        let b = circle.bounds();
        assert_eq!(b.x_start, 280.0);
        assert_eq!(b.x_end, 320.0);
        // Top edge is the center, not center - radius
        assert_eq!(b.y_start, 200.0);
        assert_eq!(b.y_end, 220.0);
    }

    #[test]
    fn test_bounds_track_position() {
        let mut rect = Shape::rect(100.0, 100.0, Vec2::new(100.0, 100.0));
        rect.advance();
        rect.advance();
        let b = rect.bounds();
        assert_eq!((b.x_start, b.x_end), (120.0, 220.0));
        assert_eq!((b.y_start, b.y_end), (120.0, 220.0));
    }

    #[test]
    fn test_rect_misses_distant_wall() {
        let rect = Shape::rect(100.0, 100.0, Vec2::new(100.0, 100.0));
        let wall = Shape::rect(50.0, 50.0, Vec2::new(400.0, 300.0));
        assert!(!rect.collides(&wall));
        assert!(!wall.collides(&rect));
    }

    #[test]
    fn test_overlapping_shapes_collide() {
        let rect = Shape::rect(100.0, 100.0, Vec2::new(100.0, 100.0));
        let circle = Shape::circle(20.0, Vec2::new(190.0, 150.0));
        assert!(rect.collides(&circle));
        assert!(circle.collides(&rect));
    }

    #[test]
    fn test_wall_collision_right_edge_flips_x() {
        let canvas = Extent::new(900.0, 600.0);
        let mut rect = Shape::rect(100.0, 100.0, Vec2::new(800.0, 250.0));
        rect.check_wall_collision(canvas);
        assert_eq!(rect.motion.vel, Vec2::new(-10.0, 10.0));
    }

    #[test]
    fn test_wall_collision_clear_of_edges_is_noop() {
        let canvas = Extent::new(900.0, 600.0);
        let mut rect = Shape::rect(100.0, 100.0, Vec2::new(400.0, 250.0));
        rect.check_wall_collision(canvas);
        assert_eq!(rect.motion.vel, Shape::DEFAULT_VELOCITY);
    }

    #[test]
    fn test_wall_collision_corner_flips_both() {
        let canvas = Extent::new(900.0, 600.0);
        // Bounding box exceeds the right and bottom edges simultaneously
        let mut rect = Shape::rect(100.0, 100.0, Vec2::new(850.0, 550.0));
        rect.check_wall_collision(canvas);
        assert_eq!(rect.motion.vel, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_circle_top_edge_uses_center() {
        let canvas = Extent::new(900.0, 600.0);
        // Center exactly on the top edge: y_start == 0 triggers a flip
        let mut at_top = Shape::circle(20.0, Vec2::new(450.0, 0.0));
        at_top.check_wall_collision(canvas);
        assert_eq!(at_top.motion.vel.y, -10.0);

        // Center just below the edge: the disk pokes above the canvas but the
        // bounding box does not, so no flip
        let mut near_top = Shape::circle(20.0, Vec2::new(450.0, 5.0));
        near_top.check_wall_collision(canvas);
        assert_eq!(near_top.motion.vel.y, 10.0);
    }

    #[test]
    fn test_bounce_negates_both_components() {
        let mut circle = Shape::circle(10.0, Vec2::new(100.0, 100.0));
        circle.bounce();
        assert_eq!(circle.motion.vel, Vec2::new(-10.0, -10.0));
        circle.bounce();
        assert_eq!(circle.motion.vel, Vec2::new(10.0, 10.0));
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        let coord = -500.0f32..500.0;
        let size = 1.0f32..200.0;
        prop_oneof![
            (coord.clone(), coord.clone(), size.clone(), size.clone()).prop_map(
                |(x, y, w, h)| Shape::rect(w, h, Vec2::new(x, y))
            ),
            (coord.clone(), coord, size).prop_map(|(x, y, r)| Shape::circle(r, Vec2::new(x, y))),
        ]
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(a in arb_shape(), b in arb_shape()) {
            prop_assert_eq!(a.collides(&b), b.collides(&a));
        }

        #[test]
        fn prop_bounce_twice_is_identity(mut shape in arb_shape(), vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
            shape.motion.vel = Vec2::new(vx, vy);
            shape.bounce();
            shape.bounce();
            prop_assert_eq!(shape.motion.vel, Vec2::new(vx, vy));
        }

        #[test]
        fn prop_shape_always_collides_with_itself(shape in arb_shape()) {
            prop_assert!(shape.collides(&shape));
        }
    }
}
