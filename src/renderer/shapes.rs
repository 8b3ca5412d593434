//! Shape tessellation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Append two triangles covering an axis-aligned rectangle
pub fn push_rect(out: &mut Vec<Vertex>, origin: Vec2, width: f32, height: f32, color: [f32; 4]) {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + width, origin.y + height);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

/// Append a triangle fan covering an arc wedge from `start_angle` to
/// `end_angle`. A full circle is the `0..TAU` case.
pub fn push_arc_fill(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: [f32; 4],
    segments: u32,
) {
    let segments = segments.max(3);
    let span = end_angle - start_angle;

    for i in 0..segments {
        let theta1 = start_angle + span * (i as f32 / segments as f32);
        let theta2 = start_angle + span * ((i + 1) as f32 / segments as f32);

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Append a thin ring band along an arc, used for stroked outlines
pub fn push_arc_stroke(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    half_width: f32,
    color: [f32; 4],
    segments: u32,
) {
    let segments = segments.max(3);
    let span = end_angle - start_angle;
    let inner_r = (radius - half_width).max(0.0);
    let outer_r = radius + half_width;

    for i in 0..segments {
        let theta1 = start_angle + span * (i as f32 / segments as f32);
        let theta2 = start_angle + span * ((i + 1) as f32 / segments as f32);

        let inner1 = center + inner_r * Vec2::new(theta1.cos(), theta1.sin());
        let outer1 = center + outer_r * Vec2::new(theta1.cos(), theta1.sin());
        let inner2 = center + inner_r * Vec2::new(theta2.cos(), theta2.sin());
        let outer2 = center + outer_r * Vec2::new(theta2.cos(), theta2.sin());

        out.push(Vertex::new(inner1.x, inner1.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(inner2.x, inner2.y, color));

        out.push(Vertex::new(inner2.x, inner2.y, color));
        out.push(Vertex::new(outer1.x, outer1.y, color));
        out.push(Vertex::new(outer2.x, outer2.y, color));
    }
}

/// Segment count giving smooth circles at the sizes this crate draws
pub fn circle_segments(radius: f32, start_angle: f32, end_angle: f32) -> u32 {
    let span = (end_angle - start_angle).abs().min(TAU);
    // Roughly one segment per 4 units of arc length
    ((span * radius / 4.0) as u32).clamp(12, 128)
}
