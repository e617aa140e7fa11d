//! Shape generation for 2D primitives
//!
//! Every shape comes out as a plain triangle list.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::vertex::Vertex;
use crate::heading;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Equilateral triangle inscribed in `radius`, tip pointing along `rotation`
pub fn triangle(center: Vec2, radius: f32, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    (0..3)
        .map(|k| {
            let p = center + heading(rotation + k as f32 * TAU / 3.0) * radius;
            Vertex::new(p.x, p.y, color)
        })
        .collect()
}

/// Rectangle of `size` centered on `center`, rotated by `rotation` radians
pub fn rect(center: Vec2, size: Vec2, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let along = heading(rotation);
    let across = Vec2::new(-along.y, along.x);
    let half = size * 0.5;

    let corner = |sx: f32, sy: f32| {
        let p = center + along * (half.x * sx) + across * (half.y * sy);
        Vertex::new(p.x, p.y, color)
    };

    let a = corner(-1.0, -1.0);
    let b = corner(1.0, -1.0);
    let c = corner(1.0, 1.0);
    let d = corner(-1.0, 1.0);

    // Two triangles
    vec![a, b, c, a, c, d]
}
