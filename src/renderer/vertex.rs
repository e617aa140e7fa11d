//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// Layout is two `f32` position components followed by four `f32` color
/// components, so a slice casts straight into a GPU vertex buffer.
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

    /// Byte stride of one vertex
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const BACKGROUND: [f32; 4] = rgb(255, 255, 255);
    pub const DIVIDER: [f32; 4] = rgb(170, 170, 170);
    pub const PLAYER: [f32; 4] = rgb(0, 0, 0);
    pub const WEAPON: [f32; 4] = rgb(0, 0, 0);
    pub const ENEMY: [f32; 4] = rgb(170, 170, 170);
    pub const BULLET: [f32; 4] = rgb(0, 0, 0);
    pub const HEALTH_BAR: [f32; 4] = rgb(0, 0, 0);
}
