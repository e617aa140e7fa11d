//! Backend-agnostic rendering module
//!
//! Turns a game state into a flat triangle list. Any GPU or software
//! backend can upload the vertices as-is; text for the HUD comes from
//! [`crate::hud::Hud`].

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Shape, Sprite, scene};
pub use vertex::{Vertex, colors};

const CIRCLE_SEGMENTS: u32 = 24;

/// One frame ready for upload
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn new(state: &crate::sim::GameState) -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            vertices: tessellate(&scene(state)),
        }
    }
}

/// Triangle list for the sprites, in draw order
pub fn tessellate(sprites: &[Sprite]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for sprite in sprites {
        let verts = match sprite.shape {
            Shape::Circle { center, radius } => {
                shapes::circle(center, radius, sprite.color, CIRCLE_SEGMENTS)
            }
            Shape::Triangle {
                center,
                radius,
                rotation,
            } => shapes::triangle(center, radius, rotation, sprite.color),
            Shape::Rect {
                center,
                size,
                rotation,
            } => shapes::rect(center, size, rotation, sprite.color),
        };
        vertices.extend(verts);
    }
    vertices
}
