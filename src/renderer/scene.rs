//! Draw list built from a game state snapshot

use glam::Vec2;
use serde::Serialize;

use super::vertex::colors;
use crate::consts::*;
use crate::heading;
use crate::hud::Hud;
use crate::sim::GameState;

const DIVIDER_WIDTH: f32 = 8.0;
const INDICATOR_SIZE: Vec2 = Vec2::new(30.0, 4.0);
const WEAPON_SIZE: Vec2 = Vec2::new(30.0, 10.0);
const HEALTH_BAR_SIZE: Vec2 = Vec2::new(30.0, 10.0);
const HEALTH_BAR_SPACING: f32 = 35.0;
const HEALTH_BAR_TOP: f32 = 40.0;
const HEALTH_BAR_LEFT: [f32; 2] = [10.0, ARENA_WIDTH - 110.0];

/// Primitive with its placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
    },
    /// Equilateral triangle, tip along `rotation`
    Triangle {
        center: Vec2,
        radius: f32,
        rotation: f32,
    },
    Rect {
        center: Vec2,
        size: Vec2,
        rotation: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub shape: Shape,
    pub color: [f32; 4],
}

impl Sprite {
    fn new(shape: Shape, color: [f32; 4]) -> Self {
        Self { shape, color }
    }
}

/// Sprites in back-to-front order: divider, players, weapon, enemies,
/// bullets, then health bars
pub fn scene(state: &GameState) -> Vec<Sprite> {
    let mut sprites =
        Vec::with_capacity(4 + state.players.len() * 2 + state.enemies.len() + state.bullets.len());

    sprites.push(Sprite::new(
        Shape::Rect {
            center: Vec2::new(MIDLINE_X, ARENA_HEIGHT / 2.0),
            size: Vec2::new(DIVIDER_WIDTH, ARENA_HEIGHT),
            rotation: 0.0,
        },
        colors::DIVIDER,
    ));

    for player in &state.players {
        sprites.push(Sprite::new(
            Shape::Triangle {
                center: player.pos,
                radius: PLAYER_RADIUS,
                rotation: player.facing,
            },
            colors::PLAYER,
        ));
        // Indicator starts at the player center and points along the aim
        sprites.push(Sprite::new(
            Shape::Rect {
                center: player.pos + heading(player.facing) * (INDICATOR_SIZE.x / 2.0),
                size: INDICATOR_SIZE,
                rotation: player.facing,
            },
            colors::PLAYER,
        ));
    }

    sprites.push(Sprite::new(
        Shape::Rect {
            center: state.weapon.pos,
            size: WEAPON_SIZE,
            rotation: state.weapon.rotation,
        },
        colors::WEAPON,
    ));

    sprites.extend(state.enemies.iter().map(|enemy| {
        Sprite::new(
            Shape::Circle {
                center: enemy.pos,
                radius: ENEMY_RADIUS,
            },
            colors::ENEMY,
        )
    }));

    sprites.extend(state.bullets.iter().map(|bullet| {
        Sprite::new(
            Shape::Circle {
                center: bullet.pos,
                radius: BULLET_RADIUS,
            },
            colors::BULLET,
        )
    }));

    let hud = Hud::new(state);
    for (side, &bars) in hud.health_bars.iter().enumerate() {
        for i in 0..bars {
            let corner = Vec2::new(
                HEALTH_BAR_LEFT[side] + i as f32 * HEALTH_BAR_SPACING,
                HEALTH_BAR_TOP,
            );
            sprites.push(Sprite::new(
                Shape::Rect {
                    center: corner + HEALTH_BAR_SIZE / 2.0,
                    size: HEALTH_BAR_SIZE,
                    rotation: 0.0,
                },
                colors::HEALTH_BAR,
            ));
        }
    }

    sprites
}
