//! Bullets fired by the weapon holder
//!
//! The divider acts as a wall for bullets: a shot never reaches the other half.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::PlayerId;
use crate::consts::*;
use crate::{distance, normalize};

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half of the arena the bullet was fired in
    pub side: PlayerId,
}

impl Bullet {
    /// Create a bullet at `origin` heading along `dir` (any length).
    ///
    /// The owning half is whichever side `origin` lies on.
    pub fn new(origin: Vec2, dir: Vec2) -> Self {
        Self::fired_from(PlayerId::side_of(origin.x), origin, dir)
    }

    /// Create a bullet owned by `side` regardless of where it spawns
    pub fn fired_from(side: PlayerId, origin: Vec2, dir: Vec2) -> Self {
        Self {
            pos: origin,
            vel: normalize(dir) * BULLET_SPEED,
            side,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.x < 0.0 || self.pos.x > ARENA_WIDTH || self.pos.y < 0.0 || self.pos.y > ARENA_HEIGHT
    }

    /// True once the bullet has reached the divider band from its own side
    pub fn should_stop_at_middle(&self) -> bool {
        match self.side {
            PlayerId::Left => self.pos.x >= MIDLINE_X - MIDLINE_BULLET_BAND,
            PlayerId::Right => self.pos.x <= MIDLINE_X + MIDLINE_BULLET_BAND,
        }
    }

    pub fn check_hit(&self, enemy: &Enemy) -> bool {
        distance(self.pos, enemy.pos) < BULLET_RADIUS + ENEMY_RADIUS
    }
}
