//! Player-controlled characters
//!
//! Each player is locked to one half of the arena. The half is the player's
//! identity: `PlayerId::Left` always lives left of the divider.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::{Aim, PlayerInput};
use crate::consts::*;
use crate::{angle_toward, heading, normalize};

/// Stable handle for one of the two players (also their half of the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Left,
    Right,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::Left, PlayerId::Right];

    /// Index into `GameState::players`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::Left => 0,
            PlayerId::Right => 1,
        }
    }

    /// Half of the arena containing `x`
    pub fn side_of(x: f32) -> PlayerId {
        if x < MIDLINE_X {
            PlayerId::Left
        } else {
            PlayerId::Right
        }
    }

    /// Allowed x range for a player on this side
    pub fn x_bounds(self) -> (f32, f32) {
        match self {
            PlayerId::Left => (PLAYER_RADIUS, MIDLINE_X - PLAYER_RADIUS - MIDLINE_MARGIN),
            PlayerId::Right => (MIDLINE_X + PLAYER_RADIUS + MIDLINE_MARGIN, ARENA_WIDTH - PLAYER_RADIUS),
        }
    }

    /// Spawn point at match start
    pub fn start_pos(self) -> Vec2 {
        let x = match self {
            PlayerId::Left => ARENA_WIDTH / 4.0,
            PlayerId::Right => 3.0 * ARENA_WIDTH / 4.0,
        };
        Vec2::new(x, ARENA_HEIGHT / 2.0)
    }

    /// Label used in HUD text and logs
    pub fn label(self) -> &'static str {
        match self {
            PlayerId::Left => "P1",
            PlayerId::Right => "P2",
        }
    }
}

/// Which device drives a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    Controller,
    #[default]
    KeyboardMouse,
}

/// A player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub pos: Vec2,
    /// Facing angle (radians)
    pub facing: f32,
    /// Remaining hits; can dip below zero if several land in one frame
    pub health: i32,
    pub has_weapon: bool,
    pub input_mode: InputMode,
}

impl Player {
    pub fn new(id: PlayerId, input_mode: InputMode) -> Self {
        Self {
            id,
            pos: id.start_pos(),
            facing: 0.0,
            health: PLAYER_MAX_HEALTH,
            has_weapon: false,
            input_mode,
        }
    }

    /// Apply one frame of input: aim, move, then clamp into our half
    pub fn update(&mut self, dt: f32, input: &PlayerInput) {
        match input.aim {
            Aim::Keep => {}
            Aim::Angle(angle) => self.facing = angle,
            Aim::Point(target) => self.facing = angle_toward(self.pos, target),
        }

        let dir = normalize(input.movement);
        self.pos += dir * PLAYER_SPEED * dt;
        self.clamp_to_side();
    }

    /// Keep the player inside the arena and on its own side of the divider
    pub fn clamp_to_side(&mut self) {
        let (min_x, max_x) = self.id.x_bounds();
        self.pos.x = self.pos.x.clamp(min_x, max_x);
        self.pos.y = self.pos.y.clamp(PLAYER_RADIUS, ARENA_HEIGHT - PLAYER_RADIUS);
    }

    pub fn take_damage(&mut self) {
        self.health -= 1;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Unit vector along the facing angle
    #[inline]
    pub fn aim_direction(&self) -> Vec2 {
        heading(self.facing)
    }

    /// Where bullets leave the player and the held weapon sits
    pub fn muzzle(&self) -> Vec2 {
        self.pos + self.aim_direction() * MUZZLE_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn moving(movement: Vec2) -> PlayerInput {
        PlayerInput {
            movement,
            ..Default::default()
        }
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut p = Player::new(PlayerId::Left, InputMode::KeyboardMouse);
        let start = p.pos;
        p.update(0.1, &moving(Vec2::new(1.0, 1.0)));
        let travelled = p.pos.distance(start);
        assert!((travelled - PLAYER_SPEED * 0.1).abs() < 0.01);
    }

    #[test]
    fn test_left_player_cannot_cross_midline() {
        let mut p = Player::new(PlayerId::Left, InputMode::KeyboardMouse);
        for _ in 0..600 {
            p.update(FRAME_DT, &moving(Vec2::X));
        }
        assert_eq!(p.pos.x, MIDLINE_X - PLAYER_RADIUS - MIDLINE_MARGIN);
    }

    #[test]
    fn test_right_player_cannot_cross_midline() {
        let mut p = Player::new(PlayerId::Right, InputMode::KeyboardMouse);
        for _ in 0..600 {
            p.update(FRAME_DT, &moving(Vec2::NEG_X));
        }
        assert_eq!(p.pos.x, MIDLINE_X + PLAYER_RADIUS + MIDLINE_MARGIN);
    }

    #[test]
    fn test_vertical_clamp() {
        let mut p = Player::new(PlayerId::Right, InputMode::KeyboardMouse);
        for _ in 0..600 {
            p.update(FRAME_DT, &moving(Vec2::NEG_Y));
        }
        assert_eq!(p.pos.y, PLAYER_RADIUS);
    }

    #[test]
    fn test_aim_updates_without_movement() {
        let mut p = Player::new(PlayerId::Left, InputMode::KeyboardMouse);
        let start = p.pos;
        let input = PlayerInput {
            aim: Aim::Point(p.pos + Vec2::new(0.0, 50.0)),
            ..Default::default()
        };
        p.update(FRAME_DT, &input);
        assert_eq!(p.pos, start);
        assert!((p.facing - PI / 2.0).abs() < 1e-5);

        let input = PlayerInput {
            aim: Aim::Angle(PI),
            ..Default::default()
        };
        p.update(FRAME_DT, &input);
        assert!((p.aim_direction() - Vec2::NEG_X).length() < 1e-5);

        // No aim input keeps the last facing
        p.update(FRAME_DT, &PlayerInput::default());
        assert_eq!(p.facing, PI);
    }

    #[test]
    fn test_damage_is_not_floored() {
        let mut p = Player::new(PlayerId::Left, InputMode::KeyboardMouse);
        for _ in 0..4 {
            p.take_damage();
        }
        assert_eq!(p.health, PLAYER_MAX_HEALTH - 4);
        assert!(!p.is_alive());
    }
}
