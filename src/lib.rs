//! Quick Throw - A two-player split-screen arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (players, enemies, bullets, the shared weapon)
//! - `input`: Raw device snapshot to per-player simulation input
//! - `hud`: Derived display values (health, controls, game over banner)
//! - `renderer`: Backend-agnostic draw list and vertex tessellation

pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;

pub use hud::Hud;
pub use input::{InputRouter, RawInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// x coordinate of the divider between the two halves
    pub const MIDLINE_X: f32 = ARENA_WIDTH / 2.0;

    /// Nominal frame time (the shell caps at 60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Movement speeds (units per second)
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const ENEMY_SPEED: f32 = 80.0;
    pub const BULLET_SPEED: f32 = 500.0;
    pub const WEAPON_THROW_SPEED: f32 = 400.0;

    /// Collision radii
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const BULLET_RADIUS: f32 = 5.0;

    pub const PLAYER_MAX_HEALTH: i32 = 3;
    /// Extra gap a player keeps from the divider, on top of its radius
    pub const MIDLINE_MARGIN: f32 = 2.0;
    /// Bullets stop this far before reaching the divider
    pub const MIDLINE_BULLET_BAND: f32 = 5.0;

    /// Seconds between enemy spawn waves
    pub const ENEMY_SPAWN_INTERVAL: f32 = 2.0;
    /// Enemy count above which each wave also spawns from the top/bottom edges
    pub const ENEMY_SURGE_THRESHOLD: usize = 10;
    /// Distance kept from arena corners when picking spawn coordinates
    pub const SPAWN_EDGE_INSET: f32 = 50.0;

    /// Distance in front of a player where the weapon sits and bullets spawn
    pub const MUZZLE_OFFSET: f32 = 30.0;
    pub const WEAPON_PICKUP_RADIUS: f32 = 40.0;
    pub const WEAPON_THROW_COOLDOWN: f32 = 0.3;
    /// Per-update velocity multiplier while the weapon is in flight
    pub const WEAPON_FLIGHT_DAMPING: f32 = 0.98;
    /// Flight ends once both velocity components drop below this
    pub const WEAPON_REST_SPEED: f32 = 10.0;

    /// Joystick axes report [-100, 100]; smaller magnitudes are ignored
    pub const JOYSTICK_DEADZONE: f32 = 15.0;
    /// Z axis magnitude that counts as a pulled trigger
    pub const TRIGGER_THRESHOLD: f32 = 50.0;
}

/// Normalize a vector, leaving a zero vector unchanged
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing along `angle` (radians, screen coordinates)
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle (radians) of the ray from `from` toward `to`
#[inline]
pub fn angle_toward(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}
