//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bullet;
pub mod enemy;
pub mod player;
pub mod state;
pub mod tick;
pub mod weapon;

pub use autopilot::Autopilot;
pub use bullet::Bullet;
pub use enemy::Enemy;
pub use player::{InputMode, Player, PlayerId};
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use tick::{Aim, PlayerInput, TickInput, shoot, spawn_wave, throw_weapon, tick};
pub use weapon::{Weapon, WeaponState};
