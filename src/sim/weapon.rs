//! The single shared weapon
//!
//! The weapon is always in exactly one of three states. Holding and flying are
//! separate variants, so a held weapon can never also be in flight.
//!
//! After a throw the thrower is locked out for `WEAPON_THROW_COOLDOWN`
//! seconds, otherwise the weapon would be caught again on the frame it leaves
//! the thrower's hand.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::consts::*;
use crate::{distance, heading, normalize};

/// Possession state of the weapon
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum WeaponState {
    /// Lying still, anyone in range can pick it up
    #[default]
    Grounded,
    /// Carried in front of a player
    Held { holder: PlayerId },
    /// Thrown and sliding to a stop
    Flying { vel: Vec2 },
}

/// The shared weapon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub pos: Vec2,
    /// Display rotation (radians)
    pub rotation: f32,
    pub state: WeaponState,
    /// Who threw it last, cleared when the cooldown runs out
    pub last_thrower: Option<PlayerId>,
    /// Seconds left before `last_thrower` may pick it up again
    pub cooldown: f32,
}

impl Weapon {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            state: WeaponState::Grounded,
            last_thrower: None,
            cooldown: 0.0,
        }
    }

    pub fn holder(&self) -> Option<PlayerId> {
        match self.state {
            WeaponState::Held { holder } => Some(holder),
            _ => None,
        }
    }

    pub fn is_flying(&self) -> bool {
        matches!(self.state, WeaponState::Flying { .. })
    }

    /// Current velocity (zero unless flying)
    pub fn vel(&self) -> Vec2 {
        match self.state {
            WeaponState::Flying { vel } => vel,
            _ => Vec2::ZERO,
        }
    }

    /// Advance cooldown and motion by one frame
    pub fn update(&mut self, dt: f32, players: &[Player; 2]) {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
            if self.cooldown <= 0.0 {
                self.cooldown = 0.0;
                self.last_thrower = None;
            }
        }

        match self.state {
            WeaponState::Grounded => {}
            WeaponState::Flying { vel } => {
                self.pos += vel * dt;
                self.rotation = vel.y.atan2(vel.x);

                let vel = vel * WEAPON_FLIGHT_DAMPING;
                self.state = if vel.x.abs() < WEAPON_REST_SPEED && vel.y.abs() < WEAPON_REST_SPEED {
                    WeaponState::Grounded
                } else {
                    WeaponState::Flying { vel }
                };
            }
            WeaponState::Held { holder } => {
                let player = &players[holder.index()];
                self.pos = player.pos + heading(player.facing) * MUZZLE_OFFSET;
                self.rotation = player.facing;
            }
        }
    }

    /// Throw from `from` toward `to`'s current position.
    ///
    /// Ignored unless `from` is holding the weapon. Returns whether the throw
    /// happened.
    pub fn throw_to(&mut self, from: &mut Player, to: &Player) -> bool {
        if self.holder() != Some(from.id) {
            return false;
        }

        from.has_weapon = false;
        self.last_thrower = Some(from.id);
        self.cooldown = WEAPON_THROW_COOLDOWN;

        let dir = normalize(to.pos - self.pos);
        self.state = WeaponState::Flying {
            vel: dir * WEAPON_THROW_SPEED,
        };
        true
    }

    /// Try to hand the weapon to `candidate`.
    ///
    /// Works on a grounded weapon and on one still in flight (a catch). The
    /// last thrower is refused until the cooldown expires.
    pub fn check_pickup(&mut self, candidate: &mut Player) -> bool {
        if self.last_thrower == Some(candidate.id) && self.cooldown > 0.0 {
            return false;
        }
        if self.holder().is_some() {
            return false;
        }
        if distance(self.pos, candidate.pos) >= WEAPON_PICKUP_RADIUS {
            return false;
        }

        self.state = WeaponState::Held {
            holder: candidate.id,
        };
        candidate.has_weapon = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::player::InputMode;

    fn players() -> [Player; 2] {
        [
            Player::new(PlayerId::Left, InputMode::KeyboardMouse),
            Player::new(PlayerId::Right, InputMode::KeyboardMouse),
        ]
    }

    fn held_by_left(players: &mut [Player; 2]) -> Weapon {
        let mut weapon = Weapon::new(players[0].pos);
        assert!(weapon.check_pickup(&mut players[0]));
        weapon.update(FRAME_DT, players);
        weapon
    }

    #[test]
    fn test_pickup_in_range() {
        let mut players = players();
        let mut weapon = Weapon::new(players[0].pos + Vec2::new(39.0, 0.0));
        assert!(weapon.check_pickup(&mut players[0]));
        assert_eq!(weapon.holder(), Some(PlayerId::Left));
        assert!(players[0].has_weapon);
    }

    #[test]
    fn test_pickup_out_of_range() {
        let mut players = players();
        let mut weapon = Weapon::new(players[0].pos + Vec2::new(40.0, 0.0));
        assert!(!weapon.check_pickup(&mut players[0]));
        assert_eq!(weapon.state, WeaponState::Grounded);
        assert!(!players[0].has_weapon);
    }

    #[test]
    fn test_held_weapon_cannot_be_taken() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        players[1].pos = weapon.pos;
        assert!(!weapon.check_pickup(&mut players[1]));
        assert_eq!(weapon.holder(), Some(PlayerId::Left));
    }

    #[test]
    fn test_held_weapon_follows_facing() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        players[0].facing = std::f32::consts::FRAC_PI_2;
        weapon.update(FRAME_DT, &players);
        let expected = players[0].pos + Vec2::new(0.0, MUZZLE_OFFSET);
        assert!((weapon.pos - expected).length() < 1e-3);
        assert_eq!(weapon.rotation, players[0].facing);
    }

    #[test]
    fn test_flying_rotation_tracks_velocity() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        players[1].pos = players[0].pos + Vec2::new(600.0, 300.0);
        let aim = players[1].pos - weapon.pos;
        let [left, right] = &mut players;
        assert!(weapon.throw_to(left, right));

        weapon.update(FRAME_DT, &players);
        assert!(weapon.is_flying());
        let vel = weapon.vel();
        assert!((weapon.rotation - vel.y.atan2(vel.x)).abs() < 1e-5);
        assert!((weapon.rotation - aim.y.atan2(aim.x)).abs() < 1e-5);
    }

    #[test]
    fn test_throw_requires_holder() {
        let mut players = players();
        let mut weapon = Weapon::new(Vec2::new(600.0, 400.0));
        let [left, right] = &mut players;
        assert!(!weapon.throw_to(left, right));
        assert_eq!(weapon.state, WeaponState::Grounded);
        assert_eq!(weapon.cooldown, 0.0);

        let mut weapon = held_by_left(&mut players);
        let [left, right] = &mut players;
        // Right is not the holder
        assert!(!weapon.throw_to(right, left));
        assert_eq!(weapon.holder(), Some(PlayerId::Left));
    }

    #[test]
    fn test_throw_starts_flight_toward_target() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        let [left, right] = &mut players;
        assert!(weapon.throw_to(left, right));

        assert!(weapon.is_flying());
        assert_eq!(weapon.holder(), None);
        assert!(!left.has_weapon);
        assert_eq!(weapon.last_thrower, Some(PlayerId::Left));
        assert_eq!(weapon.cooldown, WEAPON_THROW_COOLDOWN);
        let vel = weapon.vel();
        assert!((vel.length() - WEAPON_THROW_SPEED).abs() < 0.01);
        assert!(vel.x > 0.0);
    }

    #[test]
    fn test_thrower_locked_out_during_cooldown() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        {
            let [left, right] = &mut players;
            assert!(weapon.throw_to(left, right));
        }

        // Still within reach of the thrower, but on cooldown
        assert!(!weapon.check_pickup(&mut players[0]));

        // Let it fly out and come to rest, 0.5s total
        for _ in 0..30 {
            weapon.update(FRAME_DT, &players);
        }
        assert_eq!(weapon.cooldown, 0.0);
        assert_eq!(weapon.last_thrower, None);

        // Bring it back within reach; the thrower may take it again
        weapon.pos = players[0].pos;
        assert!(weapon.check_pickup(&mut players[0]));
        assert_eq!(weapon.holder(), Some(PlayerId::Left));
    }

    #[test]
    fn test_catch_in_flight() {
        let mut players = players();
        let mut weapon = held_by_left(&mut players);
        {
            let [left, right] = &mut players;
            weapon.throw_to(left, right);
        }
        players[1].pos = weapon.pos + Vec2::new(10.0, 0.0);
        assert!(weapon.check_pickup(&mut players[1]));
        assert_eq!(weapon.holder(), Some(PlayerId::Right));
        assert_eq!(weapon.vel(), Vec2::ZERO);
        assert!(players[1].has_weapon);
    }

    #[test]
    fn test_flight_decays_to_grounded() {
        let players = players();
        let mut weapon = Weapon::new(Vec2::new(600.0, 400.0));
        weapon.state = WeaponState::Flying {
            vel: Vec2::new(WEAPON_THROW_SPEED, 0.0),
        };

        let mut frames = 0;
        while weapon.is_flying() {
            weapon.update(FRAME_DT, &players);
            frames += 1;
            assert!(frames < 1000, "weapon never came to rest");
        }
        assert_eq!(weapon.state, WeaponState::Grounded);
        assert_eq!(weapon.vel(), Vec2::ZERO);
        // 400 * 0.98^n < 10 first holds at n = 183
        assert_eq!(frames, 183);
    }
}
