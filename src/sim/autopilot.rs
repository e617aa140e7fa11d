//! Built-in bot for demo mode and headless runs
//!
//! Plays both halves with simple rules: face the closest enemy, back off when
//! it gets close, shoot on a fixed cadence, and pass the weapon across after
//! holding it for a while. Uses no RNG, so a run is fully determined by the
//! match seed.

use glam::Vec2;

use super::player::PlayerId;
use super::state::GameState;
use super::tick::{Aim, PlayerInput, TickInput};
use crate::normalize;

/// Frames between shots while holding the weapon
const SHOT_CADENCE: u64 = 12;
/// Frames to hold the weapon before passing it across
const HOLD_FRAMES: u32 = 180;
/// Enemies closer than this make the bot back away
const PANIC_DISTANCE: f32 = 120.0;
/// Distance from the start point that counts as home
const HOME_SLACK: f32 = 8.0;

/// Idle/demo mode driver for both players
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Consecutive frames each player has held the weapon
    held_frames: [u32; 2],
    /// Also request a restart once the match ends
    pub auto_restart: bool,
}

impl Autopilot {
    pub fn new(auto_restart: bool) -> Self {
        Self {
            held_frames: [0; 2],
            auto_restart,
        }
    }

    /// Input for both players for the next tick
    pub fn inputs(&mut self, state: &GameState) -> TickInput {
        TickInput {
            players: [
                self.drive(state, PlayerId::Left),
                self.drive(state, PlayerId::Right),
            ],
            restart: self.auto_restart && state.is_game_over(),
        }
    }

    /// Input for one player for the next tick
    pub fn drive(&mut self, state: &GameState, id: PlayerId) -> PlayerInput {
        let player = state.player(id);

        let held = &mut self.held_frames[id.index()];
        if player.has_weapon {
            *held += 1;
        } else {
            *held = 0;
        }

        let threat = state
            .enemies
            .iter()
            .filter(|e| e.target == id)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player.pos)
                    .partial_cmp(&b.pos.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let loose_weapon = state.weapon.holder().is_none()
            && PlayerId::side_of(state.weapon.pos.x) == id;

        let movement = match threat {
            Some(enemy) if enemy.pos.distance(player.pos) < PANIC_DISTANCE => {
                normalize(player.pos - enemy.pos)
            }
            _ if loose_weapon => normalize(state.weapon.pos - player.pos),
            _ => {
                let home = id.start_pos() - player.pos;
                if home.length() > HOME_SLACK {
                    normalize(home)
                } else {
                    Vec2::ZERO
                }
            }
        };

        let aim = match threat {
            Some(enemy) => Aim::Point(enemy.pos),
            None => Aim::Keep,
        };

        let shoot = player.has_weapon && threat.is_some() && state.frame % SHOT_CADENCE == 0;
        let throw = player.has_weapon && *held >= HOLD_FRAMES;
        if throw {
            *held = 0;
        }

        PlayerInput {
            movement,
            aim,
            shoot,
            throw,
            mode: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::enemy::Enemy;
    use crate::sim::tick::tick;

    #[test]
    fn test_faces_and_flees_close_enemy() {
        let mut state = GameState::new(1);
        let pos = state.players[0].pos;
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, pos + Vec2::new(50.0, 0.0), PlayerId::Left));

        let mut bot = Autopilot::default();
        let input = bot.drive(&state, PlayerId::Left);
        assert_eq!(input.aim, Aim::Point(pos + Vec2::new(50.0, 0.0)));
        assert!(input.movement.x < 0.0);
        // Frame 0 is on the shot cadence and the left player starts armed
        assert!(input.shoot);
    }

    #[test]
    fn test_passes_weapon_after_holding() {
        let mut state = GameState::new(1);
        let mut bot = Autopilot::default();
        let mut thrown = false;
        for _ in 0..=HOLD_FRAMES {
            let input = bot.inputs(&state);
            if input.players[0].throw {
                thrown = true;
            }
            tick(&mut state, &input, FRAME_DT);
            if thrown {
                break;
            }
        }
        assert!(thrown);
        assert!(!state.players[0].has_weapon);
    }

    #[test]
    fn test_auto_restart() {
        let mut state = GameState::new(1);
        state.phase = crate::sim::state::GamePhase::GameOver;
        let mut bot = Autopilot::new(true);
        assert!(bot.inputs(&state).restart);
        let mut bot = Autopilot::new(false);
        assert!(!bot.inputs(&state).restart);
    }
}
