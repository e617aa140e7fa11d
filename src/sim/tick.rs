//! Per-frame simulation step
//!
//! One call to `tick` advances the match by `dt` seconds in a fixed order:
//! actions, players, weapon, spawning, enemies, bullets, game over check.

use glam::Vec2;
use rand::Rng;

use super::bullet::Bullet;
use super::enemy::Enemy;
use super::player::{InputMode, PlayerId};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Where a player wants to face this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Aim {
    /// Keep the current facing
    #[default]
    Keep,
    /// Absolute angle in radians (controller stick)
    Angle(f32),
    /// Face a point in arena coordinates (mouse pointer)
    Point(Vec2),
}

/// Commands for one player for a single tick
#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    /// Desired direction of travel; any length, zero means stand still
    pub movement: Vec2,
    pub aim: Aim,
    /// Fire a bullet (one-shot)
    pub shoot: bool,
    /// Throw the weapon to the other player (one-shot)
    pub throw: bool,
    /// Device now driving this player, if the router knows
    pub mode: Option<InputMode>,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left then right, indexed by `PlayerId::index`
    pub players: [PlayerInput; 2],
    /// Start a new match (only honoured after game over)
    pub restart: bool,
}

impl TickInput {
    pub fn player(&self, id: PlayerId) -> &PlayerInput {
        &self.players[id.index()]
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    for id in PlayerId::BOTH {
        if let Some(mode) = input.player(id).mode {
            state.player_mut(id).input_mode = mode;
        }
    }

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.frame += 1;

    for id in PlayerId::BOTH {
        let actions = input.player(id);
        if actions.throw {
            throw_weapon(state, id);
        }
        if actions.shoot {
            shoot(state, id);
        }
    }

    for id in PlayerId::BOTH {
        state.players[id.index()].update(dt, input.player(id));
    }

    state.weapon.update(dt, &state.players);
    for id in PlayerId::BOTH {
        if state.weapon.check_pickup(&mut state.players[id.index()]) {
            log::debug!("{} picked up the weapon", id.label());
            state.events.push(GameEvent::WeaponCaught { by: id });
        }
    }

    state.spawn_timer += dt;
    if state.spawn_timer > ENEMY_SPAWN_INTERVAL {
        state.spawn_timer = 0.0;
        spawn_wave(state);
    }

    update_enemies(state, dt);
    update_bullets(state, dt);

    if let Some(loser) = state.loser() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { loser });
        log::info!("Game over: {} is out (frame {})", loser.label(), state.frame);
    }
}

/// Fire a bullet from `id`'s muzzle along its aim, if it holds the weapon
pub fn shoot(state: &mut GameState, id: PlayerId) -> bool {
    let player = state.player(id);
    if !player.has_weapon {
        return false;
    }
    let bullet = Bullet::fired_from(id, player.muzzle(), player.aim_direction());
    state.bullets.push(bullet);
    state.events.push(GameEvent::Shot { by: id });
    true
}

/// Throw the weapon from `id` to the other player, if `id` holds it
pub fn throw_weapon(state: &mut GameState, id: PlayerId) -> bool {
    let [left, right] = &mut state.players;
    let thrown = match id {
        PlayerId::Left => state.weapon.throw_to(left, right),
        PlayerId::Right => state.weapon.throw_to(right, left),
    };
    if thrown {
        log::debug!("{} threw the weapon", id.label());
        state.events.push(GameEvent::WeaponThrown { by: id });
    }
    thrown
}

/// Spawn one enemy per player from its outer edge, plus one more per player
/// from the top/bottom edges once the arena is crowded. Returns the number
/// spawned.
pub fn spawn_wave(state: &mut GameState) -> u32 {
    let mut rng = state.rng_state.next_rng();
    let y_range = SPAWN_EDGE_INSET..ARENA_HEIGHT - SPAWN_EDGE_INSET;
    let y_left = rng.random_range(y_range.clone());
    let y_right = rng.random_range(y_range);

    let mut spawned = vec![
        (Vec2::new(0.0, y_left), PlayerId::Left),
        (Vec2::new(ARENA_WIDTH, y_right), PlayerId::Right),
    ];

    if state.enemies.len() + spawned.len() > ENEMY_SURGE_THRESHOLD {
        let x_left = rng.random_range(SPAWN_EDGE_INSET..MIDLINE_X - SPAWN_EDGE_INSET);
        let x_right = rng.random_range(MIDLINE_X + SPAWN_EDGE_INSET..ARENA_WIDTH - SPAWN_EDGE_INSET);
        spawned.push((Vec2::new(x_left, 0.0), PlayerId::Left));
        spawned.push((Vec2::new(x_right, ARENA_HEIGHT), PlayerId::Right));
    }

    let count = spawned.len() as u32;
    for (pos, target) in spawned {
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, pos, target));
    }

    log::debug!("Spawned {} enemies ({} alive)", count, state.enemies.len());
    state.events.push(GameEvent::EnemiesSpawned { count });
    count
}

/// Move every enemy, then let it hit at most one player (left checked first)
fn update_enemies(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.enemies.len() {
        state.enemies[i].update(dt, &state.players);

        let enemy = &state.enemies[i];
        let victim = PlayerId::BOTH
            .into_iter()
            .find(|&id| enemy.check_collision(state.player(id)));

        match victim {
            Some(id) => {
                state.enemies.remove(i);
                let player = state.player_mut(id);
                player.take_damage();
                let health = player.health;
                log::debug!("{} hit, health {}", id.label(), health);
                state.events.push(GameEvent::PlayerHit { player: id, health });
            }
            None => i += 1,
        }
    }
}

/// Move every bullet and retire it at the divider, on its first hit, or when
/// it leaves the arena
fn update_bullets(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &mut state.bullets[i];
        bullet.update(dt);

        let mut spent = bullet.should_stop_at_middle();
        if !spent {
            if let Some(hit) = state.enemies.iter().position(|e| bullet.check_hit(e)) {
                let enemy = state.enemies.remove(hit);
                state.events.push(GameEvent::EnemyDestroyed { id: enemy.id });
                spent = true;
            }
        }

        if spent || bullet.is_out_of_bounds() {
            state.bullets.remove(i);
        } else {
            i += 1;
        }
    }
}
