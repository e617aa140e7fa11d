//! Enemies that chase one assigned player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::consts::*;
use crate::{distance, normalize};

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub target: PlayerId,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, target: PlayerId) -> Self {
        Self { id, pos, target }
    }

    /// Step toward the target's current position.
    ///
    /// The step is capped at the remaining distance so an enemy never
    /// overshoots (and then oscillates around) a stationary target.
    pub fn update(&mut self, dt: f32, players: &[Player; 2]) {
        let target = players[self.target.index()].pos;
        let to_target = target - self.pos;
        let step = (ENEMY_SPEED * dt).min(to_target.length());
        self.pos += normalize(to_target) * step;
    }

    /// True when this enemy overlaps `player`
    pub fn check_collision(&self, player: &Player) -> bool {
        distance(self.pos, player.pos) < PLAYER_RADIUS + ENEMY_RADIUS
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

    #[test]
    fn test_enemy_closes_distance() {
        let players = players();
        let mut enemy = Enemy::new(1, Vec2::new(0.0, 100.0), PlayerId::Left);
        let before = enemy.pos.distance(players[0].pos);
        enemy.update(FRAME_DT, &players);
        let after = enemy.pos.distance(players[0].pos);
        assert!(after < before);
        assert!((before - after - ENEMY_SPEED * FRAME_DT).abs() < 0.01);
    }

    #[test]
    fn test_enemy_does_not_overshoot() {
        let players = players();
        let target = players[1].pos;
        let mut enemy = Enemy::new(1, target + Vec2::new(0.5, 0.0), PlayerId::Right);
        enemy.update(1.0, &players);
        assert_eq!(enemy.pos, target);
    }

    #[test]
    fn test_enemy_on_target_stays_put() {
        let players = players();
        let target = players[0].pos;
        let mut enemy = Enemy::new(1, target, PlayerId::Left);
        enemy.update(FRAME_DT, &players);
        assert_eq!(enemy.pos, target);
    }

    #[test]
    fn test_collision_radius() {
        let players = players();
        let p = &players[0];
        let touching = Enemy::new(1, p.pos + Vec2::new(PLAYER_RADIUS + ENEMY_RADIUS - 0.1, 0.0), PlayerId::Left);
        let apart = Enemy::new(2, p.pos + Vec2::new(PLAYER_RADIUS + ENEMY_RADIUS, 0.0), PlayerId::Left);
        assert!(touching.check_collision(p));
        assert!(!apart.check_collision(p));
    }
}
