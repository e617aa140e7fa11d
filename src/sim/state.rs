//! Game state and match lifecycle
//!
//! `GameState` owns every entity. Entities point at each other only through
//! `PlayerId` handles, so removing an enemy or restarting the match can never
//! leave a dangling reference behind.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::enemy::Enemy;
use super::player::{InputMode, Player, PlayerId};
use super::weapon::Weapon;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A player ran out of health; waiting for restart
    GameOver,
}

/// Things that happened during the last tick, for presentation and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Shot { by: PlayerId },
    WeaponThrown { by: PlayerId },
    WeaponCaught { by: PlayerId },
    EnemiesSpawned { count: u32 },
    PlayerHit { player: PlayerId, health: i32 },
    EnemyDestroyed { id: u32 },
    GameOver { loser: PlayerId },
    Restarted,
}

/// RNG state wrapper for serialization.
///
/// Each draw site asks for a fresh generator on the next stream, so the state
/// is just two integers and round-trips through serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw site
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    /// Frames simulated since the match started
    pub frame: u64,
    /// Left then right, indexed by `PlayerId::index`
    pub players: [Player; 2],
    pub weapon: Weapon,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Live bullets in fire order
    pub bullets: Vec<Bullet>,
    /// Seconds since the last spawn wave
    pub spawn_timer: f32,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new match with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Playing,
            frame: 0,
            players: [
                Player::new(PlayerId::Left, InputMode::KeyboardMouse),
                Player::new(PlayerId::Right, InputMode::KeyboardMouse),
            ],
            weapon: Weapon::new(Vec2::ZERO),
            enemies: Vec::new(),
            bullets: Vec::new(),
            spawn_timer: 0.0,
            events: Vec::new(),
            next_id: 1,
        };
        state.reset_match();
        log::info!("Match started (seed {})", seed);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh match, keeping the seed stream and the left player's
    /// input mode
    pub fn restart(&mut self) {
        self.reset_match();
        self.events.push(GameEvent::Restarted);
        log::info!("Match restarted");
    }

    fn reset_match(&mut self) {
        let left_mode = self.players[0].input_mode;
        self.players = [
            Player::new(PlayerId::Left, left_mode),
            Player::new(PlayerId::Right, InputMode::KeyboardMouse),
        ];

        // The left player starts with the weapon in hand
        let [left, _] = &mut self.players;
        self.weapon = Weapon::new(left.pos);
        self.weapon.check_pickup(left);
        self.weapon.pos = left.muzzle();

        self.enemies.clear();
        self.bullets.clear();
        self.phase = GamePhase::Playing;
        self.spawn_timer = 0.0;
        self.frame = 0;
    }

    /// The player whose health ran out first (left wins ties)
    pub fn loser(&self) -> Option<PlayerId> {
        PlayerId::BOTH
            .into_iter()
            .find(|&id| !self.player(id).is_alive())
    }
}
