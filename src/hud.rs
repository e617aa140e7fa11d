//! HUD values derived from the game state
//!
//! Pure data: the shell decides fonts and placement.

use serde::Serialize;

use crate::consts::PLAYER_MAX_HEALTH;
use crate::sim::{GameState, InputMode, PlayerId};

pub const GAME_OVER_BANNER: &str = "GAME OVER!";
pub const RESTART_HINT: &str = "Press R to Restart";

/// Everything the HUD shows for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    /// "P1 Health: n" / "P2 Health: n"
    pub health_text: [String; 2],
    /// Health bar segments to draw per player, within [0, max]
    pub health_bars: [u32; 2],
    /// Multi-line control scheme description
    pub controls: String,
    pub game_over: bool,
}

impl Hud {
    pub fn new(state: &GameState) -> Self {
        let health_text = PlayerId::BOTH.map(|id| {
            format!("{} Health: {}", id.label(), state.player(id).health)
        });
        let health_bars = PlayerId::BOTH.map(|id| health_bars(state.player(id).health));

        Self {
            health_text,
            health_bars,
            controls: controls_text(state.player(PlayerId::Left).input_mode),
            game_over: state.is_game_over(),
        }
    }

    /// Banner lines to overlay, empty while playing
    pub fn banner(&self) -> Vec<&'static str> {
        if self.game_over {
            vec![GAME_OVER_BANNER, RESTART_HINT]
        } else {
            Vec::new()
        }
    }
}

fn health_bars(health: i32) -> u32 {
    health.clamp(0, PLAYER_MAX_HEALTH) as u32
}

/// Control help text, reflecting the device the left player is on
pub fn controls_text(left_mode: InputMode) -> String {
    let p1 = match left_mode {
        InputMode::Controller => "Controller - Sticks: Move/Aim, RT: Shoot, LT: Throw",
        InputMode::KeyboardMouse => "WASD: Move, Mouse: Aim, E: Shoot, Space: Throw",
    };
    format!(
        "P1 (Left): {}\nP2 (Right): Arrow keys: Move, Mouse: Aim, RMB: Shoot, RCtrl: Throw\nR: Restart",
        p1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_match_hud() {
        let state = GameState::new(1);
        let hud = Hud::new(&state);
        assert_eq!(hud.health_text[0], "P1 Health: 3");
        assert_eq!(hud.health_text[1], "P2 Health: 3");
        assert_eq!(hud.health_bars, [3, 3]);
        assert!(!hud.game_over);
        assert!(hud.banner().is_empty());
        assert!(hud.controls.starts_with("P1 (Left): WASD"));
    }

    #[test]
    fn test_negative_health_draws_no_bars() {
        let mut state = GameState::new(1);
        state.players[1].health = -2;
        state.phase = crate::sim::GamePhase::GameOver;
        let hud = Hud::new(&state);
        assert_eq!(hud.health_bars, [3, 0]);
        assert_eq!(hud.health_text[1], "P2 Health: -2");
        assert_eq!(hud.banner(), vec![GAME_OVER_BANNER, RESTART_HINT]);
    }

    #[test]
    fn test_controller_text() {
        let text = controls_text(InputMode::Controller);
        assert!(text.contains("RT: Shoot"));
        assert_eq!(text.lines().count(), 3);
    }
}
