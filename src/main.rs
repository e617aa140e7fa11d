//! Quick! Throw! headless runner
//!
//! Plays a match with the built-in autopilot on both sides and reports what
//! happened as JSON.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use quick_throw::consts::FRAME_DT;
use quick_throw::sim::{Autopilot, GameEvent, GameState, PlayerId, tick};

#[derive(Parser, Debug)]
#[command(name = "quick-throw")]
#[command(about = "Run a deterministic autopilot match of Quick! Throw! and summarize it")]
struct Cli {
    /// Match seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(long, default_value_t = 3_600)]
    frames: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = FRAME_DT)]
    dt: f32,
    /// Keep playing after a match ends
    #[arg(long, default_value_t = false)]
    auto_restart: bool,
    /// Write the summary here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    seed: u64,
    /// Ticks simulated across every match in the run
    frames: u64,
    matches_finished: u32,
    shots: u32,
    throws: u32,
    catches: u32,
    enemies_spawned: u32,
    enemies_destroyed: u32,
    player_hits: [u32; 2],
    /// Health at the end of the run, for the match in progress or just lost
    last_match_health: [i32; 2],
    last_match_enemies_alive: usize,
    game_over: bool,
    /// Loser of the most recently finished match
    loser: Option<PlayerId>,
}

impl RunSummary {
    fn record(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Shot { .. } => self.shots += 1,
            GameEvent::WeaponThrown { .. } => self.throws += 1,
            GameEvent::WeaponCaught { .. } => self.catches += 1,
            GameEvent::EnemiesSpawned { count } => self.enemies_spawned += count,
            GameEvent::EnemyDestroyed { .. } => self.enemies_destroyed += 1,
            GameEvent::PlayerHit { player, .. } => self.player_hits[player.index()] += 1,
            GameEvent::GameOver { loser } => {
                self.matches_finished += 1;
                self.loser = Some(loser);
            }
            GameEvent::Restarted => {}
        }
    }
}

fn run(seed: u64, frames: u64, dt: f32, auto_restart: bool) -> RunSummary {
    let mut state = GameState::new(seed);
    let mut bot = Autopilot::new(auto_restart);
    let mut summary = RunSummary {
        seed,
        ..Default::default()
    };

    for _ in 0..frames {
        let input = bot.inputs(&state);
        tick(&mut state, &input, dt);
        summary.frames += 1;
        for event in &state.events {
            summary.record(event);
        }
        if state.is_game_over() && !auto_restart {
            break;
        }
    }

    summary.last_match_health = PlayerId::BOTH.map(|id| state.player(id).health);
    summary.last_match_enemies_alive = state.enemies.len();
    summary.game_over = state.is_game_over();
    summary
}

fn write_summary(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed writing {}", path.display()))
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if !(cli.dt.is_finite() && cli.dt > 0.0) {
        bail!("--dt must be a positive number of seconds, got {}", cli.dt);
    }

    let seed = cli.seed.unwrap_or_else(time_seed);
    log::info!("Quick! Throw! headless run: seed={} frames={}", seed, cli.frames);

    let summary = run(seed, cli.frames, cli.dt, cli.auto_restart);
    let json = serde_json::to_string_pretty(&summary).context("failed encoding summary")?;

    match &cli.output {
        Some(path) => {
            write_summary(path, json.as_bytes())?;
            log::info!("Wrote summary to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
