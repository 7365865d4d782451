//! Terminal runner (default binary).
//!
//! Owns the tick scheduler and the keyboard listener and drives a
//! `GameState` with them. Rendering goes through the framebuffer-based
//! `term` crate.
//!
//! Usage: `blockfall [config.json]`. The optional JSON file may set any of
//! `height`, `width`, `speed`, `spawn`, `rotation` and `tick_ms`.

use std::fs;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use serde::Deserialize;

use blockfall::core::{GameConfig, GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, TICK_MS};

#[derive(Debug, Deserialize)]
struct AppConfig {
    #[serde(flatten)]
    game: GameConfig,
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    TICK_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: TICK_MS,
        }
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref())?;
    let game = GameState::new(config.game, clock_seed()).context("invalid game configuration")?;
    let tick = Duration::from_millis(config.tick_ms.max(1));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, tick);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        game.apply_action(GameAction::Stop);
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.on_tick();
        }
    }
}
