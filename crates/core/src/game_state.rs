//! Game state module - the tick/input state machine
//!
//! [`GameState`] owns the grid, the active piece and the counters. The host
//! drives it with [`GameState::on_tick`] from its timer and
//! [`GameState::apply_action`] (or [`GameState::on_key`]) from its input
//! source. Every call runs to completion and never blocks.

use crate::collision::{occupied_cells, overlaps};
use crate::config::{ConfigError, GameConfig, RotationPolicy};
use crate::grid::Grid;
use crate::lock::lock;
use crate::pieces::{base_shape, rotate, Shape};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, Phase, PieceKind, Position};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl ActivePiece {
    /// Unrotated piece of `kind` anchored at `position`
    pub fn new(kind: PieceKind, position: Position) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            position,
        }
    }

    pub fn cells(&self) -> [Position; 4] {
        occupied_cells(&self.shape, self.position)
    }
}

/// Outcome of one descent step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved down one row
    Moved,
    /// The piece landed and was merged into the grid
    Locked { lines_cleared: u32 },
}

/// Emitted when a piece locks (consumed by observers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// The next piece overlapped on spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: ActivePiece,
    rng: SimpleRng,
    tick_counter: u32,
    lines: u32,
    phase: Phase,
    /// Spawns so far, the first piece included
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Validate `config` and start a game with the first piece in place
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SimpleRng::new(seed);
        let first = rng.next_kind();
        let mut state = Self {
            config,
            grid: Grid::new(config.height, config.width),
            active: ActivePiece::new(first, config.spawn_position()),
            rng,
            tick_counter: 0,
            lines: 0,
            phase: Phase::Falling,
            pieces_spawned: 0,
            last_event: None,
        };
        state.place_spawned(first);
        Ok(state)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn active_cells(&self) -> [Position; 4] {
        self.active.cells()
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_falling(&self) -> bool {
        self.phase == Phase::Falling
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Scheduler entry point
    ///
    /// Counts the tick and forces a descent once the counter exceeds the
    /// configured speed. Returns the descent if one happened.
    pub fn on_tick(&mut self) -> Option<Descent> {
        if !self.is_falling() {
            return None;
        }
        self.tick_counter = self.tick_counter.saturating_add(1);
        if self.tick_counter <= self.config.speed {
            return None;
        }
        self.tick_counter = 0;
        self.descend()
    }

    /// Input entry point for symbolic key names; unknown keys do nothing
    pub fn on_key(&mut self, key: &str) -> bool {
        match GameAction::from_str(key) {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Apply an input. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.is_falling() {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::RotateLeft => self.try_rotate(Direction::Left),
            GameAction::RotateRight => self.try_rotate(Direction::Right),
            GameAction::HardDrop => self.descend().is_some(),
            GameAction::Stop => {
                self.phase = Phase::Stopped;
                true
            }
        }
    }

    /// Shift the piece `dcol` columns if the target is free
    pub fn try_shift(&mut self, dcol: i32) -> bool {
        if !self.is_falling() {
            return false;
        }
        let candidate = self.active.position.offset(0, dcol);
        if overlaps(&self.grid, &self.active.shape, candidate) {
            return false;
        }
        self.active.position = candidate;
        true
    }

    /// Rotate the active shape in place
    ///
    /// Under [`RotationPolicy::Unchecked`] the rotated shape is taken even if
    /// it overlaps.
    pub fn try_rotate(&mut self, direction: Direction) -> bool {
        if !self.is_falling() {
            return false;
        }
        let rotated = rotate(self.active.shape, direction);
        if self.config.rotation == RotationPolicy::Validated
            && overlaps(&self.grid, &rotated, self.active.position)
        {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Move down one row, or lock, clear and spawn if the row below is taken
    pub fn descend(&mut self) -> Option<Descent> {
        if !self.is_falling() {
            return None;
        }

        let candidate = self.active.position.offset(-1, 0);
        if !overlaps(&self.grid, &self.active.shape, candidate) {
            self.active.position = candidate;
            return Some(Descent::Moved);
        }

        let cleared = lock(&self.grid, &self.active.shape, self.active.position);
        let lines_cleared = cleared.lines();
        self.grid = cleared.grid;
        self.lines += lines_cleared;

        let locked_kind = self.active.kind;
        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            kind: locked_kind,
            lines_cleared,
            game_over: !spawned,
        });

        Some(Descent::Locked { lines_cleared })
    }

    /// Replace the active piece with a random kind at the spawn anchor
    ///
    /// Returns false (and ends the game) if the new piece overlaps.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.place_spawned(kind)
    }

    fn place_spawned(&mut self, kind: PieceKind) -> bool {
        self.active = ActivePiece::new(kind, self.config.spawn_position());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        if overlaps(&self.grid, &self.active.shape, self.active.position) {
            self.phase = Phase::GameOver;
            return false;
        }
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.height = self.config.height;
        out.width = self.config.width;
        out.rows.resize_with(self.grid.height(), Vec::new);
        for (dst, src) in out.rows.iter_mut().zip(self.grid.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }
        out.active = ActiveSnapshot {
            kind: self.active.kind,
            position: self.active.position,
            cells: self.active.cells(),
        };
        out.lines = self.lines;
        out.tick_counter = self.tick_counter;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
