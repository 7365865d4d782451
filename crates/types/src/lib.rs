//! Core types module - shared data structures and constants
//!
//! Plain data used by the engine, the input mapping and the terminal renderer.
//! Nothing in here knows about terminals or timers.
//!
//! # Coordinates
//!
//! Cells are addressed as `(row, col)`. Row 0 is the bottom of the well (the
//! permanent floor row); rows grow upward, so a falling piece moves toward
//! smaller row numbers.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HEIGHT` | 22 | Grid rows, floor included |
//! | `DEFAULT_WIDTH` | 10 | Grid columns |
//! | `DEFAULT_SPEED` | 5 | Ticks that pass before a forced descent |
//! | `TICK_MS` | 100 | Tick period used by the terminal runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Position};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! let p = Position::new(20, 5).offset(-1, 0);
//! assert_eq!(p, Position::new(19, 5));
//! ```

use serde::{Deserialize, Serialize};

/// Grid height in rows, including the floor row
pub const DEFAULT_HEIGHT: u16 = 22;

/// Grid width in columns
pub const DEFAULT_WIDTH: u16 = 10;

/// Forced descent happens once the tick counter exceeds this value
pub const DEFAULT_SPEED: u32 = 5;

/// Tick period in milliseconds (the runner's scheduler)
pub const TICK_MS: u64 = 100;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used by the renderer's side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation direction. `Left` is +90°, `Right` is -90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed rotation angle in radians
    pub fn radians(&self) -> f64 {
        match self {
            Direction::Left => std::f64::consts::FRAC_PI_2,
            Direction::Right => -std::f64::consts::FRAC_PI_2,
        }
    }
}

/// Grid coordinate of a piece anchor or a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by `(drow, dcol)`
    pub const fn offset(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

/// Symbolic inputs the engine understands
///
/// Literal keys are bound to these by the input crate; the engine only sees
/// the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Rotate +90°
    RotateLeft,
    /// Rotate -90°
    RotateRight,
    /// Descend one row now instead of waiting for the tick threshold
    HardDrop,
    /// Halt the game; later ticks and inputs do nothing
    Stop,
}

impl GameAction {
    /// Parse action from its symbolic name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATERIGHT"), Some(GameAction::RotateRight));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "harddrop" => Some(GameAction::HardDrop),
            "stop" => Some(GameAction::Stop),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`GameAction::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::HardDrop => "hardDrop",
            GameAction::Stop => "stop",
        }
    }
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active piece is in play
    Falling,
    /// Stop was requested
    Stopped,
    /// A freshly spawned piece overlapped the grid
    GameOver,
}
