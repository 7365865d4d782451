//! Core game logic module - pure, deterministic, and testable
//!
//! All game rules live here. Nothing in this crate touches a terminal, a
//! clock or a thread; the host calls in and reads state back out.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and quarter-turn rotation
//! - [`grid`]: occupancy matrix with a permanent floor row
//! - [`collision`]: the overlap test every move goes through
//! - [`lock`]: occlusion, line clearing and downward compaction
//! - [`game_state`]: tick and input transitions
//! - [`config`]: construction-time settings and their validation
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: render-side copy of the state
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//! let start = game.active().position;
//!
//! game.apply_action(GameAction::HardDrop);
//! assert_eq!(game.active().position.row, start.row - 1);
//!
//! // Unknown keys are ignored.
//! assert!(!game.on_key("jump"));
//! assert_eq!(game.lines(), 0);
//! ```

pub mod collision;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod lock;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use collision::{occupied_cells, overlaps};
pub use config::{ConfigError, GameConfig, RotationPolicy};
pub use game_state::{ActivePiece, Descent, GameState, LockEvent};
pub use grid::Grid;
pub use lock::{clear_lines, lock, occlude, Cleared};
pub use pieces::{base_shape, rotate, rotate_radians, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
