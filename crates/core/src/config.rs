//! Game configuration and its validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Position, DEFAULT_HEIGHT, DEFAULT_SPEED, DEFAULT_WIDTH};

/// What happens when a rotation lands the piece on filled cells or outside
/// the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Reject the rotation
    #[default]
    Validated,
    /// Apply it anyway
    Unchecked,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("spawn position ({row}, {col}) is outside the {height}x{width} grid")]
    SpawnOutOfBounds {
        row: i32,
        col: i32,
        height: u16,
        width: u16,
    },
}

/// Construction-time settings for a [`GameState`](crate::GameState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rows, floor included
    pub height: u16,
    pub width: u16,
    /// Ticks that must pass before a forced descent
    pub speed: u32,
    /// Anchor for new pieces; `None` means `(height - 2, width / 2)`
    pub spawn: Option<Position>,
    pub rotation: RotationPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            speed: DEFAULT_SPEED,
            spawn: None,
            rotation: RotationPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn new(height: u16, width: u16, speed: u32) -> Self {
        Self {
            height,
            width,
            speed,
            ..Self::default()
        }
    }

    pub fn with_spawn(mut self, spawn: Position) -> Self {
        self.spawn = Some(spawn);
        self
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }

    /// Where every new piece is anchored
    pub fn spawn_position(&self) -> Position {
        self.spawn.unwrap_or(Position::new(
            self.height as i32 - 2,
            self.width as i32 / 2,
        ))
    }

    /// Check the dimensions and an explicit spawn coordinate
    ///
    /// A derived spawn is not checked: on a grid too short to hold it the
    /// first spawn simply ends the game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if let Some(spawn) = self.spawn {
            let inside = spawn.row >= 0
                && spawn.row < self.height as i32
                && spawn.col >= 0
                && spawn.col < self.width as i32;
            if !inside {
                return Err(ConfigError::SpawnOutOfBounds {
                    row: spawn.row,
                    col: spawn.col,
                    height: self.height,
                    width: self.width,
                });
            }
        }
        Ok(())
    }
}
