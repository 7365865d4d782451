//! Snapshot module - render-side copy of the game state

use serde::Serialize;

use crate::types::{Phase, PieceKind, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub position: Position,
    pub cells: [Position; 4],
}

/// Read-only copy of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub height: u16,
    pub width: u16,
    /// `rows[0]` is the floor
    pub rows: Vec<Vec<bool>>,
    pub active: ActiveSnapshot,
    pub lines: u32,
    pub tick_counter: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(false)
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            rows: Vec::new(),
            active: ActiveSnapshot {
                kind: PieceKind::T,
                position: Position::new(0, 0),
                cells: [Position::new(0, 0); 4],
            },
            lines: 0,
            tick_counter: 0,
            phase: Phase::Falling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let mut snap = GameSnapshot::default();
        snap.rows = vec![vec![true, true], vec![false, true]];
        snap.lines = 3;
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["lines"], 3);
        assert_eq!(json["phase"], "Falling");
        assert_eq!(json["rows"][1][1], true);
        assert_eq!(json["active"]["kind"], "T");
    }

    #[test]
    fn test_is_filled_out_of_range() {
        let mut snap = GameSnapshot::default();
        snap.rows = vec![vec![true]];
        assert!(snap.is_filled(0, 0));
        assert!(!snap.is_filled(-1, 0));
        assert!(!snap.is_filled(0, 1));
        assert!(!snap.is_filled(5, 0));
    }
}
