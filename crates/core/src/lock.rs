//! Lock module - occlusion and line clearing
//!
//! Both operations are copy-on-write: they return a new [`Grid`] and leave the
//! input alone. A landed piece is always occluded first and cleared second,
//! which [`lock`] does in one call.

use crate::collision::occupied_cells;
use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::Position;

/// Result of a line clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleared {
    pub grid: Grid,
    /// Removed row indices, ascending. Never contains 0.
    pub rows: Vec<usize>,
}

impl Cleared {
    pub fn lines(&self) -> u32 {
        self.rows.len() as u32
    }
}

/// Copy of `grid` with the piece's cells filled
///
/// Cells outside the grid are dropped; existing cells are never cleared.
pub fn occlude(grid: &Grid, shape: &Shape, position: Position) -> Grid {
    let mut out = grid.clone();
    for cell in occupied_cells(shape, position) {
        out.fill(cell.row, cell.col);
    }
    out
}

/// Remove full rows above the floor and compact the rest downward
///
/// Surviving rows keep their relative order; the rows freed at the top come
/// back empty.
pub fn clear_lines(grid: &Grid) -> Cleared {
    let height = grid.height();
    let mut out = Grid::new(height as u16, grid.width() as u16);
    let mut rows = Vec::new();

    // Two pointers: read scans every row above the floor, write trails behind
    // it by the number of full rows seen so far.
    let mut write = 1;
    for read in 1..height {
        if grid.is_row_full(read) {
            rows.push(read);
            continue;
        }
        out.copy_row(write, grid.row(read));
        write += 1;
    }

    Cleared { grid: out, rows }
}

/// Occlude then clear
pub fn lock(grid: &Grid, shape: &Shape, position: Position) -> Cleared {
    clear_lines(&occlude(grid, shape, position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{I_SHAPE, O_SHAPE};

    fn fill_row(grid: &mut Grid, row: i32) {
        for col in 0..grid.width() as i32 {
            grid.fill(row, col);
        }
    }

    #[test]
    fn test_occlude_does_not_touch_input() {
        let grid = Grid::new(6, 4);
        let out = occlude(&grid, &O_SHAPE, Position::new(2, 1));
        assert_eq!(grid.filled_count(), 4);
        assert_eq!(out.filled_count(), 8);
        assert!(out.is_filled(3, 2));
    }

    #[test]
    fn test_occlude_drops_out_of_bounds_cells() {
        let grid = Grid::new(6, 4);
        let out = occlude(&grid, &I_SHAPE, Position::new(3, 2));
        // cols 1..=4, col 4 is outside
        assert_eq!(out.filled_count(), 4 + 3);
    }

    #[test]
    fn test_clear_without_full_rows_is_identity() {
        let mut grid = Grid::new(6, 4);
        grid.fill(1, 0);
        grid.fill(3, 2);
        let cleared = clear_lines(&grid);
        assert!(cleared.rows.is_empty());
        assert_eq!(cleared.grid, grid);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut grid = Grid::new(7, 3);
        fill_row(&mut grid, 1);
        grid.fill(2, 0);
        fill_row(&mut grid, 3);
        grid.fill(4, 2);

        let cleared = clear_lines(&grid);
        assert_eq!(cleared.rows, vec![1, 3]);
        assert_eq!(cleared.lines(), 2);
        assert_eq!(cleared.grid.row(1), &[true, false, false]);
        assert_eq!(cleared.grid.row(2), &[false, false, true]);
        for row in 3..7 {
            assert!(cleared.grid.row(row).iter().all(|&c| !c));
        }
        assert!(cleared.grid.is_row_full(0));
    }

    #[test]
    fn test_lock_occludes_before_clearing() {
        let mut grid = Grid::new(5, 4);
        grid.fill(1, 0);
        grid.fill(1, 3);
        // O piece drops into cols 1..=2 of rows 1..=2
        let cleared = lock(&grid, &O_SHAPE, Position::new(1, 1));
        assert_eq!(cleared.rows, vec![1]);
        assert_eq!(cleared.grid.row(1), &[false, true, true, false]);
    }
}
