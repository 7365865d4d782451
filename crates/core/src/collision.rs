//! Collision module - placement legality
//!
//! [`overlaps`] is the one place that decides whether a shape may sit at a
//! position. Movement, rotation and descent all go through it.

use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::Position;

/// Absolute cells covered by `shape` anchored at `position`
pub fn occupied_cells(shape: &Shape, position: Position) -> [Position; 4] {
    let cells = *shape.cells();
    cells.map(|(dy, dx)| position.offset(dy, dx))
}

/// True if any covered cell is out of bounds or already filled
pub fn overlaps(grid: &Grid, shape: &Shape, position: Position) -> bool {
    occupied_cells(shape, position)
        .iter()
        .any(|cell| !grid.in_bounds(cell.row, cell.col) || grid.is_filled(cell.row, cell.col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{I_SHAPE, O_SHAPE};

    #[test]
    fn test_occupied_cells_adds_anchor() {
        let cells = occupied_cells(&O_SHAPE, Position::new(5, 3));
        assert_eq!(
            cells,
            [
                Position::new(5, 3),
                Position::new(5, 4),
                Position::new(6, 3),
                Position::new(6, 4),
            ]
        );
    }

    #[test]
    fn test_floor_counts_as_overlap() {
        let grid = Grid::new(22, 10);
        assert!(overlaps(&grid, &O_SHAPE, Position::new(0, 3)));
        assert!(!overlaps(&grid, &O_SHAPE, Position::new(1, 3)));
    }

    #[test]
    fn test_filled_cell_overlaps() {
        let mut grid = Grid::new(22, 10);
        grid.fill(10, 6);
        assert!(overlaps(&grid, &I_SHAPE, Position::new(10, 5)));
        assert!(!overlaps(&grid, &I_SHAPE, Position::new(11, 5)));
    }
}
