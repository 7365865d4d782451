//! Grid module - the occupancy matrix
//!
//! A `height x width` matrix of booleans stored row-major in a flat buffer.
//! Row 0 is the floor: it is filled on construction and nothing clears it.
//! Coordinates are `(row, col)` with row 0 at the bottom.

/// Occupancy grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with only the floor row filled
    pub fn new(height: u16, width: u16) -> Self {
        let height = height as usize;
        let width = width as usize;
        let mut cells = vec![false; height * width];
        let floor = width.min(cells.len());
        cells[..floor].fill(true);
        Self {
            height,
            width,
            cells,
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `0 <= row < height && 0 <= col < width`
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    /// True iff the cell is in bounds and occupied
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        self.index(row, col).map_or(false, |idx| self.cells[idx])
    }

    /// Mark a cell occupied. Returns false if out of bounds.
    pub fn fill(&mut self, row: i32, col: i32) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Borrow one row. Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Rows from the floor upward
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on 0; a zero-width grid has no rows to show.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.height && self.row(row).iter().all(|&cell| cell)
    }

    /// Number of occupied cells, floor included
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Overwrite a non-floor row
    pub(crate) fn copy_row(&mut self, row: usize, src: &[bool]) {
        debug_assert!(row != 0, "the floor row is never rewritten");
        let start = row * self.width;
        self.cells[start..start + self.width].copy_from_slice(src);
    }
}
