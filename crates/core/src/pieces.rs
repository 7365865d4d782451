//! Pieces module - tetromino shapes and rotation
//!
//! Every shape is four `(dy, dx)` offsets around a pivot at `(0, 0)`.
//! Rotation maps each offset through a 2D rotation matrix and rounds the
//! result to the nearest integer (half away from zero, i.e. `f64::round`).
//! For quarter turns the trigonometric error is far below 0.5, so rotated
//! shapes are exact and rotating back restores the original.

use crate::types::{Direction, PieceKind};

/// Offset of a single cell relative to the pivot, as `(dy, dx)`
pub type Offset = (i32, i32);

/// Four cell offsets around a pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape([Offset; 4]);

impl Shape {
    pub const fn new(cells: [Offset; 4]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Offset; 4] {
        &self.0
    }

    /// Always 4
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

pub const I_SHAPE: Shape = Shape::new([(0, -1), (0, 0), (0, 1), (0, 2)]);
pub const O_SHAPE: Shape = Shape::new([(0, 0), (0, 1), (1, 0), (1, 1)]);
pub const T_SHAPE: Shape = Shape::new([(0, -1), (0, 0), (0, 1), (1, 0)]);
pub const S_SHAPE: Shape = Shape::new([(0, -1), (0, 0), (1, 0), (1, 1)]);
pub const Z_SHAPE: Shape = Shape::new([(0, 0), (0, 1), (1, -1), (1, 0)]);
pub const J_SHAPE: Shape = Shape::new([(0, -1), (0, 0), (0, 1), (1, -1)]);
pub const L_SHAPE: Shape = Shape::new([(0, -1), (0, 0), (0, 1), (1, 1)]);

/// Get the unrotated shape for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Rotate a shape a quarter turn (`Left` = +90°, `Right` = -90°)
pub fn rotate(shape: Shape, direction: Direction) -> Shape {
    rotate_radians(shape, direction.radians())
}

/// Rotate every offset by `radians` and round to the nearest cell
pub fn rotate_radians(shape: Shape, radians: f64) -> Shape {
    let (sin, cos) = radians.sin_cos();
    let mut cells = shape.0;
    for cell in cells.iter_mut() {
        let a = cell.0 as f64;
        let b = cell.1 as f64;
        *cell = (
            (a * cos - b * sin).round() as i32,
            (a * sin + b * cos).round() as i32,
        );
    }
    Shape(cells)
}
