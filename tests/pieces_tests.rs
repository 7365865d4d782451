//! Pieces module tests - shapes and quarter-turn rotation

use blockfall::core::pieces::{base_shape, rotate, rotate_radians, Shape};
use blockfall::types::{Direction, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_base_shapes() {
    assert_eq!(
        base_shape(PieceKind::I).cells(),
        &[(0, -1), (0, 0), (0, 1), (0, 2)]
    );
    assert_eq!(
        base_shape(PieceKind::O).cells(),
        &[(0, 0), (0, 1), (1, 0), (1, 1)]
    );
    assert_eq!(
        base_shape(PieceKind::T).cells(),
        &[(0, -1), (0, 0), (0, 1), (1, 0)]
    );
    assert_eq!(
        base_shape(PieceKind::S).cells(),
        &[(0, -1), (0, 0), (1, 0), (1, 1)]
    );
    assert_eq!(
        base_shape(PieceKind::Z).cells(),
        &[(0, 0), (0, 1), (1, -1), (1, 0)]
    );
    assert_eq!(
        base_shape(PieceKind::J).cells(),
        &[(0, -1), (0, 0), (0, 1), (1, -1)]
    );
    assert_eq!(
        base_shape(PieceKind::L).cells(),
        &[(0, -1), (0, 0), (0, 1), (1, 1)]
    );
}

#[test]
fn test_base_shapes_have_distinct_cells() {
    for kind in PieceKind::ALL {
        let cells = base_shape(kind).cells().to_vec();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert_ne!(a, b, "{:?} repeats a cell", kind);
            }
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_keeps_four_cells() {
    for kind in PieceKind::ALL {
        for direction in [Direction::Left, Direction::Right] {
            let mut shape = base_shape(kind);
            for _ in 0..8 {
                shape = rotate(shape, direction);
                assert_eq!(shape.len(), 4);
            }
        }
    }
}

#[test]
fn test_rotate_left_then_right_round_trips() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        assert_eq!(rotate(rotate(shape, Direction::Left), Direction::Right), shape);
        assert_eq!(rotate(rotate(shape, Direction::Right), Direction::Left), shape);
    }
}

#[test]
fn test_four_turns_round_trip() {
    for kind in PieceKind::ALL {
        for direction in [Direction::Left, Direction::Right] {
            let shape = base_shape(kind);
            let mut turned = shape;
            for _ in 0..4 {
                turned = rotate(turned, direction);
            }
            assert_eq!(turned, shape, "{:?} {:?}", kind, direction);
        }
    }
}

#[test]
fn test_two_lefts_equal_two_rights() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        let left2 = rotate(rotate(shape, Direction::Left), Direction::Left);
        let right2 = rotate(rotate(shape, Direction::Right), Direction::Right);
        assert_eq!(left2, right2);
    }
}

#[test]
fn test_rotation_keeps_cells_distinct() {
    for kind in PieceKind::ALL {
        let rotated = rotate(base_shape(kind), Direction::Left);
        let cells = rotated.cells();
        for i in 0..4 {
            for j in i + 1..4 {
                assert_ne!(cells[i], cells[j]);
            }
        }
    }
}

#[test]
fn test_rotate_radians_zero_is_identity() {
    let shape = Shape::new([(0, 0), (3, -2), (-1, 5), (2, 2)]);
    assert_eq!(rotate_radians(shape, 0.0), shape);
}

#[test]
fn test_rotate_far_offsets() {
    let shape = Shape::new([(0, 0), (3, -2), (-1, 5), (2, 2)]);
    let left = rotate(shape, Direction::Left);
    assert_eq!(left.cells(), &[(0, 0), (2, 3), (-5, -1), (-2, 2)]);
    assert_eq!(rotate(left, Direction::Right), shape);
}
