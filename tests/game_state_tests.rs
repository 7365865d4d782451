//! Integration tests for the tick/input state machine

use blockfall::core::pieces::base_shape;
use blockfall::core::{overlaps, ConfigError, Descent, GameConfig, GameState};
use blockfall::types::{GameAction, Phase, PieceKind, Position};

fn new_game(seed: u32) -> GameState {
    GameState::new(GameConfig::default(), seed).unwrap()
}

#[test]
fn test_game_starts_falling_at_spawn() {
    let state = new_game(12345);
    assert_eq!(state.phase(), Phase::Falling);
    assert_eq!(state.active().position, Position::new(20, 5));
    assert_eq!(state.active().shape, base_shape(state.active().kind));
    assert_eq!(state.lines(), 0);
    assert_eq!(state.pieces_spawned(), 1);
    assert!(state.grid().is_row_full(0));
}

#[test]
fn test_invalid_config_fails_fast() {
    assert_eq!(
        GameState::new(GameConfig::new(0, 10, 5), 1).unwrap_err(),
        ConfigError::ZeroHeight
    );
    assert_eq!(
        GameState::new(GameConfig::new(22, 0, 5), 1).unwrap_err(),
        ConfigError::ZeroWidth
    );
    let far = GameConfig::default().with_spawn(Position::new(30, 5));
    assert!(matches!(
        GameState::new(far, 1),
        Err(ConfigError::SpawnOutOfBounds { .. })
    ));
}

#[test]
fn test_move_left_until_wall_then_noop() {
    let mut state = new_game(7);
    let mut moves = 0;
    while state.apply_action(GameAction::MoveLeft) {
        moves += 1;
        assert!(moves < 20, "piece never hit the wall");
    }
    let at_wall = state.active();
    let min_col = at_wall.cells().iter().map(|c| c.col).min().unwrap();
    assert_eq!(min_col, 0);

    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active(), at_wall);
}

#[test]
fn test_move_right_until_wall_then_noop() {
    let mut state = new_game(8);
    while state.apply_action(GameAction::MoveRight) {}
    let max_col = state.active_cells().iter().map(|c| c.col).max().unwrap();
    assert_eq!(max_col, 9);
    let before = state.active();
    assert!(!state.on_key("moveRight"));
    assert_eq!(state.active(), before);
}

#[test]
fn test_ticks_force_descent_after_threshold() {
    let mut state = new_game(3);
    let start = state.active().position;
    let speed = state.config().speed;

    for _ in 0..speed {
        assert_eq!(state.on_tick(), None);
        assert_eq!(state.active().position, start);
    }
    assert_eq!(state.on_tick(), Some(Descent::Moved));
    assert_eq!(state.active().position, start.offset(-1, 0));
    assert_eq!(state.tick_counter(), 0);
}

#[test]
fn test_repeated_drops_eventually_lock_and_respawn() {
    let mut state = new_game(99);
    let first = state.active();
    let mut locked = false;
    for _ in 0..30 {
        if let Some(Descent::Locked { lines_cleared }) = state.descend() {
            assert_eq!(lines_cleared, 0);
            locked = true;
            break;
        }
    }
    assert!(locked);
    assert_eq!(state.pieces_spawned(), 2);
    assert_eq!(state.active().position, Position::new(20, 5));
    // floor plus the four locked cells, all in the first piece's columns
    assert_eq!(state.grid().filled_count(), 10 + 4);
    for cell in first.cells() {
        assert!(state.grid().rows().skip(1).any(|r| r[cell.col as usize]));
    }
    let event = state.take_last_event().unwrap();
    assert_eq!(event.kind, first.kind);
    assert!(!event.game_over);
}

#[test]
fn test_spawns_stay_in_the_seven_kinds() {
    let mut state = new_game(2024);
    let spawn = state.config().spawn_position();
    for _ in 0..200 {
        let grid = state.grid().clone();
        state.spawn_piece();
        let active = state.active();
        assert!(PieceKind::ALL.contains(&active.kind));
        assert_eq!(active.shape, base_shape(active.kind));
        assert_eq!(active.position, spawn);
        // spawning never touches the grid
        assert_eq!(state.grid(), &grid);
    }
}

#[test]
fn test_active_piece_never_overlaps_under_validated_play() {
    let mut state = new_game(31337);
    let script = [
        GameAction::RotateLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::HardDrop,
        GameAction::RotateRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::HardDrop,
    ];
    for step in 0..600 {
        state.apply_action(script[step % script.len()]);
        state.on_tick();
        if state.phase() != Phase::Falling {
            break;
        }
        let active = state.active();
        assert!(!overlaps(state.grid(), &active.shape, active.position));
        assert!(state.grid().is_row_full(0));
    }
}

#[test]
fn test_stop_halts_ticks_and_input() {
    let mut state = GameState::new(GameConfig::new(22, 10, 0), 5).unwrap();
    assert!(state.apply_action(GameAction::Stop));
    let frozen = state.active();
    for _ in 0..10 {
        assert_eq!(state.on_tick(), None);
    }
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::RotateLeft));
    assert_eq!(state.active(), frozen);
    assert_eq!(state.phase(), Phase::Stopped);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    // Short grid and no lateral moves: pieces pile up in columns 4..=7 and
    // rows can never fill, so the stack must reach the spawn point.
    let config = GameConfig::new(8, 10, 0);
    let mut state = GameState::new(config, 11).unwrap();
    for _ in 0..500 {
        state.apply_action(GameAction::HardDrop);
        if state.phase() == Phase::GameOver {
            break;
        }
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert_eq!(state.on_tick(), None);
    assert!(state.grid().is_row_full(0));
}

#[test]
fn test_on_key_names() {
    let mut state = new_game(1);
    let start = state.active().position;
    assert!(state.on_key("hardDrop"));
    assert_eq!(state.active().position, start.offset(-1, 0));
    assert!(state.on_key("MOVELEFT"));
    assert_eq!(state.active().position, start.offset(-1, -1));
    assert!(!state.on_key("pause"));
}
