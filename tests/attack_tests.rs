use battleship_board::{AttackResult, BoardError, BoardState, CellState};

/// Active board holding a single five-cell ship on row 0, columns 2 to 6.
fn started_board() -> BoardState {
    let mut board = BoardState::new();
    board.initialize().unwrap();
    board.place_ship(0, 2, 0, 6).unwrap();
    board.start().unwrap();
    board
}

#[test]
fn test_attack_before_start_fails() {
    let mut board = BoardState::new();
    board.initialize().unwrap();
    board.place_ship(0, 2, 0, 6).unwrap();
    assert_eq!(board.receive_attack(0, 2), Err(BoardError::GameNotStarted));
    assert_eq!(board.cell(0, 2), Ok(CellState::Ship));
}

#[test]
fn test_hit_then_not_lost() {
    let mut board = started_board();
    assert_eq!(board.receive_attack(0, 2), Ok(AttackResult::Hit));
    assert_eq!(board.cell(0, 2), Ok(CellState::Hit));
    assert_eq!(board.has_lost(), Ok(false));
}

#[test]
fn test_sinking_every_cell_loses() {
    let mut board = started_board();
    for col in 2..=6 {
        assert_eq!(board.has_lost(), Ok(false));
        assert_eq!(board.receive_attack(0, col), Ok(AttackResult::Hit));
    }
    assert_eq!(board.has_lost(), Ok(true));
    assert_eq!(board.remaining_ship_cells(), Ok(0));
}

#[test]
fn test_open_water_is_a_miss() {
    let mut board = started_board();
    assert_eq!(board.receive_attack(0, 0), Ok(AttackResult::Miss));
    assert_eq!(board.cell(0, 0), Ok(CellState::Miss));
    assert_eq!(board.receive_attack(0, 0), Ok(AttackResult::Miss));
    assert_eq!(board.cell(0, 0), Ok(CellState::Miss));
}

#[test]
fn test_reattacking_hit_cell_stays_hit() {
    let mut board = started_board();
    board.receive_attack(0, 4).unwrap();
    assert_eq!(board.receive_attack(0, 4), Ok(AttackResult::Miss));
    assert_eq!(board.cell(0, 4), Ok(CellState::Hit));
    assert_eq!(board.remaining_ship_cells(), Ok(4));
}

#[test]
fn test_out_of_bounds_attack_fails() {
    let mut board = started_board();
    let before = board.snapshot().unwrap();
    for (row, col) in [(10, 0), (-1, 3), (0, 10), (3, -1)] {
        assert!(matches!(
            board.receive_attack(row, col),
            Err(BoardError::InvalidCoordinates(_))
        ));
    }
    assert_eq!(board.snapshot().unwrap(), before);
}

#[test]
fn test_reference_attack_sequence() {
    let mut board = started_board();
    let results: Vec<bool> = (0..7)
        .map(|col| board.receive_attack(0, col).unwrap().is_hit())
        .collect();
    assert_eq!(results, vec![false, false, true, true, true, true, true]);
    assert_eq!(board.has_lost(), Ok(true));
}
