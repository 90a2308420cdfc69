use battleship_board::{BoardError, BoardState, CellState, InvalidCoordinates, Placement};

fn setup_board() -> BoardState {
    let mut board = BoardState::new();
    board.initialize().unwrap();
    board
}

fn ship_cells(board: &BoardState) -> Vec<(usize, usize)> {
    board
        .snapshot()
        .unwrap()
        .cells()
        .filter(|&(_, s)| s == CellState::Ship)
        .map(|(pos, _)| pos)
        .collect()
}

#[test]
fn test_horizontal_ship_fills_row_run() {
    let mut board = setup_board();
    assert_eq!(board.place_ship(0, 0, 0, 4), Ok(Placement::Placed));
    assert_eq!(
        ship_cells(&board),
        vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
    );
}

#[test]
fn test_vertical_ship_fills_column_run() {
    let mut board = setup_board();
    assert_eq!(board.place_ship(2, 8, 6, 8), Ok(Placement::Placed));
    assert_eq!(
        ship_cells(&board),
        vec![(2, 8), (3, 8), (4, 8), (5, 8), (6, 8)]
    );
}

#[test]
fn test_single_cell_ship() {
    let mut board = setup_board();
    assert!(board.place_ship(3, 3, 3, 3).unwrap().is_placed());
    assert_eq!(ship_cells(&board), vec![(3, 3)]);
}

#[test]
fn test_full_row_and_full_column_ships() {
    let mut board = setup_board();
    assert_eq!(board.place_ship(9, 0, 9, 9), Ok(Placement::Placed));
    assert_eq!(board.place_ship(0, 0, 8, 0), Ok(Placement::Placed));
    assert_eq!(board.remaining_ship_cells(), Ok(19));
}

#[test]
fn test_overlapping_placement_is_rejected_without_change() {
    let mut board = setup_board();
    board.place_ship(0, 0, 0, 4).unwrap();
    let before = board.snapshot().unwrap();
    assert!(!board.place_ship(0, 2, 0, 6).unwrap().is_placed());
    assert_eq!(board.snapshot().unwrap(), before);
    assert_eq!(board.place_ship(0, 4, 3, 4), Ok(Placement::Rejected));
    assert_eq!(board.snapshot().unwrap(), before);
}

#[test]
fn test_adjacent_ships_are_allowed() {
    let mut board = setup_board();
    board.place_ship(0, 0, 0, 4).unwrap();
    assert_eq!(board.place_ship(1, 0, 1, 4), Ok(Placement::Placed));
    assert_eq!(board.place_ship(0, 5, 0, 5), Ok(Placement::Placed));
}

#[test]
fn test_reversed_coordinates_fail() {
    let mut board = setup_board();
    assert_eq!(
        board.place_ship(0, 5, 0, 0),
        Err(BoardError::InvalidCoordinates(InvalidCoordinates::Span {
            start: (0, 5),
            end: (0, 0),
        }))
    );
    assert!(matches!(
        board.place_ship(6, 2, 2, 2),
        Err(BoardError::InvalidCoordinates(_))
    ));
    assert!(ship_cells(&board).is_empty());
}

#[test]
fn test_diagonal_coordinates_fail() {
    let mut board = setup_board();
    assert_eq!(
        board.place_ship(0, 0, 5, 5),
        Err(BoardError::InvalidCoordinates(InvalidCoordinates::Span {
            start: (0, 0),
            end: (5, 5),
        }))
    );
}

#[test]
fn test_out_of_bounds_endpoint_fails() {
    let mut board = setup_board();
    assert_eq!(
        board.place_ship(0, 7, 0, 10),
        Err(BoardError::InvalidCoordinates(InvalidCoordinates::Point {
            row: 0,
            col: 10,
        }))
    );
    assert_eq!(
        board.place_ship(-1, 0, 2, 0),
        Err(BoardError::InvalidCoordinates(InvalidCoordinates::Point {
            row: -1,
            col: 0,
        }))
    );
    assert!(ship_cells(&board).is_empty());
}
