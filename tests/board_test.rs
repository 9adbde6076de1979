//! Tests for board values, cells and notation.

use strictly_minimax::{
    Board, BoardInvariants, Cell, InvalidMoveError, InvariantSet, ParseBoardError, Side, Square,
    Verdict,
};

#[test]
fn test_cell_index_round_trip() {
    assert_eq!(Cell::TopLeft.index(), 0);
    assert_eq!(Cell::Center.index(), 4);
    assert_eq!(Cell::BottomRight.index(), 8);
    assert_eq!(Cell::from_index(4), Some(Cell::Center));
    assert_eq!(Cell::from_index(9), None);
}

#[test]
fn test_empty_cells_on_empty_board() {
    let board = Board::empty();
    let cells: Vec<_> = board.empty_cells().collect();
    assert_eq!(cells, Cell::ALL.to_vec());
}

#[test]
fn test_empty_cells_filters_occupied() {
    let board = Board::empty()
        .after_move(Cell::TopLeft, Side::First)
        .and_then(|b| b.after_move(Cell::Center, Side::Second))
        .unwrap();

    let cells: Vec<_> = board.empty_cells().collect();
    assert_eq!(cells.len(), 7);
    assert!(!cells.contains(&Cell::TopLeft));
    assert!(!cells.contains(&Cell::Center));
    assert!(cells.contains(&Cell::BottomRight));
}

#[test]
fn test_after_move_leaves_input_untouched() {
    let board = Board::empty().after_move(Cell::Center, Side::First).unwrap();
    let copy = board;

    let next = board.after_move(Cell::TopLeft, Side::Second).unwrap();
    assert_eq!(board, copy);
    assert_eq!(board.get(Cell::TopLeft), Square::Empty);
    assert_eq!(next.get(Cell::TopLeft), Square::Occupied(Side::Second));

    // Exactly one square differs.
    let changed = board
        .squares()
        .iter()
        .zip(next.squares())
        .filter(|(a, b)| a != b)
        .count();
    assert_eq!(changed, 1);
}

#[test]
fn test_after_move_on_occupied_cell() {
    let board = Board::empty().after_move(Cell::Center, Side::First).unwrap();
    let result = board.after_move(Cell::Center, Side::Second);
    assert_eq!(result, Err(InvalidMoveError::SquareOccupied(Cell::Center)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_after_move_on_won_board() {
    let board: Board = "XXX OO. ...".parse().unwrap();
    assert_eq!(
        board.after_move(Cell::BottomRight, Side::Second),
        Err(InvalidMoveError::GameOver)
    );
}

#[test]
fn test_side_to_move_alternates() {
    let mut board = Board::empty();
    let mut expected = Side::First;
    for cell in [Cell::Center, Cell::TopLeft, Cell::TopRight, Cell::BottomLeft] {
        assert_eq!(board.to_move(), expected);
        board = board.after_move(cell, expected).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_reachable_boards_satisfy_invariants() {
    let mut board = Board::empty();
    for cell in [
        Cell::TopLeft,
        Cell::Center,
        Cell::TopRight,
        Cell::TopCenter,
        Cell::BottomCenter,
    ] {
        board = board.after_move(cell, board.to_move()).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }
}

#[test]
fn test_notation_round_trip() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(board.to_string(), "XO./.X./..O");
    assert_eq!(board.verdict(), Verdict::InProgress);
    assert_eq!(board.to_move(), Side::First);
}

#[test]
fn test_notation_rejects_two_winners() {
    let err = "XXX OOO ...".parse::<Board>().unwrap_err();
    assert!(matches!(err, ParseBoardError::Unreachable(_)));
}
