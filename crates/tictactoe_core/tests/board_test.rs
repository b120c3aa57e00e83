//! Tests for board queries and mutation.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{Board, GameError, Mark, Position, WINNING_LINES};

#[test]
fn test_make_move_on_occupied_square_fails_without_change() {
    let mut board = Board::new();
    assert!(board.make_move(Position::Center, Mark::X));
    let before = board.clone();

    assert!(!board.make_move(Position::Center, Mark::X));
    assert!(!board.make_move(Position::Center, Mark::O));
    assert_eq!(board, before);
}

#[test]
fn test_place_reports_occupied_square() {
    let mut board = Board::new();
    assert_eq!(board.place(3, Mark::O), Ok(Position::TopRight));
    assert_eq!(
        board.place(3, Mark::X),
        Err(GameError::CellOccupied(Position::TopRight))
    );
}

#[test]
fn test_empty_cells_tracks_marks_played() {
    // Random fill orders; after every placement the count must match.
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut order = Position::ALL;
        order.shuffle(&mut rng);

        let mut board = Board::new();
        let mut mark = Mark::X;
        for pos in order {
            board.make_move(pos, mark);
            mark = mark.opponent();
            let played = board.count(Mark::X) + board.count(Mark::O);
            assert_eq!(board.empty_cells().len(), 9 - played);
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}

#[test]
fn test_empty_cells_ascending() {
    let mut board = Board::new();
    board.make_move(Position::TopCenter, Mark::X);
    board.make_move(Position::BottomLeft, Mark::O);
    let numbers: Vec<u8> = board.empty_cells().into_iter().map(Position::number).collect();
    assert_eq!(numbers, vec![1, 3, 4, 5, 6, 8, 9]);
}

#[test]
fn test_every_winning_line() {
    assert_eq!(WINNING_LINES.len(), 8);
    for line in WINNING_LINES {
        let mut board = Board::new();
        for pos in line {
            board.make_move(pos, Mark::O);
        }
        assert!(board.check_win(Mark::O));
        assert!(!board.check_win(Mark::X));
    }
}

#[test]
fn test_full_board_without_line() {
    let mut board = Board::new();
    for n in [1, 3, 5, 6, 8] {
        board.place(n, Mark::X).unwrap();
    }
    for n in [2, 4, 7, 9] {
        board.place(n, Mark::O).unwrap();
    }
    assert!(board.is_full());
    assert!(!board.check_win(Mark::X));
    assert!(!board.check_win(Mark::O));
    assert_eq!(board.winner(), None);
}
