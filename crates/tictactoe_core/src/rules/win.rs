//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};

/// The eight lines that win the game when held by one mark.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `mark` holds any winning line.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let held = Square::Occupied(mark);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == held))
}

/// Returns the mark holding a winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c)
            && let Square::Occupied(mark) = sq
        {
            return Some(mark);
        }
    }

    None
}

/// Checks whether placing `mark` at `pos` would complete a line for it.
///
/// The board is only read: `pos` is treated as holding `mark` whatever
/// it currently holds, so callers probe empty squares only.
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let held = Square::Occupied(mark);
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&pos))
        .any(|line| {
            line.iter()
                .all(|other| *other == pos || board.get(*other) == held)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for pos in line {
                    board.make_move(pos, mark);
                }
                assert!(check_win(&board, mark), "line {:?}", line);
                assert!(!check_win(&board, mark.opponent()), "line {:?}", line);
                assert_eq!(winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.make_move(Position::TopLeft, Mark::X);
        board.make_move(Position::TopCenter, Mark::X);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.make_move(Position::TopLeft, Mark::X);
        board.make_move(Position::TopCenter, Mark::O);
        board.make_move(Position::TopRight, Mark::X);
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_completes_line_leaves_board_untouched() {
        let mut board = Board::new();
        board.make_move(Position::TopLeft, Mark::X);
        board.make_move(Position::TopCenter, Mark::X);
        let before = board.clone();

        assert!(completes_line(&board, Position::TopRight, Mark::X));
        assert!(!completes_line(&board, Position::TopRight, Mark::O));
        assert!(!completes_line(&board, Position::BottomRight, Mark::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_completes_line_agrees_with_placing() {
        let mut board = Board::new();
        board.make_move(Position::Center, Mark::O);
        board.make_move(Position::BottomLeft, Mark::O);
        board.make_move(Position::TopLeft, Mark::X);

        for pos in board.empty_cells() {
            for mark in [Mark::X, Mark::O] {
                let mut probe = board.clone();
                probe.make_move(pos, mark);
                assert_eq!(
                    completes_line(&board, pos, mark),
                    check_win(&probe, mark),
                    "{:?} at {:?}",
                    mark,
                    pos
                );
            }
        }
    }
}
