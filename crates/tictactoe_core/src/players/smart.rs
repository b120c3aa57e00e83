//! Computer player using a fixed priority heuristic.
//!
//! Tiers, each tried only if the previous found nothing:
//! win now, block the opponent, center, corners (1, 3, 7, 9),
//! edges (2, 4, 6, 8), then a random empty square.
//!
//! Win and block scans take the first qualifying square in ascending
//! order. This is greedy, not minimax, and a perfect opponent can beat it.

use super::super::rules::completes_line;
use super::super::{Board, Mark, Position};
use super::random_move;
use rand::Rng;
use tracing::trace;

/// Chooses a move for `mark`, or `None` on a full board.
pub fn smart_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    let empty = board.empty_cells();

    if let Some(pos) = first_completing(board, &empty, mark) {
        trace!(position = ?pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = first_completing(board, &empty, mark.opponent()) {
        trace!(position = ?pos, "Blocking opponent");
        return Some(pos);
    }

    std::iter::once(Position::Center)
        .chain(Position::CORNERS)
        .chain(Position::EDGES)
        .find(|pos| board.is_empty(*pos))
        .or_else(|| random_move(board, rng))
}

fn first_completing(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|pos| completes_line(board, *pos, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_from(x: &[u8], o: &[u8]) -> Board {
        let mut board = Board::new();
        for n in x {
            board.place(*n, Mark::X).unwrap();
        }
        for n in o {
            board.place(*n, Mark::O).unwrap();
        }
        board
    }

    fn pick(board: &Board, mark: Mark) -> Option<u8> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        smart_move(board, mark, &mut rng).map(Position::number)
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from(&[1, 2], &[4, 5]);
        assert_eq!(pick(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_win_beats_block() {
        // O to move can win at 6 or block X at 3; winning comes first.
        let board = board_from(&[1, 2, 9], &[4, 5]);
        assert_eq!(pick(&board, Mark::O), Some(6));
    }

    #[test]
    fn test_blocks_opponent() {
        let board = board_from(&[], &[1, 2]);
        assert_eq!(pick(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_first_win_in_ascending_order() {
        // X wins at 3 (row) or 7 (column); 3 is found first.
        let board = board_from(&[1, 2, 4], &[5, 9, 6]);
        assert_eq!(pick(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_prefers_center() {
        assert_eq!(pick(&Board::new(), Mark::X), Some(5));
    }

    #[test]
    fn test_corner_order() {
        assert_eq!(pick(&board_from(&[5], &[]), Mark::O), Some(1));
        assert_eq!(pick(&board_from(&[5], &[1]), Mark::X), Some(3));
        assert_eq!(pick(&board_from(&[5, 9], &[1]), Mark::O), Some(3));
    }

    #[test]
    fn test_edge_when_corners_taken() {
        // X O X / _ O _ / O X O, no open line for either side.
        let board = board_from(&[1, 3, 8], &[2, 5, 7, 9]);
        assert_eq!(pick(&board, Mark::X), Some(4));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from(&[1, 3, 5, 6, 8], &[2, 4, 7, 9]);
        assert_eq!(pick(&board, Mark::O), None);
    }

    #[test]
    fn test_probing_leaves_board_untouched() {
        let board = board_from(&[1, 2], &[4, 5]);
        let before = board.clone();
        let _ = pick(&board, Mark::O);
        assert_eq!(board, before);
    }
}
