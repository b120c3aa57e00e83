//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is full with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
