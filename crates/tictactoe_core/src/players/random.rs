//! Computer player that picks any empty square.

use super::super::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random empty position, or `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_cells().choose(rng).copied()
}
