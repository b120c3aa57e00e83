//! Players and the strategies that choose their moves.

mod random;
mod smart;

pub use random::random_move;
pub use smart::smart_move;

use super::{Board, Mark, Position};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a player chooses moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Strategy {
    /// Moves arrive from outside the core (a click, a keypress).
    #[strum(to_string = "human")]
    Human,
    /// Uniform choice among empty squares.
    #[strum(to_string = "random computer")]
    RandomComputer,
    /// Win, block, center, corner, edge, then random.
    #[strum(to_string = "smart computer")]
    SmartComputer,
}

impl Strategy {
    /// Returns true for strategies that compute their own moves.
    pub fn is_computer(self) -> bool {
        !matches!(self, Strategy::Human)
    }
}

/// A player in a game: a fixed mark and a fixed strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Player {
    /// The mark this player places.
    #[getter(copy)]
    mark: Mark,
    /// How this player chooses moves.
    #[getter(copy)]
    strategy: Strategy,
}

impl Player {
    /// Creates a human player.
    pub fn human(mark: Mark) -> Self {
        Self::new(mark, Strategy::Human)
    }

    /// Creates a computer player choosing uniformly at random.
    pub fn random_computer(mark: Mark) -> Self {
        Self::new(mark, Strategy::RandomComputer)
    }

    /// Creates a computer player using the win/block/position heuristic.
    pub fn smart_computer(mark: Mark) -> Self {
        Self::new(mark, Strategy::SmartComputer)
    }

    /// Returns true if this player's moves come from outside the core.
    pub fn is_human(&self) -> bool {
        self.strategy == Strategy::Human
    }

    /// Proposes a move for this player.
    ///
    /// Humans always defer (`None`); the controller takes their move from
    /// external input instead. Computers return `None` only on a full board.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark, strategy = %self.strategy))]
    pub fn get_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Position> {
        let choice = match self.strategy {
            Strategy::Human => None,
            Strategy::RandomComputer => random_move(board, rng),
            Strategy::SmartComputer => smart_move(board, self.mark, rng),
        };
        debug!(choice = ?choice, "Strategy chose move");
        choice
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.mark, self.strategy)
    }
}
