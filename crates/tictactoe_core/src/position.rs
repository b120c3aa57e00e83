//! Board positions, numbered 1-9 left-to-right, top-to-bottom.

use super::error::GameError;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the tic-tac-toe board.
///
/// Players name squares by their 1-based number, which is also what an
/// unplayed square shows on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Corners in the order the smart computer tries them.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Edges in the order the smart computer tries them.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its 0-based board index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to its 1-based square number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the placeholder digit shown on an unplayed square.
    pub fn symbol(self) -> char {
        char::from(b'0' + self.number())
    }

    /// Creates position from a 0-based board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based square number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] unless `number` is in 1-9.
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, GameError> {
        usize::from(number)
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or(GameError::InvalidPosition(number))
    }

    /// Filters positions by board state - returns only empty squares,
    /// in ascending order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}
