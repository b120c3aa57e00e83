//! Errors raised by the game core.
//!
//! Every error is recoverable: the rejected action leaves the session
//! exactly as it was, and the caller may retry.

use super::position::Position;
use super::types::Mark;

/// Error that can occur when setting up a game or playing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The square number is outside 1-9.
    #[display("Invalid position {}: choose a square from 1 to 9", _0)]
    InvalidPosition(u8),

    /// The square already holds a mark.
    #[display("Square {} is occupied, choose another", _0)]
    CellOccupied(Position),

    /// The move came through the wrong channel for the current mover,
    /// e.g. a human move while the computer is to play.
    #[display("Player {} is a {} and cannot move that way", mark, expected)]
    IllegalModeForMove {
        /// Mark of the player whose turn it is.
        mark: Mark,
        /// Kind of player that is to move.
        expected: &'static str,
    },

    /// The requested game mode is not supported.
    #[display("Unknown game mode: {:?}", _0)]
    UnknownGameMode(String),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// A computer strategy produced no move.
    #[display("No moves available for player {}", _0)]
    NoMoveAvailable(Mark),
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        assert!(
            GameError::CellOccupied(Position::Center)
                .to_string()
                .contains("occupied")
        );
        assert_eq!(
            GameError::UnknownGameMode("chess".into()).to_string(),
            "Unknown game mode: \"chess\""
        );
        assert_eq!(
            GameError::IllegalModeForMove {
                mark: Mark::O,
                expected: "computer",
            }
            .to_string(),
            "Player O is a computer and cannot move that way"
        );
    }
}
