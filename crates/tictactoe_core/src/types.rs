//! Core domain types for tic-tac-toe.

use super::error::GameError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Mark {
    /// Returns the complementary mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character used to draw this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unplayed square, shown as its own position number.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns every square to its placeholder state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is still playable.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` at `pos` if the square is unplayed.
    ///
    /// Returns `false` and leaves the board untouched when the square
    /// already holds a mark.
    pub fn make_move(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.squares[pos.index()] = Square::Occupied(mark);
        true
    }

    /// Places `mark` at the 1-based square `number`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] for numbers outside 1-9 and
    /// [`GameError::CellOccupied`] when the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, number: u8, mark: Mark) -> Result<Position, GameError> {
        let pos = Position::from_number(number)?;
        if self.make_move(pos, mark) {
            Ok(pos)
        } else {
            Err(GameError::CellOccupied(pos))
        }
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if `mark` holds any winning line.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(self, mark)
    }

    /// Returns the mark holding a winning line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Returns the playable positions in ascending order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns the display token for a square: its number or its mark.
    pub fn token(&self, pos: Position) -> char {
        match self.get(pos) {
            Square::Empty => pos.symbol(),
            Square::Occupied(mark) => mark.symbol(),
        }
    }

    /// Returns the display tokens of all nine squares.
    pub fn tokens(&self) -> [char; 9] {
        Position::ALL.map(|pos| self.token(pos))
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, token) in self.tokens().iter().enumerate() {
            result.push(' ');
            result.push(*token);
            result.push(' ');
            if i % 3 != 2 {
                result.push('|');
            } else if i != 8 {
                result.push_str("\n-----------\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Game ended on a full board with no winner.
    Draw,
}

impl GameStatus {
    /// Derives the status from the board alone.
    pub fn of(board: &Board) -> Self {
        match board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns the end-of-game message, or `None` while the game runs.
    pub fn message(&self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(format!("Player with mark '{}' wins!", mark)),
            GameStatus::Draw => Some("It's a draw!".to_string()),
        }
    }
}
