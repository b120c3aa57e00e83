//! Tic-tac-toe game core.
//!
//! This library holds everything a presentation layer needs to run a game
//! between humans and computer opponents, and nothing about how the game
//! is drawn.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its pure queries (legality, win, draw)
//! - **Rules**: win and draw detection over a board
//! - **Players**: a mark plus a strategy (human, random or smart computer)
//! - **Session**: the turn controller the front-end calls through
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameMode, GameStatus, Mark, Session};
//!
//! let mut session = Session::new_game(GameMode::HumanVsHuman, Mark::X);
//! session.submit_move(5)?;
//! assert_eq!(session.status().mover(), &Some(Mark::O));
//! assert_eq!(session.status().result(), &GameStatus::InProgress);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod invariants;
mod mode;
mod players;
mod position;
mod rules;
mod session;
mod types;

pub use action::Move;
pub use error::GameError;
pub use invariants::{
    HistoryMatchesBoard, Invariant, InvariantSet, InvariantViolation, MarksBalanced,
    SessionInvariants, StatusMatchesBoard,
};
pub use mode::GameMode;
pub use players::{Player, Strategy};
pub use position::Position;
pub use rules::{WINNING_LINES, check_win, completes_line, is_draw, is_full, winner};
pub use session::{Seat, Session, Status, Turn};
pub use types::{Board, GameStatus, Mark, Square};
