//! Terminal front-end for the tic-tac-toe core.
//!
//! Reads moves line by line, prints the board after every move and
//! paces computer turns so a human can follow them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, GameConfig};
pub use terminal::{InputCommand, TerminalGame};
