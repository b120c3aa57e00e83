//! Game mode selection.

use super::{GameError, Mark, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// Game mode - who sits in each seat?
///
/// Player 1 always takes the starting mark and moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans sharing the board.
    #[strum(to_string = "Human vs Human", serialize = "human-vs-human")]
    HumanVsHuman,
    /// Human against the random computer.
    #[strum(to_string = "Human vs Random Computer", serialize = "human-vs-random")]
    HumanVsRandom,
    /// Human against the smart computer.
    #[default]
    #[strum(to_string = "Human vs Smart Computer", serialize = "human-vs-smart")]
    HumanVsSmart,
    /// Random computer against smart computer, no human input.
    #[strum(
        to_string = "Random Computer vs Smart Computer",
        serialize = "random-vs-smart"
    )]
    RandomVsSmart,
}

impl GameMode {
    /// Parses a mode from its display name or kebab-case alias.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownGameMode`] for anything else.
    #[instrument]
    pub fn parse(name: &str) -> Result<Self, GameError> {
        GameMode::from_str(name.trim()).map_err(|_| {
            warn!(mode = name, "Rejected unknown game mode");
            GameError::UnknownGameMode(name.to_string())
        })
    }

    /// Returns the short alias accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "human-vs-human",
            GameMode::HumanVsRandom => "human-vs-random",
            GameMode::HumanVsSmart => "human-vs-smart",
            GameMode::RandomVsSmart => "random-vs-smart",
        }
    }

    /// Lists every supported mode.
    pub fn all() -> Vec<GameMode> {
        GameMode::iter().collect()
    }

    /// Builds the two players for this mode.
    ///
    /// Player 1 gets `starting_mark`, player 2 the complement.
    pub fn players(self, starting_mark: Mark) -> (Player, Player) {
        let second = starting_mark.opponent();
        match self {
            GameMode::HumanVsHuman => (Player::human(starting_mark), Player::human(second)),
            GameMode::HumanVsRandom => (
                Player::human(starting_mark),
                Player::random_computer(second),
            ),
            GameMode::HumanVsSmart => (
                Player::human(starting_mark),
                Player::smart_computer(second),
            ),
            GameMode::RandomVsSmart => (
                Player::random_computer(starting_mark),
                Player::smart_computer(second),
            ),
        }
    }
}
