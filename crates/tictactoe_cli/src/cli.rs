//! Command-line interface for the tictactoe binary.

use clap::{Args, Parser, Subcommand};

/// Tic-tac-toe against humans, a random computer or a smart computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games until you quit
    Play(PlayArgs),

    /// List the supported game modes
    Modes,
}

/// Options for a play session. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Game mode, e.g. "human-vs-smart" or "Human vs Smart Computer"
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Mark for player 1, who moves first (X or O)
    #[arg(long)]
    pub mark: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer players' random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final status of each game as JSON
    #[arg(long)]
    pub json: bool,
}
