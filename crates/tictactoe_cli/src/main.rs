//! tictactoe - play tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Command, GameConfig, PlayArgs, TerminalGame};
use tictactoe_core::{GameMode, Session};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Modes => list_modes(),
    }
}

/// Run games on stdin/stdout until the player quits
#[instrument(skip_all)]
async fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::resolve(&args)?;
    let session = Session::setup(config.mode(), config.mark())?;
    info!(mode = %session.mode(), mark = %config.mark(), "Starting play session");

    let mut game = TerminalGame::new(
        session,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        config.seed(),
    )
    .with_delay(config.computer_delay())
    .with_json(args.json);

    let finished = game.run().await?;
    info!(games = finished.len(), "Play session ended");
    Ok(())
}

/// Print the supported modes and their aliases
fn list_modes() -> Result<()> {
    for mode in GameMode::all() {
        println!("{:<36}{}", mode.to_string(), mode.alias());
    }
    Ok(())
}
