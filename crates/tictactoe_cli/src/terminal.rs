//! Line-oriented game loop.
//!
//! The loop owns the [`Session`] and drives it: it reads human moves from
//! the input, asks the session for computer moves after a short pause and
//! redraws the board after every accepted move.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::time::Duration;
use tictactoe_core::{GameStatus, Session};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, info, instrument};

/// What a line of human input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Play at the given square number.
    Play(u8),
    /// A number too large or negative to name any square.
    OutOfRange(i64),
    /// Start the game over.
    Restart,
    /// Leave the program.
    Quit,
    /// Anything else.
    Unrecognized(String),
}

impl InputCommand {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Ok(number) = line.parse::<i64>() {
            return match u8::try_from(number) {
                Ok(number) => InputCommand::Play(number),
                Err(_) => InputCommand::OutOfRange(number),
            };
        }
        match line.to_ascii_lowercase().as_str() {
            "r" | "restart" => InputCommand::Restart,
            "q" | "quit" | "exit" => InputCommand::Quit,
            _ => InputCommand::Unrecognized(line.to_string()),
        }
    }
}

/// Game loop over an input line source and an output sink.
pub struct TerminalGame<I, W> {
    session: Session,
    input: Lines<I>,
    out: W,
    rng: StdRng,
    delay: Duration,
    json: bool,
}

impl<I, W> TerminalGame<I, W>
where
    I: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a game loop. A `seed` makes computer play repeatable.
    pub fn new(session: Session, input: I, out: W, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            session,
            input: input.lines(),
            out,
            rng,
            delay: Duration::ZERO,
            json: false,
        }
    }

    /// Sets the pause before each computer move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Prints the final status of each game as JSON instead of a message.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Consumes the loop, returning the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays games until the input ends or the player quits.
    ///
    /// Returns the result of every game that was played to the end.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub async fn run(&mut self) -> Result<Vec<GameStatus>> {
        let mut finished = Vec::new();
        writeln!(self.out, "Tic-Tac-Toe: {}", self.session.mode())?;
        self.render()?;

        loop {
            if self.session.is_over() {
                let result = *self.session.result();
                info!(?result, "Game finished");
                finished.push(result);
                self.report()?;

                writeln!(self.out, "Play again? [y/N]")?;
                match self.next_line().await? {
                    Some(line) if line.trim().eq_ignore_ascii_case("y") => {
                        self.restart()?;
                        continue;
                    }
                    _ => return Ok(finished),
                }
            }

            if self.session.needs_computer_move() {
                if !self.delay.is_zero() {
                    tokio::time::sleep(self.delay).await;
                }
                let mover = self.session.mover();
                let turn = self.session.step_computer(&mut self.rng)?;
                writeln!(self.out, "{} plays {}", mover, turn.played().position)?;
                self.render()?;
                continue;
            }

            writeln!(
                self.out,
                "{} to move: choose a square (1-9), r to restart, q to quit",
                self.session.mover()
            )?;
            let Some(line) = self.next_line().await? else {
                debug!("Input closed");
                return Ok(finished);
            };

            match InputCommand::parse(&line) {
                InputCommand::Play(number) => match self.session.submit_move(number) {
                    Ok(_) => self.render()?,
                    Err(e) => writeln!(self.out, "{}", e)?,
                },
                InputCommand::OutOfRange(number) => writeln!(
                    self.out,
                    "Invalid position {}: choose a square from 1 to 9",
                    number
                )?,
                InputCommand::Restart => self.restart()?,
                InputCommand::Quit => return Ok(finished),
                InputCommand::Unrecognized(text) => {
                    writeln!(self.out, "Unrecognized input {:?}", text)?
                }
            }
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.next_line().await?)
    }

    fn restart(&mut self) -> Result<()> {
        self.session.restart();
        writeln!(self.out, "New game: {}", self.session.mode())?;
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        if let Some(last) = self.session.last_move() {
            writeln!(self.out, "Last move: {}", last)?;
        }
        writeln!(self.out, "\n{}\n", self.session.board())?;
        Ok(())
    }

    fn report(&mut self) -> Result<()> {
        if self.json {
            let status = serde_json::to_string(&self.session.status())?;
            writeln!(self.out, "{}", status)?;
        } else if let Some(message) = self.session.message() {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(InputCommand::parse(" 7 \n"), InputCommand::Play(7));
        assert_eq!(InputCommand::parse("42"), InputCommand::Play(42));
        assert_eq!(InputCommand::parse("300"), InputCommand::OutOfRange(300));
        assert_eq!(InputCommand::parse("-1"), InputCommand::OutOfRange(-1));
        assert_eq!(InputCommand::parse("R"), InputCommand::Restart);
        assert_eq!(InputCommand::parse("quit"), InputCommand::Quit);
        assert_eq!(
            InputCommand::parse("center"),
            InputCommand::Unrecognized("center".to_string())
        );
    }
}
