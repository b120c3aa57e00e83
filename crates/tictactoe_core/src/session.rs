//! Turn controller for a single game.
//!
//! A [`Session`] owns one board and two players and decides whose turn it
//! is. Front-ends hold the session value themselves and call through it:
//! human moves come in through [`Session::submit_move`], computer moves are
//! pulled with [`Session::step_computer`], and [`Session::status`] gives a
//! snapshot to draw.

use super::invariants::{InvariantSet, SessionInvariants};
use super::{Board, GameError, GameMode, GameStatus, Mark, Move, Player};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player 1, who moves first.
    One,
    /// Player 2.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Turn {
    /// The move that was placed.
    #[getter(copy)]
    played: Move,
    /// Game status after the move.
    #[getter(copy)]
    result: GameStatus,
}

/// Read-only snapshot for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Status {
    /// Display token of each square, `'1'..'9'` or the mark.
    cells: [char; 9],
    /// Mark of the player to move, `None` once the game is over.
    mover: Option<Mark>,
    /// Game status.
    result: GameStatus,
}

/// A game in progress or finished: board, players and turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// Mode the players were built from.
    #[getter(copy)]
    mode: GameMode,
    /// Mark of player 1.
    #[getter(copy)]
    starting_mark: Mark,
    /// The board.
    board: Board,
    /// Player 1, moves first.
    #[getter(copy)]
    player1: Player,
    /// Player 2.
    #[getter(copy)]
    player2: Player,
    /// Seat of the player to move.
    #[getter(copy)]
    current: Seat,
    /// Game status, recomputed after every move.
    result: GameStatus,
    /// Moves played this game.
    history: Vec<Move>,
}

impl Session {
    /// Starts a fresh game. Player 1 takes `starting_mark` and moves first.
    #[instrument]
    pub fn new_game(mode: GameMode, starting_mark: Mark) -> Self {
        let (player1, player2) = mode.players(starting_mark);
        info!(%mode, %player1, %player2, "Starting new game");
        Self {
            mode,
            starting_mark,
            board: Board::new(),
            player1,
            player2,
            current: Seat::One,
            result: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts a fresh game from a mode name.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownGameMode`] if `mode` names no supported
    /// mode. Nothing is built in that case, so a session the caller
    /// already holds stays as it was.
    #[instrument]
    pub fn setup(mode: &str, starting_mark: Mark) -> Result<Self, GameError> {
        let mode = GameMode::parse(mode)?;
        Ok(Self::new_game(mode, starting_mark))
    }

    /// Replaces this game with a fresh one of the same mode and marks.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn restart(&mut self) {
        *self = Self::new_game(self.mode, self.starting_mark);
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> Player {
        match seat {
            Seat::One => self.player1,
            Seat::Two => self.player2,
        }
    }

    /// Returns the player whose turn it is (the last mover once the game
    /// is over).
    pub fn mover(&self) -> Player {
        self.player(self.current)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Returns true if the game is waiting on a computer player.
    pub fn needs_computer_move(&self) -> bool {
        !self.is_over() && !self.mover().is_human()
    }

    /// Returns the end-of-game message, or `None` while the game runs.
    pub fn message(&self) -> Option<String> {
        self.result.message()
    }

    /// Returns the most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns a snapshot of the board and turn for display.
    pub fn status(&self) -> Status {
        Status {
            cells: self.board.tokens(),
            mover: (!self.is_over()).then(|| self.mover().mark()),
            result: self.result,
        }
    }

    /// Plays a human move at square `number` (1-9).
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended
    /// - [`GameError::IllegalModeForMove`] if a computer is to move
    /// - [`GameError::InvalidPosition`] for numbers outside 1-9
    /// - [`GameError::CellOccupied`] if the square is taken
    ///
    /// On error nothing changes and the same player is still to move.
    #[instrument(skip(self), fields(mover = %self.mover()))]
    pub fn submit_move(&mut self, number: u8) -> Result<Turn, GameError> {
        self.ensure_in_progress()?;
        let mover = self.mover();
        if !mover.is_human() {
            warn!("Human move submitted on a computer's turn");
            return Err(GameError::IllegalModeForMove {
                mark: mover.mark(),
                expected: "computer",
            });
        }

        let position = self.board.place(number, mover.mark()).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;
        Ok(self.finish_turn(Move::new(mover.mark(), position)))
    }

    /// Lets the computer player whose turn it is choose and play a move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended
    /// - [`GameError::IllegalModeForMove`] if a human is to move
    /// - [`GameError::NoMoveAvailable`] if the strategy finds no square
    #[instrument(skip(self, rng), fields(mover = %self.mover()))]
    pub fn step_computer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Turn, GameError> {
        self.ensure_in_progress()?;
        let mover = self.mover();
        if mover.is_human() {
            warn!("Computer move requested on a human's turn");
            return Err(GameError::IllegalModeForMove {
                mark: mover.mark(),
                expected: "human",
            });
        }

        let position = mover
            .get_move(&self.board, rng)
            .ok_or(GameError::NoMoveAvailable(mover.mark()))?;
        if !self.board.make_move(position, mover.mark()) {
            return Err(GameError::CellOccupied(position));
        }
        Ok(self.finish_turn(Move::new(mover.mark(), position)))
    }

    /// Plays computer turns until a human must move or the game ends.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Session::step_computer`].
    pub fn play_computer_turns<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Turn>, GameError> {
        let mut turns = Vec::new();
        while self.needs_computer_move() {
            turns.push(self.step_computer(rng)?);
        }
        Ok(turns)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            warn!(result = ?self.result, "Move attempted after game over");
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    /// Records a placed move, then settles the game or passes the turn.
    fn finish_turn(&mut self, played: Move) -> Turn {
        self.history.push(played);
        debug!(%played, "Move placed");

        if self.board.check_win(played.mark) {
            self.result = GameStatus::Won(played.mark);
            info!(winner = %played.mark, moves = self.history.len(), "Game won");
        } else if self.board.is_full() {
            self.result = GameStatus::Draw;
            info!("Game drawn");
        } else {
            self.current = self.current.other();
        }

        self.assert_invariants();
        Turn {
            played,
            result: self.result,
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated: {:?}",
            SessionInvariants::check_all(self)
        );
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_state() {
        let session = Session::new_game(GameMode::HumanVsSmart, Mark::O);
        assert_eq!(session.current(), Seat::One);
        assert_eq!(session.mover().mark(), Mark::O);
        assert_eq!(session.player2().mark(), Mark::X);
        assert_eq!(session.result(), &GameStatus::InProgress);
        assert!(session.history().is_empty());
        assert_eq!(session.message(), None);
    }

    #[test]
    fn test_turn_passes_after_accepted_move() {
        let mut session = Session::new_game(GameMode::HumanVsHuman, Mark::X);
        let turn = session.submit_move(5).unwrap();
        assert_eq!(turn.played(), Move::new(Mark::X, Position::Center));
        assert_eq!(turn.result(), GameStatus::InProgress);
        assert_eq!(session.current(), Seat::Two);
        assert_eq!(session.last_move(), Some(turn.played()));
    }

    #[test]
    fn test_occupied_square_keeps_mover() {
        let mut session = Session::new_game(GameMode::HumanVsHuman, Mark::X);
        session.submit_move(5).unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit_move(5),
            Err(GameError::CellOccupied(Position::Center))
        );
        assert_eq!(session, before);
        assert_eq!(session.mover().mark(), Mark::O);
    }

    #[test]
    fn test_computer_cannot_be_given_human_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = Session::new_game(GameMode::HumanVsRandom, Mark::X);
        assert!(matches!(
            session.step_computer(&mut rng),
            Err(GameError::IllegalModeForMove { mark: Mark::X, .. })
        ));
        session.submit_move(1).unwrap();
        assert!(session.needs_computer_move());
        assert!(matches!(
            session.submit_move(2),
            Err(GameError::IllegalModeForMove { mark: Mark::O, .. })
        ));
        session.step_computer(&mut rng).unwrap();
        assert!(!session.needs_computer_move());
    }

    #[test]
    fn test_restart_keeps_mode_and_marks() {
        let mut session = Session::new_game(GameMode::HumanVsSmart, Mark::O);
        session.submit_move(1).unwrap();
        session.restart();
        assert_eq!(session, Session::new_game(GameMode::HumanVsSmart, Mark::O));
    }
}
