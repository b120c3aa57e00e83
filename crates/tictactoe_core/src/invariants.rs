//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every move.
//! The session checks them in debug builds; tests check them directly.

use super::session::Session;
use super::{GameStatus, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Invariant: the recorded status is exactly what the board implies.
pub struct StatusMatchesBoard;

impl Invariant<Session> for StatusMatchesBoard {
    fn holds(session: &Session) -> bool {
        *session.result() == GameStatus::of(session.board())
    }

    fn description() -> &'static str {
        "Status is derived from the board (win, then full, else in progress)"
    }
}

/// Invariant: players alternate, so mark counts differ by at most one.
pub struct MarksBalanced;

impl Invariant<Session> for MarksBalanced {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Mark::X);
        let o = session.board().count(Mark::O);
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

/// Invariant: every occupied square appears once in the move history.
pub struct HistoryMatchesBoard;

impl Invariant<Session> for HistoryMatchesBoard {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let filled = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        filled == session.history().len()
            && session
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "History lists every placed mark"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (StatusMatchesBoard, MarksBalanced, HistoryMatchesBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let session = Session::new_game(GameMode::HumanVsHuman, Mark::X);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = Session::new_game(GameMode::HumanVsHuman, Mark::O);
        for n in [5, 1, 9] {
            session.submit_move(n).unwrap();
        }
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corruption() {
        let mut session = Session::new_game(GameMode::HumanVsHuman, Mark::X);
        session.submit_move(5).unwrap();
        session.board_mut().make_move(Position::TopLeft, Mark::X);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryMatchesBoard::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = Session::new_game(GameMode::RandomVsSmart, Mark::X);
        type TwoInvariants = (StatusMatchesBoard, MarksBalanced);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }
}
