//! First-class invariants for a game session.
//!
//! Most guarantees are carried by the types. These checks cover the
//! numeric relationships between fields that the types cannot express,
//! and run after every controller transition in debug builds.

use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the imposter sits at the table.
pub struct ImposterInRange;

impl Invariant<GameSession> for ImposterInRange {
    fn holds(session: &GameSession) -> bool {
        session
            .deal()
            .is_none_or(|deal| deal.imposter.get() >= 1 && deal.player_count.contains(deal.imposter))
    }

    fn description() -> &'static str {
        "Imposter is one of the players"
    }
}

/// Invariant: the current player never exceeds the player count.
pub struct CurrentPlayerInRange;

impl Invariant<GameSession> for CurrentPlayerInRange {
    fn holds(session: &GameSession) -> bool {
        let current = session.current_player();
        current.get() >= 1
            && session
                .player_count()
                .is_none_or(|count| count.contains(current))
    }

    fn description() -> &'static str {
        "Current player is within the player count"
    }
}

/// Invariant: a dealt game always has a word.
pub struct SecretWordPresent;

impl Invariant<GameSession> for SecretWordPresent {
    fn holds(session: &GameSession) -> bool {
        session
            .deal()
            .is_none_or(|deal| !deal.secret_word.as_str().trim().is_empty())
    }

    fn description() -> &'static str {
        "Secret word is set once the game leaves setup"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (ImposterInRange, CurrentPlayerInRange, SecretWordPresent);
