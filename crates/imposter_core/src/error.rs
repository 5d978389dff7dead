//! Error types for game transitions.

use crate::phases::{Action, Phase};
use derive_more::{Display, Error, From};

/// Why `start_game` rejected its input.
///
/// This is the only error a player can trigger; every later step is a
/// plain button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum ValidationError {
    /// Player count was not a whole number in `3..=67`.
    #[display("player count out of range")]
    PlayerCountOutOfRange,

    /// Secret word was empty or whitespace.
    #[display("secret word required")]
    SecretWordRequired,
}

/// Error returned by a [`GameController`](crate::GameController) transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The setup form was rejected.
    #[display("{}", _0)]
    #[from]
    Validation(ValidationError),

    /// The transition does not exist in the current phase.
    #[display("cannot {} during the {} phase", action, phase)]
    OutOfPhase {
        /// The attempted transition.
        action: Action,
        /// The phase the session was in.
        phase: Phase,
    },
}

impl GameError {
    /// Returns the validation error, if this is one.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(err) => Some(*err),
            Self::OutOfPhase { .. } => None,
        }
    }
}
