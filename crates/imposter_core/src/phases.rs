//! Phase and role vocabulary shared by the typestates and the controller.

use crate::types::PlayerNumber;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Step of the linear game state machine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    /// Entering the player count and secret word.
    Setup,
    /// Device is being passed to the next player.
    AwaitingReveal,
    /// The current player is looking at their role.
    Revealing,
    /// Everyone has looked; the table is discussing.
    PendingFinish,
    /// Word and imposter are shown to the whole table.
    Complete,
}

impl Phase {
    /// Returns true once roles may be shown to somebody.
    pub fn roles_visible(self) -> bool {
        matches!(self, Self::Revealing | Self::PendingFinish | Self::Complete)
    }
}

/// A transition a presentation layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// Validate the form and deal roles.
    StartGame,
    /// Show the current player their role.
    RevealWord,
    /// Hide the role and move to the next player.
    Advance,
    /// Show the final results.
    RevealResults,
    /// Discard the session and return to setup.
    Reset,
}

/// What a single player is told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role<'a> {
    /// The player must bluff without the word.
    Imposter,
    /// The player knows the secret word.
    Crewmate(&'a str),
}

impl<'a> Role<'a> {
    /// Returns true for the imposter.
    pub fn is_imposter(&self) -> bool {
        matches!(self, Role::Imposter)
    }

    /// Returns the secret word, if this role may see it.
    pub fn secret_word(&self) -> Option<&'a str> {
        match *self {
            Role::Imposter => None,
            Role::Crewmate(word) => Some(word),
        }
    }
}

/// Everything revealed to the table once the game is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResults<'a> {
    secret_word: &'a str,
    imposter: PlayerNumber,
}

impl<'a> GameResults<'a> {
    pub(crate) fn new(secret_word: &'a str, imposter: PlayerNumber) -> Self {
        Self {
            secret_word,
            imposter,
        }
    }

    /// The word the crewmates shared.
    pub fn secret_word(&self) -> &'a str {
        self.secret_word
    }

    /// The player who was the imposter.
    pub fn imposter(&self) -> PlayerNumber {
        self.imposter
    }
}
