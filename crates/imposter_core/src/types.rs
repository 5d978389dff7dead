//! Validated value types for a game session.
//!
//! Each type can only be built through a checked constructor, so a
//! `PlayerCount` is always within the table limits and a `SecretWord`
//! is never blank.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Fewest players a game can be dealt for.
pub const MIN_PLAYERS: u8 = 3;

/// Most players a game can be dealt for.
pub const MAX_PLAYERS: u8 = 67;

/// Number of players at the table, always in `MIN_PLAYERS..=MAX_PLAYERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Validates a numeric player count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PlayerCountOutOfRange`] outside `3..=67`.
    #[instrument]
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        u8::try_from(count)
            .ok()
            .filter(|n| (MIN_PLAYERS..=MAX_PLAYERS).contains(n))
            .map(Self)
            .ok_or(ValidationError::PlayerCountOutOfRange)
    }

    /// Parses a player count typed into a text field.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a whole
    /// number is reported the same way as an out-of-range number.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let count = input
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::PlayerCountOutOfRange)?;
        Self::new(count)
    }

    /// Returns the count as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the last player to take a turn.
    pub fn last(self) -> PlayerNumber {
        PlayerNumber(self.0)
    }

    /// Returns true if `player` sits at this table.
    pub fn contains(self, player: PlayerNumber) -> bool {
        player.0 <= self.0
    }

    /// Iterates every player in turn order.
    pub fn players(self) -> impl Iterator<Item = PlayerNumber> {
        (1..=self.0).map(PlayerNumber)
    }
}

/// One-based seat number of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PlayerNumber(pub(crate) u8);

impl PlayerNumber {
    /// The player who looks first.
    pub const FIRST: Self = Self(1);

    /// Creates a seat number; zero is not a seat.
    pub fn new(number: u8) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Returns the seat number as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the next seat, or `None` after the last player.
    pub fn next(self, count: PlayerCount) -> Option<Self> {
        (self.0 < count.0).then(|| Self(self.0 + 1))
    }

    /// Human-readable label, e.g. `Player 3`.
    pub fn label(self) -> String {
        format!("Player {}", self.0)
    }
}

/// The word every crewmate sees. Never empty, stored without
/// surrounding whitespace.
///
/// `Debug` output is redacted so the word cannot slip into logs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SecretWord(pub(crate) String);

impl SecretWord {
    /// Validates a secret word.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SecretWordRequired`] when the input is
    /// empty or whitespace.
    #[instrument(skip(input))]
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        let word = input.trim();
        if word.is_empty() {
            return Err(ValidationError::SecretWordRequired);
        }
        Ok(Self(word.to_string()))
    }

    /// Returns the word.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretWord(<hidden>)")
    }
}
