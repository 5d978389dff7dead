//! Imposter Word - pass-the-device party game logic.
//!
//! One player is secretly the imposter and never sees the shared secret
//! word. The game is a short linear state machine:
//!
//! ```text
//! Setup → AwaitingReveal ⇄ Revealing → PendingFinish → Complete → Setup
//! ```
//!
//! # Architecture
//!
//! - **Typestates**: one type per phase, holding only that phase's data
//! - **Session**: an enum over the typestates for runtime storage
//! - **Controller**: applies actions all-or-nothing and keeps the
//!   validation message for the setup form
//! - **Dice**: injected randomness, seedable for tests and replays
//!
//! # Example
//!
//! ```
//! use imposter_core::{FixedRoll, GameController, Phase, PlayerNumber, Role};
//!
//! let mut game = GameController::with_dice(FixedRoll(3));
//! game.start_game("5", "Beach")?;
//! for _ in 0..5 {
//!     game.reveal_word()?;
//!     game.advance()?;
//! }
//! assert_eq!(game.phase(), Phase::PendingFinish);
//!
//! game.reveal_results()?;
//! let results = game.results().expect("complete game has results");
//! assert_eq!(results.secret_word(), "Beach");
//! assert_eq!(results.imposter().label(), "Player 3");
//! assert_eq!(game.role_for(PlayerNumber::FIRST), Some(Role::Crewmate("Beach")));
//! # Ok::<(), imposter_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod dice;
mod error;
mod invariants;
mod phases;
mod session;
mod suggestions;
mod typestate;
mod types;

// Crate-level exports - Controller
pub use controller::{GameController, SessionView};

// Crate-level exports - Randomness
pub use dice::{Dice, FixedRoll, RandomSource};

// Crate-level exports - Errors
pub use error::{GameError, ValidationError};

// Crate-level exports - Invariants
pub use invariants::{
    CurrentPlayerInRange, ImposterInRange, Invariant, InvariantSet, InvariantViolation,
    SecretWordPresent, SessionInvariants,
};

// Crate-level exports - Phase vocabulary
pub use phases::{Action, GameResults, Phase, Role};

// Crate-level exports - Session and typestates
pub use session::GameSession;
pub use typestate::{Advance, AwaitingReveal, Complete, Deal, PendingFinish, Revealing, SetupPhase};

// Crate-level exports - Values
pub use suggestions::{DEFAULT_SUGGESTIONS, WordSuggestions};
pub use types::{MAX_PLAYERS, MIN_PLAYERS, PlayerCount, PlayerNumber, SecretWord};
