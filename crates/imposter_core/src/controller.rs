//! Game controller: owns the session and applies player actions.

use crate::dice::{Dice, RandomSource};
use crate::error::{GameError, ValidationError};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::phases::{Action, GameResults, Phase, Role};
use crate::session::GameSession;
use crate::suggestions::WordSuggestions;
use crate::types::{PlayerCount, PlayerNumber, SecretWord};
use tracing::{debug, error, info, instrument, warn};

/// The observable, non-confidential state a presentation layer renders.
///
/// Two controllers with equal views look identical to every player at
/// the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Current phase.
    pub phase: Phase,
    /// Player whose turn it is.
    pub current_player: PlayerNumber,
    /// Number of players, once dealt.
    pub player_count: Option<PlayerCount>,
    /// True while the current player is looking.
    pub word_visible: bool,
    /// True when the current player is the last to look.
    pub is_last_player: bool,
    /// Pending validation message.
    pub error_message: Option<String>,
}

/// Drives one table's game from setup to results.
///
/// Every transition is all-or-nothing: on error the session is exactly
/// as it was before the call.
#[derive(Debug, Clone)]
pub struct GameController<S = Dice> {
    session: GameSession,
    dice: S,
    error_message: Option<String>,
}

impl GameController<Dice> {
    /// Creates a controller seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_dice(Dice::from_os_rng())
    }
}

impl Default for GameController<Dice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> GameController<S> {
    /// Creates a controller that draws with the given source.
    pub fn with_dice(dice: S) -> Self {
        Self {
            session: GameSession::new(),
            dice,
            error_message: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Observable state
    // ─────────────────────────────────────────────────────────

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> PlayerNumber {
        self.session.current_player()
    }

    /// Returns the number of players, once dealt.
    pub fn player_count(&self) -> Option<PlayerCount> {
        self.session.player_count()
    }

    /// Returns true only while a player is looking at their role.
    pub fn word_visible(&self) -> bool {
        self.session.word_visible()
    }

    /// Returns true if the current player is the last to look.
    pub fn is_last_player(&self) -> bool {
        self.session.is_last_player()
    }

    /// Returns the pending validation message.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns a snapshot of everything safe to show the whole table.
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase(),
            current_player: self.current_player(),
            player_count: self.player_count(),
            word_visible: self.word_visible(),
            is_last_player: self.is_last_player(),
            error_message: self.error_message.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Confidential state
    // ─────────────────────────────────────────────────────────

    /// Returns a player's role.
    ///
    /// Answers only from the revealing phase onward. The caller decides
    /// who is entitled to see it: the current player while revealing, or
    /// the whole table once complete.
    pub fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        self.session.role_for(player)
    }

    /// Returns the role of the player currently looking.
    pub fn current_role(&self) -> Option<Role<'_>> {
        self.session.current_role()
    }

    /// Returns the word and imposter once the game is complete.
    pub fn results(&self) -> Option<GameResults<'_>> {
        self.session.results()
    }

    // ─────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────

    /// Validates the setup form, deals roles, and hands the device to
    /// player 1.
    ///
    /// # Errors
    ///
    /// [`GameError::Validation`] if the form is rejected; the message is
    /// also kept in [`error_message`](Self::error_message).
    /// [`GameError::OutOfPhase`] outside setup.
    #[instrument(skip(self, secret_word))]
    pub fn start_game(&mut self, player_count: &str, secret_word: &str) -> Result<Phase, GameError> {
        if self.phase() != Phase::Setup {
            return Err(self.out_of_phase(Action::StartGame));
        }

        let (player_count, secret_word) = match Self::validate(player_count, secret_word) {
            Ok(valid) => valid,
            Err(err) => {
                info!(error = %err, "Setup rejected");
                self.error_message = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.step(Action::StartGame, move |session, dice| match session {
            GameSession::Setup(setup) => Ok(setup.start(player_count, secret_word, dice).into()),
            other => Err(other),
        })?;
        self.error_message = None;
        Ok(self.phase())
    }

    /// Shows the current player their role.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfPhase`] unless the device is awaiting a reveal.
    #[instrument(skip(self))]
    pub fn reveal_word(&mut self) -> Result<Phase, GameError> {
        self.step(Action::RevealWord, |session, _| match session {
            GameSession::AwaitingReveal(s) => Ok(s.reveal().into()),
            other => Err(other),
        })
    }

    /// Hides the role and moves on to the next player, or to discussion
    /// after the last one.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfPhase`] unless a role is being revealed.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        self.step(Action::Advance, |session, _| match session {
            GameSession::Revealing(s) => Ok(s.advance().into()),
            other => Err(other),
        })
    }

    /// Reveals the word and the imposter to the whole table.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfPhase`] unless every player has looked.
    #[instrument(skip(self))]
    pub fn reveal_results(&mut self) -> Result<Phase, GameError> {
        self.step(Action::RevealResults, |session, _| match session {
            GameSession::PendingFinish(s) => Ok(s.reveal_results().into()),
            other => Err(other),
        })
    }

    /// Discards the finished game and returns to a fresh setup.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfPhase`] unless the game is complete.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<Phase, GameError> {
        self.step(Action::Reset, |session, _| match session {
            GameSession::Complete(s) => Ok(s.reset().into()),
            other => Err(other),
        })?;
        self.error_message = None;
        Ok(self.phase())
    }

    /// Acknowledges the pending validation message.
    #[instrument(skip(self))]
    pub fn dismiss_error(&mut self) {
        if self.error_message.take().is_some() {
            debug!("Error dismissed");
        }
    }

    /// Picks a suggested secret word with this controller's dice.
    #[instrument(skip(self, suggestions))]
    pub fn suggest_word<'w>(&mut self, suggestions: &'w WordSuggestions) -> &'w str {
        debug!("Suggesting a word");
        suggestions.pick(&mut self.dice)
    }

    // ─────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────

    fn validate(
        player_count: &str,
        secret_word: &str,
    ) -> Result<(PlayerCount, SecretWord), ValidationError> {
        let player_count = PlayerCount::parse(player_count)?;
        let secret_word = SecretWord::new(secret_word)?;
        Ok((player_count, secret_word))
    }

    /// Applies a phase transition. `apply` hands the session back untouched
    /// when the action does not exist in its phase.
    fn step<F>(&mut self, action: Action, apply: F) -> Result<Phase, GameError>
    where
        F: FnOnce(GameSession, &mut S) -> Result<GameSession, GameSession>,
    {
        let session = std::mem::take(&mut self.session);
        match apply(session, &mut self.dice) {
            Ok(next) => {
                self.session = next;
                self.assert_invariants();
                debug!(%action, phase = %self.phase(), "Transition applied");
                Ok(self.phase())
            }
            Err(unchanged) => {
                self.session = unchanged;
                Err(self.out_of_phase(action))
            }
        }
    }

    fn out_of_phase(&self, action: Action) -> GameError {
        let phase = self.phase();
        warn!(%action, %phase, "Action not available in this phase");
        GameError::OutOfPhase { action, phase }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(&self.session) {
            error!(?violations, "Session invariants violated");
            debug_assert!(false, "Session invariants violated: {:?}", violations);
        }
    }
}
