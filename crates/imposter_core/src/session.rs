//! Runtime wrapper over the typestate phases.
//!
//! A presentation layer needs one value it can store and re-render from;
//! `GameSession` holds whichever phase the game is in.

use crate::phases::{GameResults, Phase, Role};
use crate::typestate::{Advance, AwaitingReveal, Complete, Deal, PendingFinish, Revealing, SetupPhase};
use crate::types::{PlayerCount, PlayerNumber};

/// A game in any phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSession {
    /// Entering player count and word.
    Setup(SetupPhase),
    /// Passing the device.
    AwaitingReveal(AwaitingReveal),
    /// A player is looking.
    Revealing(Revealing),
    /// Discussion.
    PendingFinish(PendingFinish),
    /// Results shown.
    Complete(Complete),
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SetupPhase> for GameSession {
    fn from(phase: SetupPhase) -> Self {
        Self::Setup(phase)
    }
}

impl From<AwaitingReveal> for GameSession {
    fn from(phase: AwaitingReveal) -> Self {
        Self::AwaitingReveal(phase)
    }
}

impl From<Revealing> for GameSession {
    fn from(phase: Revealing) -> Self {
        Self::Revealing(phase)
    }
}

impl From<PendingFinish> for GameSession {
    fn from(phase: PendingFinish) -> Self {
        Self::PendingFinish(phase)
    }
}

impl From<Complete> for GameSession {
    fn from(phase: Complete) -> Self {
        Self::Complete(phase)
    }
}

impl From<Advance> for GameSession {
    fn from(advance: Advance) -> Self {
        match advance {
            Advance::NextPlayer(next) => next.into(),
            Advance::AllRevealed(pending) => pending.into(),
        }
    }
}

impl GameSession {
    /// Creates a session in setup.
    pub fn new() -> Self {
        Self::Setup(SetupPhase::new())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        match self {
            Self::Setup(_) => Phase::Setup,
            Self::AwaitingReveal(_) => Phase::AwaitingReveal,
            Self::Revealing(_) => Phase::Revealing,
            Self::PendingFinish(_) => Phase::PendingFinish,
            Self::Complete(_) => Phase::Complete,
        }
    }

    /// Returns the player whose turn it is.
    ///
    /// Player 1 during setup; the last player once everyone has looked.
    pub fn current_player(&self) -> PlayerNumber {
        match self {
            Self::Setup(_) => PlayerNumber::FIRST,
            Self::AwaitingReveal(s) => s.current_player(),
            Self::Revealing(s) => s.current_player(),
            Self::PendingFinish(s) => s.player_count().last(),
            Self::Complete(s) => s.player_count().last(),
        }
    }

    /// Returns the number of players, once dealt.
    pub fn player_count(&self) -> Option<PlayerCount> {
        self.deal().map(Deal::player_count)
    }

    /// Returns true only while a player is looking at their role.
    pub fn word_visible(&self) -> bool {
        matches!(self, Self::Revealing(_))
    }

    /// Returns true if the current player is the last to look.
    pub fn is_last_player(&self) -> bool {
        match self {
            Self::AwaitingReveal(s) => s.is_last_player(),
            Self::Revealing(s) => s.is_last_player(),
            _ => false,
        }
    }

    /// Returns a player's role from the revealing phase onward.
    pub fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        match self {
            Self::Revealing(s) => s.role_for(player),
            Self::PendingFinish(s) => s.role_for(player),
            Self::Complete(s) => s.role_for(player),
            Self::Setup(_) | Self::AwaitingReveal(_) => None,
        }
    }

    /// Returns the role of the player currently looking.
    pub fn current_role(&self) -> Option<Role<'_>> {
        match self {
            Self::Revealing(s) => Some(s.role()),
            _ => None,
        }
    }

    /// Returns the results once the game is complete.
    pub fn results(&self) -> Option<GameResults<'_>> {
        match self {
            Self::Complete(s) => Some(s.results()),
            _ => None,
        }
    }

    pub(crate) fn deal(&self) -> Option<&Deal> {
        match self {
            Self::Setup(_) => None,
            Self::AwaitingReveal(s) => Some(&s.deal),
            Self::Revealing(s) => Some(&s.deal),
            Self::PendingFinish(s) => Some(&s.deal),
            Self::Complete(s) => Some(&s.deal),
        }
    }
}
