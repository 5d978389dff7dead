//! Phase-specific typestate structs for an imposter word game.
//!
//! Each phase is its own type holding only the data that exists in that
//! phase. An `AwaitingReveal` has no way to hand out the secret word, and a
//! `Complete` game always has results rather than `Option<Results>`.

use crate::dice::RandomSource;
use crate::phases::{GameResults, Role};
use crate::types::{PlayerCount, PlayerNumber, SecretWord};
use std::fmt;
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Deal
// ─────────────────────────────────────────────────────────────

/// The fixed facts of one game: table size, word, and imposter.
///
/// Created once when the game starts and carried unchanged through every
/// later phase.
#[derive(Clone, PartialEq, Eq)]
pub struct Deal {
    pub(crate) player_count: PlayerCount,
    pub(crate) secret_word: SecretWord,
    pub(crate) imposter: PlayerNumber,
}

impl Deal {
    /// Draws the imposter uniformly from the table.
    #[instrument(skip(secret_word, dice))]
    fn draw<S: RandomSource + ?Sized>(
        player_count: PlayerCount,
        secret_word: SecretWord,
        dice: &mut S,
    ) -> Self {
        let sides = usize::from(player_count.get());
        // A misbehaving source must not seat the imposter off the table.
        let face = dice.roll(sides).clamp(1, sides);
        let imposter = PlayerNumber(face as u8);
        debug!(%player_count, "Imposter drawn");
        Self {
            player_count,
            secret_word,
            imposter,
        }
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.player_count
    }

    fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        if !self.player_count.contains(player) {
            return None;
        }
        if player == self.imposter {
            Some(Role::Imposter)
        } else {
            Some(Role::Crewmate(self.secret_word.as_str()))
        }
    }
}

impl fmt::Debug for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deal")
            .field("player_count", &self.player_count)
            .field("secret_word", &self.secret_word)
            .field("imposter", &"<hidden>")
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup - nothing dealt yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetupPhase;

impl SetupPhase {
    /// Creates a fresh setup.
    pub fn new() -> Self {
        Self
    }

    /// Deals roles and hands the device to player 1.
    #[instrument(skip(self, secret_word, dice))]
    pub fn start<S: RandomSource + ?Sized>(
        self,
        player_count: PlayerCount,
        secret_word: SecretWord,
        dice: &mut S,
    ) -> AwaitingReveal {
        info!(%player_count, "Game started");
        AwaitingReveal {
            deal: Deal::draw(player_count, secret_word, dice),
            current: PlayerNumber::FIRST,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  AwaitingReveal Phase
// ─────────────────────────────────────────────────────────────

/// The device is being passed; the current player has not looked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwaitingReveal {
    pub(crate) deal: Deal,
    pub(crate) current: PlayerNumber,
}

impl AwaitingReveal {
    /// Returns the player about to look.
    pub fn current_player(&self) -> PlayerNumber {
        self.current
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.deal.player_count
    }

    /// Returns true if the current player is the last to look.
    pub fn is_last_player(&self) -> bool {
        self.current == self.deal.player_count.last()
    }

    /// The current player looks at their role.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn reveal(self) -> Revealing {
        debug!("Revealing role");
        Revealing {
            deal: self.deal,
            current: self.current,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Revealing Phase
// ─────────────────────────────────────────────────────────────

/// The current player is looking at their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealing {
    pub(crate) deal: Deal,
    pub(crate) current: PlayerNumber,
}

/// Result of hiding a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Another player still has to look.
    NextPlayer(AwaitingReveal),
    /// Everyone has looked.
    AllRevealed(PendingFinish),
}

impl Revealing {
    /// Returns the player currently looking.
    pub fn current_player(&self) -> PlayerNumber {
        self.current
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.deal.player_count
    }

    /// Returns true if the current player is the last to look.
    pub fn is_last_player(&self) -> bool {
        self.current == self.deal.player_count.last()
    }

    /// Returns the current player's role.
    pub fn role(&self) -> Role<'_> {
        if self.current == self.deal.imposter {
            Role::Imposter
        } else {
            Role::Crewmate(self.deal.secret_word.as_str())
        }
    }

    /// Returns any player's role; `None` for a seat off the table.
    pub fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        self.deal.role_for(player)
    }

    /// Hides the role and passes the device on.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn advance(self) -> Advance {
        match self.current.next(self.deal.player_count) {
            Some(next) => {
                debug!(next = %next, "Passing to next player");
                Advance::NextPlayer(AwaitingReveal {
                    deal: self.deal,
                    current: next,
                })
            }
            None => {
                info!("All players have seen their role");
                Advance::AllRevealed(PendingFinish { deal: self.deal })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  PendingFinish Phase
// ─────────────────────────────────────────────────────────────

/// Everyone has looked; the table is discussing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFinish {
    pub(crate) deal: Deal,
}

impl PendingFinish {
    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.deal.player_count
    }

    /// Returns any player's role; `None` for a seat off the table.
    pub fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        self.deal.role_for(player)
    }

    /// Reveals the word and the imposter to the whole table.
    #[instrument(skip(self))]
    pub fn reveal_results(self) -> Complete {
        info!("Revealing results");
        Complete { deal: self.deal }
    }
}

// ─────────────────────────────────────────────────────────────
//  Complete Phase
// ─────────────────────────────────────────────────────────────

/// Game over; results are public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complete {
    pub(crate) deal: Deal,
}

impl Complete {
    /// Returns the number of players.
    pub fn player_count(&self) -> PlayerCount {
        self.deal.player_count
    }

    /// Returns the word and the imposter.
    pub fn results(&self) -> GameResults<'_> {
        GameResults::new(self.deal.secret_word.as_str(), self.deal.imposter)
    }

    /// Returns any player's role; `None` for a seat off the table.
    pub fn role_for(&self, player: PlayerNumber) -> Option<Role<'_>> {
        self.deal.role_for(player)
    }

    /// Discards the deal and returns to setup.
    #[instrument(skip(self))]
    pub fn reset(self) -> SetupPhase {
        info!("Game reset");
        SetupPhase::new()
    }
}
