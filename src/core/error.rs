//! Error taxonomy for the rules engine.
//!
//! Failures come in two classes with different audiences:
//!
//! - [`Rejection`]: the attempted intent is illegal in the current state.
//!   The caller re-prompts the user; nothing changed.
//! - [`StateFault`]: a precondition the caller was responsible for has
//!   been violated (card not in hand, no matching pending action). These
//!   indicate caller/engine desynchronization, not a normal game
//!   situation, and must not be surfaced as a benign decline.
//!
//! Every transition either returns a complete new state or one of these;
//! there is no partial application.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// A declined intent. Carries a short human-readable reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("player {0} cannot draw a card right now")]
    CannotDraw(PlayerId),
    #[error("game is already finished")]
    GameFinished,
}

/// A data-integrity fault: the caller and the engine disagree about the
/// state. Should never occur when the legality checker is consulted first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateFault {
    #[error("player {player} does not hold card {card}")]
    CardNotInHand { player: PlayerId, card: CardId },
    #[error("no pending choose-color action for player {0}")]
    NoPendingChooseColor(PlayerId),
    #[error("no drawable action for player {0}")]
    NoDrawableAction(PlayerId),
    #[error("cannot deal a game with no players")]
    NoPlayers,
    #[error("{players} players at {cards_per_person} cards each do not fit a {deck_size}-card deck")]
    InsufficientCards {
        players: usize,
        cards_per_person: usize,
        deck_size: usize,
    },
    #[error("draw pile and discard pile are both exhausted")]
    DrawPileExhausted,
}

/// Any failed transition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// User-actionable: re-prompt, state unchanged.
    #[error("rejected: {0}")]
    Rejected(#[from] Rejection),
    /// Internal: caller/engine desynchronization.
    #[error("state fault: {0}")]
    Fault(#[from] StateFault),
}

impl EngineError {
    /// Is this a user-actionable rejection (as opposed to a fault)?
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, EngineError::Rejected(_))
    }
}
