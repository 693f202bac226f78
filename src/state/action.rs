//! The pending-obligation queue.
//!
//! Whose move it is, and what kind of move, is encoded entirely as a
//! queue of `NextAction` entries, each tagged with the responsible
//! player. Most of the time the queue holds a single entry; a draw-four
//! play queues two at once (the actor's color choice and the victim's
//! mandatory draws).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A pending obligation gating the next move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum NextAction {
    /// The player must play a card, or draw if nothing is playable.
    Play { player: PlayerId },
    /// The player owes mandatory draws from a draw-two.
    #[serde(rename_all = "camelCase")]
    DrawTwo { player: PlayerId, cards_left: u8 },
    /// The player owes mandatory draws from a draw-four.
    #[serde(rename_all = "camelCase")]
    DrawFour { player: PlayerId, cards_left: u8 },
    /// The player just played a wild or draw-four and must pick a color.
    ChooseColor { player: PlayerId },
    /// Terminal: the player emptied their hand and won.
    Finished { player: PlayerId },
}

impl NextAction {
    /// The player responsible for this obligation.
    #[must_use]
    pub fn player(&self) -> &PlayerId {
        match self {
            NextAction::Play { player }
            | NextAction::DrawTwo { player, .. }
            | NextAction::DrawFour { player, .. }
            | NextAction::ChooseColor { player }
            | NextAction::Finished { player } => player,
        }
    }

    /// Can this obligation be discharged by drawing a card?
    ///
    /// Color choices and the terminal marker never permit a draw.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        matches!(
            self,
            NextAction::Play { .. } | NextAction::DrawTwo { .. } | NextAction::DrawFour { .. }
        )
    }
}
