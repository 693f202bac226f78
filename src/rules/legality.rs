//! Pure legality predicates.
//!
//! These never change state; the UI consults them before submitting an
//! intent, and the draw transition re-checks them as its gate.

use crate::cards::Card;
use crate::core::PlayerId;
use crate::state::{CurrentColor, Game, NextAction};

/// Can `card` legally land on `base_card` under `current_color`?
///
/// Wild and draw-four are always playable. A colored card is playable
/// when it matches the active color (or none has been chosen yet),
/// when both cards are attacks of the same kind, or when both are
/// numbers of the same value. The color branch only ever applies to
/// colored cards; the colorless variants return early.
#[must_use]
pub fn can_play_card(card: &Card, base_card: &Card, current_color: CurrentColor) -> bool {
    if matches!(card, Card::Wild { .. } | Card::DrawFour { .. }) {
        return true;
    }
    if let Some(color) = card.color() {
        if current_color.matches(color) {
            return true;
        }
    }
    match (card, base_card) {
        (Card::Attack { attack: a, .. }, Card::Attack { attack: b, .. }) => a == b,
        (Card::Number { number: a, .. }, Card::Number { number: b, .. }) => a == b,
        _ => false,
    }
}

impl Game {
    /// The cards in `player`'s hand playable on the current base card.
    #[must_use]
    pub fn playable_cards(&self, player: &PlayerId) -> Vec<&Card> {
        let (Some(base), Some(hand)) = (self.base_card(), self.hand(player)) else {
            return Vec::new();
        };
        hand.iter()
            .filter(|card| can_play_card(card, base, self.current_color()))
            .collect()
    }

    /// May `player` draw a card right now?
    ///
    /// Only the owner of the head obligation may draw. Mandatory draws
    /// (draw-two / draw-four) always permit it; a `play` obligation
    /// permits it only when no card in hand is playable — drawing is the
    /// forced-pass alternative, never a voluntary move while a playable
    /// card is held.
    #[must_use]
    pub fn can_draw_card(&self, player: &PlayerId) -> bool {
        let Some(action) = self.head_action() else {
            return false;
        };
        if action.player() != player {
            return false;
        }
        match action {
            NextAction::ChooseColor { .. } | NextAction::Finished { .. } => false,
            NextAction::DrawTwo { .. } | NextAction::DrawFour { .. } => true,
            NextAction::Play { .. } => self.playable_cards(player).is_empty(),
        }
    }
}
