//! The card vocabulary: colors, attack kinds, and the four card variants.
//!
//! Cards are immutable values. Two cards with identical play semantics
//! (say, the two red 5s) are still distinct entities with distinct ids,
//! which is what lets hands, piles and snapshots track them individually.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four suit colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// All colors in canonical deck order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// The wire-format name of this color.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three colored attack cards: each alters turn order or imposes a
/// mandatory draw on another player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttackKind {
    Skip,
    Reverse,
    DrawTwo,
}

impl AttackKind {
    /// All attack kinds in canonical deck order.
    pub const ALL: [AttackKind; 3] = [AttackKind::Skip, AttackKind::Reverse, AttackKind::DrawTwo];

    /// The wire-format name of this attack kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttackKind::Skip => "skip",
            AttackKind::Reverse => "reverse",
            AttackKind::DrawTwo => "draw-two",
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable card identity, unique across the whole deck.
///
/// Ids use the document format of the shared store, e.g. `number-5-red-1`
/// or `draw-four-3`, so a serialized snapshot names the same cards as the
/// deck builder produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Wrap an identity string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A playable card.
///
/// Wild and draw-four cards are colorless: the color constraint they
/// impose is decided by a follow-up choose-color action, never by a field
/// on the card itself. Consumers must go through [`Card::color`] rather
/// than assume a color exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Card {
    /// A colored card numbered 0-9.
    Number { id: CardId, color: Color, number: u8 },
    /// A colored skip / reverse / draw-two.
    Attack { id: CardId, color: Color, attack: AttackKind },
    /// Colorless; the player picks the next active color.
    Wild { id: CardId },
    /// Colorless; picks the color and forces four draws on the victim.
    DrawFour { id: CardId },
}

impl Card {
    /// The card's stable identity.
    #[must_use]
    pub fn id(&self) -> &CardId {
        match self {
            Card::Number { id, .. }
            | Card::Attack { id, .. }
            | Card::Wild { id }
            | Card::DrawFour { id } => id,
        }
    }

    /// The card's color. `None` for the colorless wild and draw-four.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Number { color, .. } | Card::Attack { color, .. } => Some(*color),
            Card::Wild { .. } | Card::DrawFour { .. } => None,
        }
    }

    /// The numeric value for number cards.
    #[must_use]
    pub fn number(&self) -> Option<u8> {
        match self {
            Card::Number { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// The attack kind for attack cards.
    #[must_use]
    pub fn attack(&self) -> Option<AttackKind> {
        match self {
            Card::Attack { attack, .. } => Some(*attack),
            _ => None,
        }
    }

    /// Is this a colored attack card (skip, reverse or draw-two)?
    #[must_use]
    pub fn is_attack(&self) -> bool {
        matches!(self, Card::Attack { .. })
    }

    /// Is this specifically a reverse?
    #[must_use]
    pub fn is_reverse(&self) -> bool {
        self.attack() == Some(AttackKind::Reverse)
    }

    /// Is this a draw-four?
    #[must_use]
    pub fn is_draw_four(&self) -> bool {
        matches!(self, Card::DrawFour { .. })
    }
}
