//! Canonical deck construction.
//!
//! The full deck is a fixed 108-card multiset: per color one 0, two each
//! of 1-9 and two of each attack kind, plus four wild and four draw-four.
//! Ids are deterministic and collision-free, so two builds of the deck
//! name exactly the same cards.

use im::Vector;

use super::card::{AttackKind, Card, CardId, Color};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 108;

/// Build the full 108-card deck in canonical (unshuffled) order.
#[must_use]
pub fn build_deck() -> Vector<Card> {
    let mut cards = Vector::new();
    for color in Color::ALL {
        for number in 0..=9u8 {
            cards.push_back(Card::Number {
                id: CardId::new(format!("number-{number}-{color}-1")),
                color,
                number,
            });
        }
        // only one zero per color
        for number in 1..=9u8 {
            cards.push_back(Card::Number {
                id: CardId::new(format!("number-{number}-{color}-2")),
                color,
                number,
            });
        }
        for attack in AttackKind::ALL {
            for copy in 1..=2 {
                cards.push_back(Card::Attack {
                    id: CardId::new(format!("attack-{attack}-{color}-{copy}")),
                    color,
                    attack,
                });
            }
        }
    }
    for n in 1..=4 {
        cards.push_back(Card::Wild { id: CardId::new(format!("wild-{n}")) });
        cards.push_back(Card::DrawFour { id: CardId::new(format!("draw-four-{n}")) });
    }

    debug_assert_eq!(cards.len(), DECK_SIZE);
    cards
}
