//! Card and deck model.
//!
//! ## Key Types
//!
//! - `Color` / `AttackKind`: the fixed play vocabulary
//! - `CardId`: stable identity distinguishing duplicate cards
//! - `Card`: tagged card variants (number, attack, wild, draw-four)
//! - `build_deck`: the canonical 108-card multiset

pub mod card;
pub mod deck;

pub use card::{AttackKind, Card, CardId, Color};
pub use deck::{build_deck, DECK_SIZE};
