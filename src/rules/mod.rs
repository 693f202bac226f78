//! The rules proper: dealing, legality, and the turn/action engine.
//!
//! ## Layout
//!
//! - `dealer`: one-shot game creation (shuffle, deal, starting card)
//! - `legality`: pure can-play / can-draw predicates
//! - `engine`: the `play_card` / `choose_color` / `draw_card` transitions
//!
//! The transitions live as methods on [`Game`](crate::state::Game); each
//! consumes a snapshot by reference and returns a fresh one.

pub mod dealer;
pub mod engine;
pub mod legality;

pub use dealer::{Dealer, DEFAULT_CARDS_PER_PERSON};
pub use legality::can_play_card;
