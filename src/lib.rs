//! # dumbuno
//!
//! The deterministic rules engine for Dumbuno, a multiplayer Uno variant.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation maps `(state, intent)` to a
//!    complete successor state or an error. No I/O, no rendering, no
//!    network; rendering and persistence are external collaborators.
//!
//! 2. **Whole-state replacement**: `Game` uses `im` persistent
//!    collections, so each transition returns an independent snapshot in
//!    O(1) per unchanged pile and nothing ever partially applies.
//!
//! 3. **Injected randomness**: shuffling goes through [`GameRng`], a
//!    seeded ChaCha8 generator passed in by the caller. A fixed seed
//!    reproduces an entire game.
//!
//! ## Integration Contract
//!
//! The engine is single-threaded and synchronous. Multiple clients
//! racing on the same game must be serialized by the storage layer —
//! compare-and-swap on the serialized document or a single writer per
//! game id. Given a consistent snapshot and a validated intent, the
//! engine produces exactly one deterministic successor.
//!
//! Failures split into [`Rejection`] (the user tried an illegal move;
//! re-prompt) and [`StateFault`] (the caller and engine disagree about
//! the state; do not retry blindly). See [`core::error`].
//!
//! ## Modules
//!
//! - `cards`: card vocabulary and the canonical 108-card deck
//! - `core`: players, deterministic RNG, error taxonomy
//! - `state`: the serializable `Game` document and action queue
//! - `rules`: dealer, legality predicates, turn/action transitions

pub mod cards;
pub mod core;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{build_deck, AttackKind, Card, CardId, Color, DECK_SIZE};
pub use crate::core::{
    EngineError, GameRng, GameRngState, Player, PlayerId, Rejection, StateFault,
};
pub use crate::rules::{can_play_card, Dealer, DEFAULT_CARDS_PER_PERSON};
pub use crate::state::{CurrentColor, Game, NextAction};
