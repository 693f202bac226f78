//! Game state: the aggregate document and the pending-action queue.
//!
//! ## Key Types
//!
//! - `Game`: the serializable aggregate root, wholesale-replaced per move
//! - `CurrentColor`: the active color constraint, or `any` while a wild
//!   awaits its color choice
//! - `NextAction`: ordered pending obligations gating whose move is next

pub mod action;
pub mod game;

pub use action::NextAction;
pub use game::{CurrentColor, Game};
