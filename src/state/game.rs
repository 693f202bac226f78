//! The aggregate game document.
//!
//! `Game` is the whole state: players, hands, piles, turn pointer, color
//! constraint and the action queue. It is fully serializable (camelCase
//! fields, kebab-case tags, matching the shared-store document format)
//! and is replaced wholesale by every transition — the engine never hands
//! out a partially updated state.
//!
//! ## Invariants
//!
//! After dealing and after every transition:
//! - every card of the 108-card deck appears exactly once across the
//!   discard, the draw pile and the hands;
//! - the discard is never empty (its last card is the base card);
//! - the action queue is never empty, and is exactly `[finished]` once a
//!   player has won;
//! - `active_player_idx` indexes a valid player.

use im::{HashMap, Vector};
use rustc_hash::FxHashSet;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::action::NextAction;
use crate::cards::{Card, CardId, Color};
use crate::core::{Player, PlayerId};

/// The color a play must currently match.
///
/// `Any` is the window between a wild/draw-four play and the matching
/// choose-color: no color constraint applies until the choice lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentColor {
    /// A concrete color constraint.
    Color(Color),
    /// No constraint chosen yet.
    Any,
}

impl CurrentColor {
    /// Does a card of `color` satisfy this constraint?
    #[must_use]
    pub fn matches(self, color: Color) -> bool {
        match self {
            CurrentColor::Color(c) => c == color,
            CurrentColor::Any => true,
        }
    }

    /// Is the constraint still unresolved?
    #[must_use]
    pub fn is_any(self) -> bool {
        matches!(self, CurrentColor::Any)
    }
}

impl From<Color> for CurrentColor {
    fn from(color: Color) -> Self {
        CurrentColor::Color(color)
    }
}

// Wire format is the bare color name or "any", not a tagged enum.
impl Serialize for CurrentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentColor::Color(color) => serializer.serialize_str(color.as_str()),
            CurrentColor::Any => serializer.serialize_str("any"),
        }
    }
}

impl<'de> Deserialize<'de> for CurrentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.as_str() {
            "red" => Ok(CurrentColor::Color(Color::Red)),
            "yellow" => Ok(CurrentColor::Color(Color::Yellow)),
            "green" => Ok(CurrentColor::Color(Color::Green)),
            "blue" => Ok(CurrentColor::Color(Color::Blue)),
            "any" => Ok(CurrentColor::Any),
            other => Err(D::Error::unknown_variant(
                other,
                &["red", "yellow", "green", "blue", "any"],
            )),
        }
    }
}

/// Complete game state.
///
/// Uses `im` persistent collections, so cloning into the next state is
/// O(1) per unchanged pile and every snapshot stays independent.
///
/// All players' hands are visible in the document; concealment is a UI
/// courtesy, not an engine guarantee. Serializing writes per game id is
/// the storage layer's contract (single writer or compare-and-swap); the
/// engine only promises one deterministic successor per snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub(crate) id: String,
    /// Ordered: list position is turn order, fixed at deal time.
    pub(crate) players: Vector<Player>,
    /// Hand order is visual only; per-card identity is what matters.
    pub(crate) player_hands: HashMap<PlayerId, Vector<Card>>,
    pub(crate) active_player_idx: usize,
    pub(crate) current_color: CurrentColor,
    /// Last element is the base card.
    pub(crate) discard: Vector<Card>,
    /// Front element is the next card to draw.
    pub(crate) draw_pile: Vector<Card>,
    pub(crate) reverse_direction: bool,
    pub(crate) next_actions: Vector<NextAction>,
}

impl Game {
    /// The game id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The players in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, id: &PlayerId) -> Option<&Vector<Card>> {
        self.player_hands.get(id)
    }

    /// Index of the turn pointer into the player list.
    #[must_use]
    pub fn active_player_idx(&self) -> usize {
        self.active_player_idx
    }

    /// The player the turn pointer rests on.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active_player_idx]
    }

    /// The color constraint in force.
    #[must_use]
    pub fn current_color(&self) -> CurrentColor {
        self.current_color
    }

    /// The discard pile; its last card is the base card.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// The top of the discard: what the next play must follow.
    #[must_use]
    pub fn base_card(&self) -> Option<&Card> {
        self.discard.back()
    }

    /// The draw pile; the front card is drawn next.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    /// Is turn order currently flipped?
    #[must_use]
    pub fn reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    /// The pending obligation queue.
    #[must_use]
    pub fn next_actions(&self) -> &Vector<NextAction> {
        &self.next_actions
    }

    /// The obligation at the head of the queue.
    #[must_use]
    pub fn head_action(&self) -> Option<&NextAction> {
        self.next_actions.front()
    }

    /// Has a player won?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.head_action(), Some(NextAction::Finished { .. }))
    }

    /// The winner, once the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        match self.head_action() {
            Some(NextAction::Finished { player }) => Some(player),
            _ => None,
        }
    }

    /// Every card id tracked by this state, across the discard, the draw
    /// pile and all hands.
    ///
    /// A healthy state's census is exactly the full deck; the integrity
    /// tests lean on this after every transition.
    #[must_use]
    pub fn card_census(&self) -> FxHashSet<CardId> {
        let mut census = FxHashSet::default();
        census.extend(self.discard.iter().map(|c| c.id().clone()));
        census.extend(self.draw_pile.iter().map(|c| c.id().clone()));
        for hand in self.player_hands.values() {
            census.extend(hand.iter().map(|c| c.id().clone()));
        }
        census
    }

    /// Total number of cards tracked, counting duplicates.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.discard.len()
            + self.draw_pile.len()
            + self.player_hands.values().map(Vector::len).sum::<usize>()
    }
}
