//! Game creation: shuffle, deal, pick a starting card, compute the
//! opening turn state.
//!
//! The dealer runs exactly once per game. Its configuration follows the
//! builder pattern; `with_deck` injects an unshuffled deck so tests and
//! simulations can script every card.

use im::{HashMap, Vector};

use crate::cards::{build_deck, AttackKind, Card, DECK_SIZE};
use crate::core::{EngineError, GameRng, Player, StateFault};
use crate::state::{CurrentColor, Game, NextAction};

/// Hand size dealt to each player unless overridden.
pub const DEFAULT_CARDS_PER_PERSON: usize = 7;

/// Cards held back for the starting flip: worst case all four draw-fours
/// surface before a valid starting card does.
const STARTING_CARD_RESERVE: usize = 5;

/// Builder-style deal configuration.
#[derive(Clone, Debug)]
pub struct Dealer {
    cards_per_person: usize,
    deck: Option<Vector<Card>>,
}

impl Default for Dealer {
    fn default() -> Self {
        Self {
            cards_per_person: DEFAULT_CARDS_PER_PERSON,
            deck: None,
        }
    }
}

impl Dealer {
    /// A dealer with the default hand size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the hand size dealt to each player.
    #[must_use]
    pub fn cards_per_person(mut self, cards_per_person: usize) -> Self {
        self.cards_per_person = cards_per_person;
        self
    }

    /// Inject a pre-arranged deck instead of shuffling a fresh one.
    ///
    /// The deck is used exactly as given: hands come off the tail, one
    /// card per player per round, then the starting card, and whatever
    /// remains is the draw pile (front drawn first). Deterministic deal
    /// scripting for tests.
    #[must_use]
    pub fn with_deck(mut self, deck: Vector<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Deal a fresh game.
    ///
    /// Fails with [`StateFault::InsufficientCards`] when the players
    /// cannot be served out of a 108-card deck with a starting card to
    /// spare, and [`StateFault::NoPlayers`] for an empty player list.
    pub fn deal(
        &self,
        id: impl Into<String>,
        players: &[Player],
        rng: &mut GameRng,
    ) -> Result<Game, EngineError> {
        if players.is_empty() {
            return Err(StateFault::NoPlayers.into());
        }
        let short_deck = StateFault::InsufficientCards {
            players: players.len(),
            cards_per_person: self.cards_per_person,
            deck_size: DECK_SIZE,
        };
        if players.len() * self.cards_per_person + STARTING_CARD_RESERVE > DECK_SIZE {
            return Err(short_deck.into());
        }

        let mut deck = match &self.deck {
            Some(deck) => deck.clone(),
            None => rng.shuffle_vector(build_deck()),
        };

        let mut player_hands: HashMap<_, Vector<Card>> = players
            .iter()
            .map(|player| (player.id.clone(), Vector::new()))
            .collect();
        for _ in 0..self.cards_per_person {
            for player in players {
                let card = deck.pop_back().ok_or_else(|| short_deck.clone())?;
                player_hands[&player.id].push_back(card);
            }
        }

        // Draw-fours cannot start the game: set them aside until a valid
        // card surfaces, then shuffle them back into the remainder.
        let mut set_aside: Vector<Card> = Vector::new();
        let starting_card = loop {
            let card = deck.pop_back().ok_or_else(|| short_deck.clone())?;
            if card.is_draw_four() {
                set_aside.push_back(card);
            } else {
                break card;
            }
        };
        if !set_aside.is_empty() {
            deck.append(set_aside);
            deck = rng.shuffle_vector(deck);
        }

        let starting_player_idx = starting_idx(players, &starting_card);
        let starting_action = starting_action(players, &starting_card);
        let current_color = match starting_card.color() {
            Some(color) => CurrentColor::Color(color),
            None => CurrentColor::Any,
        };
        let reverse_direction = starting_card.is_reverse();

        Ok(Game {
            id: id.into(),
            players: players.iter().cloned().collect(),
            player_hands,
            active_player_idx: starting_player_idx,
            current_color,
            discard: Vector::unit(starting_card),
            draw_pile: deck,
            reverse_direction,
            next_actions: Vector::unit(starting_action),
        })
    }
}

/// Which player index opens the game, given the starting card.
fn starting_idx(players: &[Player], card: &Card) -> usize {
    // Two-player games treat any starting attack as already resolved
    // against player 0: the other player opens.
    if players.len() == 2 && card.is_attack() {
        return 1;
    }
    match card.attack() {
        Some(AttackKind::Reverse) => players.len() - 1,
        Some(AttackKind::Skip) => 1 % players.len(),
        _ => 0,
    }
}

/// The opening obligation, given the starting card.
fn starting_action(players: &[Player], card: &Card) -> NextAction {
    if card.attack() == Some(AttackKind::DrawTwo) {
        return NextAction::DrawTwo {
            player: players[0].id.clone(),
            cards_left: 2,
        };
    }
    NextAction::Play {
        player: players[starting_idx(players, card)].id.clone(),
    }
}
