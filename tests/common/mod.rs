//! Shared helpers for the integration suites: seat construction,
//! scripted decks, and the conservation check.
#![allow(dead_code)] // each suite uses a different subset

use dumbuno::{
    build_deck, AttackKind, Card, CardId, Color, Dealer, Game, GameRng, NextAction, Player,
    PlayerId, DECK_SIZE,
};

/// Seats `p-0` .. `p-{n-1}`.
pub fn players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("p-{i}"), format!("Player {i}")))
        .collect()
}

pub fn pid(i: usize) -> PlayerId {
    PlayerId::new(format!("p-{i}"))
}

/// Remove the first card matching `pred` from the pool.
pub fn take(pool: &mut Vec<Card>, pred: impl Fn(&Card) -> bool) -> Card {
    let pos = pool
        .iter()
        .position(pred)
        .expect("requested card available in pool");
    pool.remove(pos)
}

pub fn is_number(color: Color, number: u8) -> impl Fn(&Card) -> bool {
    move |c| c.color() == Some(color) && c.number() == Some(number)
}

pub fn is_attack(color: Color, kind: AttackKind) -> impl Fn(&Card) -> bool {
    move |c| c.color() == Some(color) && c.attack() == Some(kind)
}

pub fn is_wild() -> impl Fn(&Card) -> bool {
    |c| matches!(c, Card::Wild { .. })
}

pub fn is_draw_four() -> impl Fn(&Card) -> bool {
    Card::is_draw_four
}

/// Assemble a deck that deals `hands` in seat order, flips `starting`,
/// and leaves `pool` as the draw pile (front drawn first).
///
/// The dealer pops hands off the tail one card per seat per round, then
/// pops the starting card, so the tail is laid out in reverse deal order.
pub fn scripted_deck(pool: Vec<Card>, hands: &[Vec<Card>], starting: Card) -> im::Vector<Card> {
    let cards_per_person = hands[0].len();
    for hand in hands {
        assert_eq!(hand.len(), cards_per_person, "ragged scripted hands");
    }

    let mut deal_order = Vec::new();
    for round in 0..cards_per_person {
        for hand in hands {
            deal_order.push(hand[round].clone());
        }
    }
    deal_order.push(starting);

    let mut deck = pool;
    deck.extend(deal_order.into_iter().rev());
    deck.into_iter().collect()
}

/// Deal a fully scripted game.
pub fn scripted_game(
    id: &str,
    seats: &[Player],
    hands: &[Vec<Card>],
    starting: Card,
    pool: Vec<Card>,
) -> Game {
    let cards_per_person = hands[0].len();
    Dealer::new()
        .cards_per_person(cards_per_person)
        .with_deck(scripted_deck(pool, hands, starting))
        .deal(id, seats, &mut GameRng::new(0))
        .expect("scripted deal")
}

/// Assert the 108-card conservation law: every deck card appears exactly
/// once across hands, discard and draw pile.
pub fn assert_full_deck(game: &Game) {
    assert_eq!(game.card_count(), DECK_SIZE, "card count drifted");

    let mut census: Vec<CardId> = game.card_census().into_iter().collect();
    census.sort();
    let mut expected: Vec<CardId> = build_deck().iter().map(|c| c.id().clone()).collect();
    expected.sort();
    assert_eq!(census, expected, "card census drifted");
}

/// Drive a game forward with a fixed, deterministic policy: resolve any
/// pending color choice first, then play the first playable card, else
/// draw. Stops on win, on draw-pile exhaustion, or after `max_steps`.
pub fn drive(mut game: Game, rng: &mut GameRng, max_steps: usize) -> Game {
    use dumbuno::{EngineError, StateFault};

    let colors = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
    for step in 0..max_steps {
        if game.is_finished() {
            break;
        }

        let pending_choice = game.next_actions().iter().find_map(|a| match a {
            NextAction::ChooseColor { player } => Some(player.clone()),
            _ => None,
        });
        if let Some(player) = pending_choice {
            game = game
                .choose_color(&player, colors[step % colors.len()])
                .expect("scripted color choice");
            continue;
        }

        let head = game.head_action().expect("queue never empty").clone();
        let player = head.player().clone();
        let first_playable = game.playable_cards(&player).first().map(|c| c.id().clone());
        let wants_play = matches!(head, NextAction::Play { .. }) && first_playable.is_some();

        if wants_play {
            let card_id = first_playable.expect("playable card present");
            game = game.play_card(&card_id).expect("scripted play");
        } else {
            match game.draw_card(&player, rng) {
                Ok(next) => game = next,
                Err(EngineError::Fault(StateFault::DrawPileExhausted)) => break,
                Err(err) => panic!("unexpected draw failure: {err}"),
            }
        }
    }
    game
}
