//! Property checks: the shuffler permutes, seeds reproduce, and the
//! conservation law holds for arbitrary deals and driven games.

mod common;

use common::*;
use dumbuno::{build_deck, CardId, Dealer, GameRng, DECK_SIZE};
use proptest::prelude::*;

fn sorted_ids(cards: impl IntoIterator<Item = dumbuno::Card>) -> Vec<CardId> {
    let mut ids: Vec<CardId> = cards.into_iter().map(|c| c.id().clone()).collect();
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let shuffled = rng.shuffle_vector(build_deck());
        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        prop_assert_eq!(sorted_ids(shuffled), sorted_ids(build_deck()));
    }

    #[test]
    fn prop_shuffle_reproduces_per_seed(seed in any::<u64>()) {
        let a = GameRng::new(seed).shuffle_vector(build_deck());
        let b = GameRng::new(seed).shuffle_vector(build_deck());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_deal_invariants(
        seed in any::<u64>(),
        player_count in 2usize..=10,
        cards_per_person in 1usize..=7,
    ) {
        let seats = players(player_count);
        let mut rng = GameRng::new(seed);
        let game = Dealer::new()
            .cards_per_person(cards_per_person)
            .deal("g", &seats, &mut rng)
            .unwrap();

        for seat in &seats {
            prop_assert_eq!(game.hand(&seat.id).unwrap().len(), cards_per_person);
        }
        prop_assert_eq!(game.discard().len(), 1);
        prop_assert!(!game.base_card().unwrap().is_draw_four());
        prop_assert!(game.active_player_idx() < player_count);
        prop_assert_eq!(game.next_actions().len(), 1);
        assert_full_deck(&game);
    }
}

proptest! {
    // Driving whole games is comparatively slow; fewer cases suffice.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_driven_games_conserve_cards(
        seed in any::<u64>(),
        player_count in 2usize..=5,
    ) {
        let seats = players(player_count);
        let mut rng = GameRng::new(seed);
        let game = Dealer::new().deal("g", &seats, &mut rng).unwrap();

        let end = drive(game, &mut rng, 1000);
        assert_full_deck(&end);
        prop_assert!(!end.next_actions().is_empty());
        prop_assert!(end.active_player_idx() < player_count);
        if end.is_finished() {
            let winner = end.winner().unwrap();
            prop_assert!(end.hand(winner).unwrap().is_empty());
        }
    }
}
