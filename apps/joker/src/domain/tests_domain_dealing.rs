use std::collections::HashSet;

use crate::domain::dealing::{deal_hands, full_deck};
use crate::domain::derive_dealing_seed;
use crate::domain::rules::{GameConfig, DECK_SIZE};
use crate::domain::Card;

#[test]
fn deal_uses_every_card_exactly_once() {
    let config = GameConfig::standard();
    for hand_index in 0..4 {
        let hands = deal_hands(&config, derive_dealing_seed(42, 0, hand_index)).unwrap();
        let mut seen = HashSet::new();
        for hand in &hands {
            assert_eq!(hand.len(), 9);
            for card in hand {
                assert!(seen.insert(*card), "duplicate {card:?}");
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
        let deck: HashSet<Card> = full_deck().into_iter().collect();
        assert_eq!(seen, deck);
    }
}

#[test]
fn both_jokers_are_always_dealt() {
    let hands = deal_hands(&GameConfig::standard(), 7).unwrap();
    let jokers = hands
        .iter()
        .flatten()
        .filter(|c| c.is_joker())
        .count();
    assert_eq!(jokers, 2);
}
