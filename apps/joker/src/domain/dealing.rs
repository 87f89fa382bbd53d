//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{GameConfig, DECK_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// The 36-card deck in standard order: ranks 6..A in every suit, with the
/// Red Joker in place of 6♠ and the Black Joker in place of 6♣.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = match (suit, rank) {
                (Suit::Spades, Rank::Six) => Card::RED_JOKER,
                (Suit::Clubs, Rank::Six) => Card::BLACK_JOKER,
                _ => Card::new(suit, rank),
            };
            deck.push(card);
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle driven by a seeded ChaCha stream.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Shuffle the deck with `seed` and deal it round-robin, one card at a time.
///
/// Hands keep deal order: the first three cards of the leading seat's hand
/// are the ones it sees before declaring trump. The whole deck is dealt.
pub fn deal_hands(config: &GameConfig, seed: u64) -> Result<[Vec<Card>; PLAYERS], DomainError> {
    config.validate()?;

    let mut deck = full_deck();
    if deck.len() != config.players * config.cards_per_player as usize {
        return Err(DomainError::validation(
            ValidationKind::InvalidConfig,
            "Deck size does not match players x cards per player",
        ));
    }
    shuffle_with_seed(&mut deck, seed);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for hand in hands.iter_mut() {
        hand.reserve(config.cards_per_player as usize);
    }
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % PLAYERS].push(card);
    }

    Ok(hands)
}
