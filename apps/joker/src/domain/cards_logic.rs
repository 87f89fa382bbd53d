//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Rank, Suit, Trump};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}

/// Highest-ranked card of `suit` in the hand, if any.
pub fn highest_of_suit(hand: &[Card], suit: Suit) -> Option<Card> {
    hand.iter()
        .copied()
        .filter(|c| c.is_suit(suit))
        .max_by_key(|c| c.rank())
}

/// Strength of a card within a trick: trump cards form the upper tier, cards
/// of the followed suit the lower tier, everything else (Jokers included)
/// has no strength at all.
fn strength(card: Card, follow: Option<Suit>, trump: Trump) -> Option<(u8, Rank)> {
    let Card::Ordinary { suit, rank } = card else {
        return None;
    };
    if trump.suit() == Some(suit) {
        return Some((2, rank));
    }
    if follow == Some(suit) {
        return Some((1, rank));
    }
    None
}

/// Whether `a` beats `b` when `follow` is the suit being followed (if any).
///
/// Jokers are never compared here: their claim semantics are handled by the
/// trick resolver before rank comparison starts.
pub fn card_beats(a: Card, b: Card, follow: Option<Suit>, trump: Trump) -> bool {
    match (strength(a, follow, trump), strength(b, follow, trump)) {
        (Some(sa), Some(sb)) => sa > sb,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Whether the card can win on rank at all (is trump or of the followed suit).
pub fn card_contends(card: Card, follow: Option<Suit>, trump: Trump) -> bool {
    strength(card, follow, trump).is_some()
}
