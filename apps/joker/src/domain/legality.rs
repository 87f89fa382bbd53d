//! Legal-move validation for one card against the current trick.

use crate::domain::cards_logic::{hand_has_suit, highest_of_suit};
use crate::domain::tricks::{JokerCall, Lead, TrickContext};
use crate::domain::{Card, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

/// Why a card was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalPlay {
    NotInHand,
    MustFollowSuit,
    MustPlayTrump,
    MustPlayHighestOfWantedSuit,
    MustPlayWantedSuit,
}

impl IllegalPlay {
    pub fn message(self) -> &'static str {
        match self {
            IllegalPlay::NotInHand => "You don't have that card.",
            IllegalPlay::MustFollowSuit => "You must follow the suit of the first card.",
            IllegalPlay::MustPlayTrump => "You must play a trump card.",
            IllegalPlay::MustPlayHighestOfWantedSuit => {
                "You must play your highest card of the wanted suit."
            }
            IllegalPlay::MustPlayWantedSuit => "You must play a card of the wanted suit.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    Accept,
    Reject(IllegalPlay),
}

impl Legality {
    pub fn is_accept(self) -> bool {
        self == Legality::Accept
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            Legality::Accept => Ok(()),
            Legality::Reject(reason) => Err(DomainError::validation(
                ValidationKind::IllegalCard(reason),
                reason.message(),
            )),
        }
    }
}

/// Trump must be played when the seat holds some and cannot satisfy the
/// suit requirement.
fn trump_forcing(card: Card, hand: &[Card], trump: Trump) -> Legality {
    match trump.suit() {
        Some(t) if hand_has_suit(hand, t) && !card.is_suit(t) => {
            Legality::Reject(IllegalPlay::MustPlayTrump)
        }
        _ => Legality::Accept,
    }
}

/// Decide whether `card` may be played from `hand` in the trick described by
/// `ctx`. The leader may play anything held.
pub fn is_legal(card: Card, hand: &[Card], ctx: &TrickContext) -> Legality {
    if !hand.contains(&card) {
        return Legality::Reject(IllegalPlay::NotInHand);
    }
    // Leading is unrestricted; a Joker may always be played.
    let Some(lead) = ctx.lead else {
        return Legality::Accept;
    };
    if card.is_joker() {
        return Legality::Accept;
    }

    match lead {
        Lead::Ordinary { suit } => {
            if hand_has_suit(hand, suit) {
                if card.is_suit(suit) {
                    Legality::Accept
                } else {
                    Legality::Reject(IllegalPlay::MustFollowSuit)
                }
            } else {
                trump_forcing(card, hand, ctx.trump)
            }
        }
        Lead::Joker { call, suit_wanted } => match highest_of_suit(hand, suit_wanted) {
            Some(highest) => match call {
                JokerCall::High if card == highest => Legality::Accept,
                JokerCall::High => Legality::Reject(IllegalPlay::MustPlayHighestOfWantedSuit),
                JokerCall::Low if card.is_suit(suit_wanted) => Legality::Accept,
                JokerCall::Low => Legality::Reject(IllegalPlay::MustPlayWantedSuit),
            },
            None => trump_forcing(card, hand, ctx.trump),
        },
    }
}

/// Every card in `hand` that `is_legal` accepts, sorted.
pub fn legal_moves(hand: &[Card], ctx: &TrickContext) -> Vec<Card> {
    let mut moves: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&c| is_legal(c, hand, ctx).is_accept())
        .collect();
    moves.sort();
    moves.dedup();
    moves
}
