//! Core card-related types: Card, Rank, Suit, Trump, JokerColor

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrumps,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Clubs,
        Trump::Diamonds,
        Trump::Hearts,
        Trump::Spades,
        Trump::NoTrumps,
    ];

    /// The trump suit, or `None` for a no-trump hand.
    pub fn suit(self) -> Option<Suit> {
        Suit::try_from(self).ok()
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Trump::Clubs,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Hearts => Trump::Hearts,
            Suit::Spades => Trump::Spades,
        }
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::Spades => Ok(Suit::Spades),
            Trump::NoTrumps => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Cannot convert NoTrumps to Suit",
            )),
        }
    }
}

/// Nine ranks, six lowest. Jokers have no rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum JokerColor {
    Red,
    Black,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Card {
    Ordinary { suit: Suit, rank: Rank },
    Joker(JokerColor),
}

impl Card {
    /// Sits in the 6♠ slot of the deck.
    pub const RED_JOKER: Card = Card::Joker(JokerColor::Red);
    /// Sits in the 6♣ slot of the deck.
    pub const BLACK_JOKER: Card = Card::Joker(JokerColor::Black);

    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card::Ordinary { suit, rank }
    }

    pub fn suit(self) -> Option<Suit> {
        match self {
            Card::Ordinary { suit, .. } => Some(suit),
            Card::Joker(_) => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Ordinary { rank, .. } => Some(rank),
            Card::Joker(_) => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// True for an ordinary card of `suit`; always false for Jokers.
    pub fn is_suit(self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}

// Note: Ord on Card is only for stable sorting: suit order C<D<H<S then rank,
// Jokers last (Red before Black).
// Do not use for trick resolution or game logic comparisons involving trump/lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (
                Card::Ordinary { suit: s1, rank: r1 },
                Card::Ordinary { suit: s2, rank: r2 },
            ) => s1.cmp(s2).then(r1.cmp(r2)),
            (Card::Ordinary { .. }, Card::Joker(_)) => Ordering::Less,
            (Card::Joker(_), Card::Ordinary { .. }) => Ordering::Greater,
            (Card::Joker(c1), Card::Joker(c2)) => c1.cmp(c2),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
