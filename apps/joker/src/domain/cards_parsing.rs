//! Text forms of cards and seat declarations.
//!
//! Parsing is lenient (case-insensitive, `10` or `T` for ten, suit letters or
//! symbols, spelled-out Jokers) because it backs interactive input. The
//! canonical token produced by [`card_token`] is what serde uses.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, JokerColor, Rank, Suit, Trump};
use super::tricks::{JokerAction, JokerCall};
use crate::errors::domain::{DomainError, ValidationKind};

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

fn unknown_card(s: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::UnknownCardToken,
        format!("Unknown card: {s:?}"),
    )
}

fn suit_from_char(ch: char) -> Option<Suit> {
    match ch {
        'C' | '♣' => Some(Suit::Clubs),
        'D' | '♦' => Some(Suit::Diamonds),
        'H' | '♥' => Some(Suit::Hearts),
        'S' | '♠' => Some(Suit::Spades),
        _ => None,
    }
}

fn rank_from_str(s: &str) -> Option<Rank> {
    match s {
        "6" => Some(Rank::Six),
        "7" => Some(Rank::Seven),
        "8" => Some(Rank::Eight),
        "9" => Some(Rank::Nine),
        "10" | "T" => Some(Rank::Ten),
        "J" => Some(Rank::Jack),
        "Q" => Some(Rank::Queen),
        "K" => Some(Rank::King),
        "A" => Some(Rank::Ace),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        match norm.as_str() {
            "RJ" | "RED" | "REDJOKER" | "JOKERRED" => return Ok(Card::RED_JOKER),
            "BJ" | "BLACK" | "BLACKJOKER" | "JOKERBLACK" => return Ok(Card::BLACK_JOKER),
            _ => {}
        }

        let mut chars: Vec<char> = norm.chars().collect();
        let suit_ch = chars.pop().ok_or_else(|| unknown_card(s))?;
        let suit = suit_from_char(suit_ch).ok_or_else(|| unknown_card(s))?;
        let rank_str: String = chars.into_iter().collect();
        let rank = rank_from_str(&rank_str).ok_or_else(|| unknown_card(s))?;

        // 6♠ and 6♣ are not in the deck: the Jokers took their places.
        if rank == Rank::Six && matches!(suit, Suit::Spades | Suit::Clubs) {
            return Err(unknown_card(s));
        }
        Ok(Card::new(suit, rank))
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "10H", "RJ").
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Canonical two-character token: rank letter (`T` for ten) + suit letter,
/// `RJ`/`BJ` for the Jokers.
pub fn card_token(card: Card) -> String {
    match card {
        Card::Joker(JokerColor::Red) => "RJ".to_string(),
        Card::Joker(JokerColor::Black) => "BJ".to_string(),
        Card::Ordinary { suit, rank } => {
            let rank_char = match rank {
                Rank::Six => '6',
                Rank::Seven => '7',
                Rank::Eight => '8',
                Rank::Nine => '9',
                Rank::Ten => 'T',
                Rank::Jack => 'J',
                Rank::Queen => 'Q',
                Rank::King => 'K',
                Rank::Ace => 'A',
            };
            let suit_char = match suit {
                Suit::Clubs => 'C',
                Suit::Diamonds => 'D',
                Suit::Hearts => 'H',
                Suit::Spades => 'S',
            };
            format!("{rank_char}{suit_char}")
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize(s);
        let suit = match norm.as_str() {
            "C" | "♣" | "CLUB" | "CLUBS" => Suit::Clubs,
            "D" | "♦" | "DIAMOND" | "DIAMONDS" => Suit::Diamonds,
            "H" | "♥" | "HEART" | "HEARTS" => Suit::Hearts,
            "S" | "♠" | "SPADE" | "SPADES" => Suit::Spades,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidSuitChoice,
                    format!("Unknown suit: {s:?} (use D, H, S or C)"),
                ))
            }
        };
        Ok(suit)
    }
}

impl FromStr for Trump {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "NONE" | "NT" | "NOTRUMP" | "NOTRUMPS" => Ok(Trump::NoTrumps),
            _ => s.parse::<Suit>().map(Trump::from).map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidTrumpChoice,
                    format!("Unknown trump: {s:?} (use D, H, S, C or None)"),
                )
            }),
        }
    }
}

impl FromStr for JokerAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "PLAY" => Ok(JokerAction::Play),
            "GIVEUP" => Ok(JokerAction::GiveUp),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidJokerAction,
                format!("Unknown Joker action: {s:?} (use Play or Give up)"),
            )),
        }
    }
}

impl FromStr for JokerCall {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "HIGH" => Ok(JokerCall::High),
            "LOW" => Ok(JokerCall::Low),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidHighLowChoice,
                format!("Unknown call: {s:?} (use High or Low)"),
            )),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Ordinary { suit, rank } => write!(f, "{rank}{suit}"),
            Card::Joker(JokerColor::Red) => f.write_str("Red Joker"),
            Card::Joker(JokerColor::Black) => f.write_str("Black Joker"),
        }
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{suit}"),
            None => f.write_str("no trump"),
        }
    }
}

impl fmt::Display for JokerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JokerAction::Play => "Play",
            JokerAction::GiveUp => "Give up",
            JokerAction::NotApplicable => "-",
        };
        f.write_str(s)
    }
}

impl fmt::Display for JokerCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JokerCall::High => f.write_str("High"),
            JokerCall::Low => f.write_str("Low"),
        }
    }
}
