//! Serde for the card model.
//!
//! Cards travel as their compact token (`"AS"`, `"TD"`, `"RJ"`); suits and
//! trump as upper-case names (`"HEARTS"`, `"NO_TRUMPS"`). Decoding is strict:
//! the lenient spellings accepted at the console are not accepted here.

use std::borrow::Cow;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_parsing::card_token;
use super::cards_types::{Card, Suit, Trump};

const NO_TRUMPS: &str = "NO_TRUMPS";

fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "CLUBS",
        Suit::Diamonds => "DIAMONDS",
        Suit::Hearts => "HEARTS",
        Suit::Spades => "SPADES",
    }
}

fn suit_by_name(name: &str) -> Option<Suit> {
    Suit::ALL.into_iter().find(|&s| suit_name(s) == name)
}

fn trump_by_name(name: &str) -> Option<Trump> {
    match name {
        NO_TRUMPS => Some(Trump::NoTrumps),
        other => suit_by_name(other).map(Trump::from),
    }
}

/// Read a string and map it through `lookup`, naming `what` on failure.
fn named<'de, D, T>(
    deserializer: D,
    what: &str,
    lookup: impl FnOnce(&str) -> Option<T>,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Cow::<'de, str>::deserialize(deserializer)?;
    lookup(&raw).ok_or_else(|| D::Error::custom(format!("Invalid {what}: {raw}")))
}

impl Serialize for Suit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(suit_name(*self))
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        named(deserializer, "suit", suit_by_name)
    }
}

impl Serialize for Trump {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suit().map_or(NO_TRUMPS, suit_name))
    }
}

impl<'de> Deserialize<'de> for Trump {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        named(deserializer, "trump", trump_by_name)
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&card_token(*self))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only the canonical token decodes; "10d" or "red joker" do not.
        named(deserializer, "card", |raw| {
            raw.parse::<Card>()
                .ok()
                .filter(|card| card_token(*card) == raw)
        })
    }
}
