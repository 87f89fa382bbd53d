use std::ops::RangeInclusive;

use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 4;
pub const CARDS_PER_PLAYER: u8 = 9;
pub const HANDS_PER_SET: u8 = 4;
pub const SETS: u8 = 4;
/// 34 ordinary cards (6♠ and 6♣ removed) plus the two Jokers.
pub const DECK_SIZE: usize = 36;

/// Rule constants for one game, passed explicitly to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub players: usize,
    pub cards_per_player: u8,
    pub hands_per_set: u8,
    pub sets: u8,
}

impl GameConfig {
    pub const fn standard() -> Self {
        Self {
            players: PLAYERS,
            cards_per_player: CARDS_PER_PLAYER,
            hands_per_set: HANDS_PER_SET,
            sets: SETS,
        }
    }

    /// Only the four-seat, whole-deck layout is playable.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.players != PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Player count must be {PLAYERS}, got {}", self.players),
            ));
        }
        if self.players * self.cards_per_player as usize != DECK_SIZE {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "{} players x {} cards does not deal the {DECK_SIZE}-card deck",
                    self.players, self.cards_per_player
                ),
            ));
        }
        if self.hands_per_set == 0 || self.sets == 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                "A game needs at least one set of at least one hand",
            ));
        }
        Ok(())
    }

    pub fn valid_bid_range(&self) -> RangeInclusive<u8> {
        0..=self.cards_per_player
    }

    /// Tricks played in one hand (one per card held).
    pub fn tricks_per_hand(&self) -> u8 {
        self.cards_per_player
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
