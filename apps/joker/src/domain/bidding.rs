//! Bids: range check, the dealer's excluded value, and turn order.

use crate::domain::rules::{GameConfig, PLAYERS};
use crate::domain::state::{nth_from, prev_player, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bid(pub u8);

/// The bid the dealer may not make: the value that would make all four bids
/// add up to the number of tricks. Computed from the other three bids only.
/// `None` when the other bids already exceed the trick count.
pub fn dealer_excluded_bid(other_bids: &[u8], config: &GameConfig) -> Option<u8> {
    let others: u32 = other_bids.iter().map(|&b| b as u32).sum();
    let tricks = config.tricks_per_hand() as u32;
    tricks.checked_sub(others).map(|v| v as u8)
}

/// Check a bid against the range and, for the dealer, the excluded value.
pub fn validate_bid(bid: u8, exclusion: Option<u8>, config: &GameConfig) -> Result<Bid, DomainError> {
    let range = config.valid_bid_range();
    if !range.contains(&bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "Your bid should be between {} and {}.",
                range.start(),
                range.end()
            ),
        ));
    }
    if exclusion == Some(bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "You can place any bid between {} and {} except {bid}.",
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(Bid(bid))
}

/// All bids the seat may currently make.
pub fn legal_bids(exclusion: Option<u8>, config: &GameConfig) -> Vec<u8> {
    config
        .valid_bid_range()
        .filter(|&b| exclusion != Some(b))
        .collect()
}

/// Bidding for one hand: the leader bids first, the dealer (the seat before
/// the leader) bids last.
#[derive(Debug, Clone)]
pub struct Bidding {
    lead: Seat,
    bids: [Option<u8>; PLAYERS],
    config: GameConfig,
}

impl Bidding {
    pub fn new(lead: Seat, config: GameConfig) -> Self {
        Self {
            lead,
            bids: [None; PLAYERS],
            config,
        }
    }

    pub fn dealer(&self) -> Seat {
        prev_player(self.lead)
    }

    fn placed(&self) -> u8 {
        self.bids.iter().filter(|b| b.is_some()).count() as u8
    }

    /// Seat expected to bid next, `None` once all four have bid.
    pub fn next_bidder(&self) -> Option<Seat> {
        let placed = self.placed();
        (placed < PLAYERS as u8).then(|| nth_from(self.lead, placed))
    }

    /// Excluded value for `seat`: only the dealer has one, and only once the
    /// other three have bid.
    pub fn exclusion_for(&self, seat: Seat) -> Option<u8> {
        if seat != self.dealer() {
            return None;
        }
        let others: Option<Vec<u8>> = self
            .bids
            .iter()
            .enumerate()
            .filter(|(s, _)| *s as Seat != seat)
            .map(|(_, b)| *b)
            .collect();
        others.and_then(|o| dealer_excluded_bid(&o, &self.config))
    }

    pub fn place_bid(&mut self, seat: Seat, bid: Bid) -> Result<(), DomainError> {
        let expected = self.next_bidder().ok_or_else(|| {
            DomainError::validation(ValidationKind::PhaseMismatch, "All bids are already placed")
        })?;
        if seat != expected {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Not your turn to bid. Expected seat {expected}, got seat {seat}"),
            ));
        }
        let Bid(value) = validate_bid(bid.0, self.exclusion_for(seat), &self.config)?;
        self.bids[seat as usize] = Some(value);
        Ok(())
    }

    pub fn bids(&self) -> [Option<u8>; PLAYERS] {
        self.bids
    }

    /// All four bids, once complete.
    pub fn finished(&self) -> Option<[u8; PLAYERS]> {
        let mut out = [0u8; PLAYERS];
        for (slot, bid) in out.iter_mut().zip(self.bids.iter()) {
            *slot = (*bid)?;
        }
        Some(out)
    }
}
