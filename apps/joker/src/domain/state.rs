use crate::domain::rules::PLAYERS;
use crate::domain::scoring::HandScore;
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
/// Counter-clockwise direction is negative (-1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Returns the previous player counter-clockwise (0 ← 1 ← 2 ← 3 ← 0).
#[inline]
pub fn prev_player(p: Seat) -> Seat {
    seat_offset(p, -1)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, (n as usize % PLAYERS) as i8)
}

/// Seat that leads (chooses trump, bids first, plays first) in hand `hand_index`
/// of a set (0-based).
#[inline]
pub fn lead_for_hand(hand_index: u8) -> Seat {
    nth_from(0, hand_index)
}

/// Dealer of hand `hand_index`: the seat before the leader, so
/// `(hand_index - 1) mod 4`. The dealer bids last.
#[inline]
pub fn dealer_for_hand(hand_index: u8) -> Seat {
    prev_player(lead_for_hand(hand_index))
}

/// All four seats in play order starting from `lead`.
pub fn seating_from(lead: Seat) -> [Seat; PLAYERS] {
    [
        lead,
        nth_from(lead, 1),
        nth_from(lead, 2),
        nth_from(lead, 3),
    ]
}

/// Per-seat state: the cards held this hand plus the set's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatState {
    pub name: String,
    /// Cards currently held (order irrelevant to the rules).
    pub cards: Vec<Card>,
    pub bid: u8,
    pub tricks_won: u8,
    /// Score of the current (or just finished) hand.
    pub score: i32,
    /// One entry per finished hand of the current set.
    pub hand_scores: Vec<i32>,
    /// One entry per finished hand of the current set: bid met exactly.
    pub bonus_eligibility: Vec<bool>,
}

impl SeatState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            bid: 0,
            tricks_won: 0,
            score: 0,
            hand_scores: Vec::new(),
            bonus_eligibility: Vec::new(),
        }
    }

    pub fn holds(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove `card` from the hand.
    pub fn take_card(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self.cards.iter().position(|&c| c == card).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownCardToken,
                format!("{} does not hold {card}", self.name),
            )
        })?;
        Ok(self.cards.remove(pos))
    }

    pub fn record_hand(&mut self, result: HandScore) {
        self.score = result.delta;
        self.hand_scores.push(result.delta);
        self.bonus_eligibility.push(result.bonus_eligible);
    }

    /// Clear everything tied to one deal; the set history stays.
    pub fn reset_for_hand(&mut self) {
        self.cards.clear();
        self.bid = 0;
        self.tricks_won = 0;
        self.score = 0;
    }

    pub fn reset_for_set(&mut self) {
        self.hand_scores.clear();
        self.bonus_eligibility.clear();
    }
}
