//! Hand scoring, the set bonus and final standings.

use crate::domain::rules::GameConfig;
use crate::domain::state::Seat;

/// Outcome of one hand for one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandScore {
    pub delta: i32,
    /// Bid met exactly.
    pub bonus_eligible: bool,
}

pub const FAILED_BID_PENALTY: i32 = 500;

/// Score one seat's hand.
///
/// - exact bid of every trick: 100 per trick
/// - other exact bids: 50 per trick plus 50
/// - nonzero bid with no tricks taken: -500
/// - any other miss: 10 per trick taken
pub fn score_hand(bid: u8, tricks_won: u8, config: &GameConfig) -> HandScore {
    let bid_i = bid as i32;
    let tricks = tricks_won as i32;

    if bid == tricks_won {
        let delta = if bid == config.cards_per_player {
            bid_i * 100
        } else {
            bid_i * 50 + 50
        };
        return HandScore {
            delta,
            bonus_eligible: true,
        };
    }

    let delta = if bid != 0 && tricks_won == 0 {
        -FAILED_BID_PENALTY
    } else {
        tricks * 10
    };
    HandScore {
        delta,
        bonus_eligible: false,
    }
}

/// Set bonus: the best single-hand score of the set, for a seat that met its
/// bid in every one of the set's hands. An incomplete set earns nothing.
pub fn set_bonus(eligibility: &[bool], hand_scores: &[i32], hands_per_set: u8) -> Option<i32> {
    let hands = hands_per_set as usize;
    if eligibility.len() != hands || hand_scores.len() != hands {
        return None;
    }
    if !eligibility.iter().all(|&ok| ok) {
        return None;
    }
    hand_scores.iter().copied().max()
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Standings {
    Winner { seat: Seat, score: i32 },
    Tie { seats: Vec<Seat>, score: i32 },
}

/// Highest total wins; equal highest totals tie.
pub fn final_standings(totals: &[i32]) -> Option<Standings> {
    let best = totals.iter().copied().max()?;
    let seats: Vec<Seat> = totals
        .iter()
        .enumerate()
        .filter(|(_, &score)| score == best)
        .map(|(seat, _)| seat as Seat)
        .collect();
    match seats.as_slice() {
        [seat] => Some(Standings::Winner {
            seat: *seat,
            score: best,
        }),
        _ => Some(Standings::Tie { seats, score: best }),
    }
}
