//! Domain layer: pure game rules with no I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod legality;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use bidding::{Bid, Bidding};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, JokerColor, Rank, Suit, Trump};
pub use dealing::deal_hands;
pub use legality::{is_legal, legal_moves, IllegalPlay, Legality};
pub use rules::GameConfig;
pub use scoring::{score_hand, Standings};
pub use seed_derivation::{derive_dealing_seed, derive_seating_seed};
pub use state::{Seat, SeatState};
pub use tricks::{JokerAction, JokerCall, Lead, Play, Trick, TrickContext};
