//! The seat-facing side of the game loop.
//!
//! Every decision the engine needs from a player goes through
//! [`PlayerAgent`]. Implementations receive a read-only view of what that
//! seat is allowed to see and return a choice; the engine validates the
//! choice and, when it is rejected, reports the reason through
//! [`PlayerAgent::rejected`] and asks again.

use thiserror::Error;

use crate::domain::bidding::legal_bids;
use crate::domain::legality::legal_moves;
use crate::domain::rules::{GameConfig, PLAYERS};
use crate::domain::state::Seat;
use crate::domain::tricks::{JokerAction, JokerCall, Lead, Play, TrickContext};
use crate::domain::{Card, Suit, Trump};
use crate::errors::domain::DomainError;

/// Errors an agent can report instead of a choice.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The answer could not be understood; the engine asks again.
    #[error(transparent)]
    Invalid(#[from] DomainError),
    /// The player left (Ctrl-C, closed input). Ends the game.
    #[error("interrupted by the user")]
    Interrupted,
}

/// Collects the display names before the game starts.
pub trait NamePrompt {
    fn names(&mut self, players: usize) -> Result<Vec<String>, AgentError>;
}

/// What the leading seat sees when declaring trump.
#[derive(Debug, Clone, Copy)]
pub struct TrumpView<'a> {
    pub seat: Seat,
    pub name: &'a str,
    /// The first three cards dealt to this seat.
    pub preview: &'a [Card],
}

/// What a seat sees when bidding.
#[derive(Debug, Clone, Copy)]
pub struct BidView<'a> {
    pub seat: Seat,
    pub name: &'a str,
    pub hand: &'a [Card],
    pub trump: Trump,
    /// Bids placed so far, indexed by seat.
    pub bids: [Option<u8>; PLAYERS],
    /// Set only for the dealer once the other three have bid.
    pub exclusion: Option<u8>,
    pub config: &'a GameConfig,
}

impl BidView<'_> {
    pub fn legal_bids(&self) -> Vec<u8> {
        legal_bids(self.exclusion, self.config)
    }
}

/// What a seat sees when it is its turn to play a card.
#[derive(Debug, Clone, Copy)]
pub struct PlayView<'a> {
    pub seat: Seat,
    pub name: &'a str,
    pub hand: &'a [Card],
    pub context: TrickContext,
    /// Cards already on the table, leader first.
    pub plays: &'a [Play],
    /// 0-based trick number within the hand.
    pub trick_no: u8,
}

impl PlayView<'_> {
    pub fn is_leading(&self) -> bool {
        self.context.lead.is_none()
    }

    pub fn legal_moves(&self) -> Vec<Card> {
        legal_moves(self.hand, &self.context)
    }
}

/// Table events broadcast to every agent as the game progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Names in seat order, after the seating shuffle.
    GameStarted { seating: Vec<String> },
    HandStarted {
        set_no: u8,
        hand_no: u8,
        lead: Seat,
        dealer: Seat,
    },
    TrumpDeclared { seat: Seat, trump: Trump },
    BidPlaced { seat: Seat, bid: u8 },
    TrickStarted { trick_no: u8, leader: Seat },
    CardPlayed { play: Play, lead: Lead },
    TrickWon { trick_no: u8, seat: Seat },
    /// Per seat: bid, tricks won, score of the hand.
    HandScored {
        set_no: u8,
        hand_no: u8,
        results: Vec<(u8, u8, i32)>,
    },
    SetBonus { seat: Seat, bonus: i32 },
    SetFinished { set_no: u8, totals: Vec<i32> },
}

/// One seat's decision maker.
pub trait PlayerAgent {
    fn choose_trump(&mut self, view: &TrumpView<'_>) -> Result<Trump, AgentError>;

    fn choose_bid(&mut self, view: &BidView<'_>) -> Result<u8, AgentError>;

    fn choose_card(&mut self, view: &PlayView<'_>) -> Result<Card, AgentError>;

    /// Asked after a follower has chosen a Joker.
    fn choose_joker_action(&mut self) -> Result<JokerAction, AgentError>;

    /// Asked after the leader has chosen a Joker.
    fn choose_joker_call(&mut self) -> Result<JokerCall, AgentError>;

    fn choose_suit_wanted(&mut self, call: JokerCall) -> Result<Suit, AgentError>;

    /// The last answer was refused; the same question follows.
    fn rejected(&mut self, _error: &DomainError) {}

    fn observe(&mut self, _event: &GameEvent) {}
}
