#![allow(dead_code)]

// tests/common/mod.rs
use std::cell::RefCell;
use std::rc::Rc;

use joker::domain::tricks::{JokerAction, JokerCall};
use joker::domain::{Card, Suit, Trump};
use joker::game_flow::{AgentError, BidView, GameEvent, PlayView, PlayerAgent, TrumpView};
use joker::DomainError;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    joker_test_support::logging::init();
}

pub type EventLog = Rc<RefCell<Vec<GameEvent>>>;

pub fn names() -> Vec<String> {
    ["Ann", "Bob", "Cid", "Dee"].map(String::from).to_vec()
}

/// Seeded agent that picks uniformly among legal answers.
pub struct RandomAgent {
    rng: ChaCha8Rng,
    events: Option<EventLog>,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            events: None,
        }
    }

    pub fn recording(seed: u64, events: EventLog) -> Self {
        Self {
            events: Some(events),
            ..Self::new(seed)
        }
    }
}

impl PlayerAgent for RandomAgent {
    fn choose_trump(&mut self, _view: &TrumpView<'_>) -> Result<Trump, AgentError> {
        Ok(*Trump::ALL.choose(&mut self.rng).ok_or(AgentError::Interrupted)?)
    }

    fn choose_bid(&mut self, view: &BidView<'_>) -> Result<u8, AgentError> {
        view.legal_bids()
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::Interrupted)
    }

    fn choose_card(&mut self, view: &PlayView<'_>) -> Result<Card, AgentError> {
        view.legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::Interrupted)
    }

    fn choose_joker_action(&mut self) -> Result<JokerAction, AgentError> {
        Ok(if self.rng.random_bool(0.7) {
            JokerAction::Play
        } else {
            JokerAction::GiveUp
        })
    }

    fn choose_joker_call(&mut self) -> Result<JokerCall, AgentError> {
        Ok(if self.rng.random_bool(0.5) {
            JokerCall::High
        } else {
            JokerCall::Low
        })
    }

    fn choose_suit_wanted(&mut self, _call: JokerCall) -> Result<Suit, AgentError> {
        Ok(*Suit::ALL.choose(&mut self.rng).ok_or(AgentError::Interrupted)?)
    }

    fn rejected(&mut self, error: &DomainError) {
        panic!("random agent only answers legally, got rejected: {error}");
    }

    fn observe(&mut self, event: &GameEvent) {
        if let Some(events) = &self.events {
            events.borrow_mut().push(event.clone());
        }
    }
}

/// Agents in name order; the first one records every event.
pub fn random_table(seed: u64, events: EventLog) -> Vec<Box<dyn PlayerAgent>> {
    (0..4u64)
        .map(|i| {
            let agent = if i == 0 {
                RandomAgent::recording(seed ^ i, events.clone())
            } else {
                RandomAgent::new(seed.wrapping_add(i))
            };
            Box::new(agent) as Box<dyn PlayerAgent>
        })
        .collect()
}
