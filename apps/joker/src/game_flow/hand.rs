//! One hand: deal, trump, bids, nine tricks, scoring.

use tracing::{debug, info, warn};

use super::agent::{AgentError, BidView, GameEvent, PlayView, PlayerAgent, TrumpView};
use super::GameError;
use crate::domain::bidding::{Bid, Bidding};
use crate::domain::legality::is_legal;
use crate::domain::rules::{GameConfig, PLAYERS};
use crate::domain::scoring::{score_hand, HandScore};
use crate::domain::state::{dealer_for_hand, lead_for_hand, Seat, SeatState};
use crate::domain::tricks::{JokerAction, Trick};
use crate::domain::{deal_hands, derive_dealing_seed, Card, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards the leading seat may look at before declaring trump.
const TRUMP_PREVIEW: usize = 3;

/// Ask `agent` until `accept` takes the answer.
///
/// Recoverable errors (unparseable input, rule violations) go back to the
/// agent; interruption and invariant breaches end the game.
pub(super) fn ask<T, U>(
    agent: &mut dyn PlayerAgent,
    seat: Seat,
    mut prompt: impl FnMut(&mut dyn PlayerAgent) -> Result<T, AgentError>,
    mut accept: impl FnMut(T) -> Result<U, DomainError>,
) -> Result<U, GameError> {
    loop {
        let err = match prompt(&mut *agent) {
            Ok(answer) => match accept(answer) {
                Ok(value) => return Ok(value),
                Err(e) => e,
            },
            Err(AgentError::Invalid(e)) => e,
            Err(AgentError::Interrupted) => return Err(GameError::Interrupted),
        };
        if !err.is_recoverable() {
            return Err(err.into());
        }
        warn!(seat, error = %err, "Rejected agent answer");
        agent.rejected(&err);
    }
}

pub(super) fn broadcast(agents: &mut [Box<dyn PlayerAgent>], event: &GameEvent) {
    for agent in agents.iter_mut() {
        agent.observe(event);
    }
}

/// Result of one hand, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub trump: Trump,
    pub bids: [u8; PLAYERS],
    pub tricks_won: [u8; PLAYERS],
    pub scores: [HandScore; PLAYERS],
}

/// Drives a single hand. Seats and agents are indexed by seat.
pub(super) struct HandRunner<'a> {
    pub config: &'a GameConfig,
    pub seats: &'a mut [SeatState],
    pub agents: &'a mut [Box<dyn PlayerAgent>],
    pub game_seed: u64,
    pub set_index: u8,
    pub hand_index: u8,
}

impl HandRunner<'_> {
    pub fn run(mut self) -> Result<HandSummary, GameError> {
        let lead = lead_for_hand(self.hand_index);
        let dealer = dealer_for_hand(self.hand_index);
        info!(
            set = self.set_index + 1,
            hand = self.hand_index + 1,
            lead,
            dealer,
            "Hand started"
        );
        broadcast(
            self.agents,
            &GameEvent::HandStarted {
                set_no: self.set_index + 1,
                hand_no: self.hand_index + 1,
                lead,
                dealer,
            },
        );

        self.deal()?;
        let trump = self.declare_trump(lead)?;
        let bids = self.take_bids(lead, trump)?;

        let mut leader = lead;
        for trick_no in 0..self.config.tricks_per_hand() {
            leader = self.play_trick(trick_no, leader, trump)?;
        }

        self.score(trump, bids)
    }

    fn deal(&mut self) -> Result<(), DomainError> {
        let seed = derive_dealing_seed(self.game_seed, self.set_index, self.hand_index);
        let hands = deal_hands(self.config, seed)?;
        for (seat, cards) in self.seats.iter_mut().zip(hands) {
            seat.reset_for_hand();
            seat.cards = cards;
        }
        debug!(seed, "Cards dealt");
        Ok(())
    }

    fn declare_trump(&mut self, lead: Seat) -> Result<Trump, GameError> {
        let seat = &self.seats[lead as usize];
        let view = TrumpView {
            seat: lead,
            name: &seat.name,
            preview: &seat.cards[..TRUMP_PREVIEW.min(seat.cards.len())],
        };
        let agent = self.agents[lead as usize].as_mut();
        let trump = ask(agent, lead, |a| a.choose_trump(&view), Ok)?;

        info!(seat = lead, %trump, "Trump declared");
        broadcast(self.agents, &GameEvent::TrumpDeclared { seat: lead, trump });
        Ok(trump)
    }

    fn take_bids(&mut self, lead: Seat, trump: Trump) -> Result<[u8; PLAYERS], GameError> {
        let mut bidding = Bidding::new(lead, *self.config);

        while let Some(seat) = bidding.next_bidder() {
            let state = &self.seats[seat as usize];
            let view = BidView {
                seat,
                name: &state.name,
                hand: &state.cards,
                trump,
                bids: bidding.bids(),
                exclusion: bidding.exclusion_for(seat),
                config: self.config,
            };
            let agent = self.agents[seat as usize].as_mut();
            let bid = ask(
                agent,
                seat,
                |a| a.choose_bid(&view),
                |b| bidding.place_bid(seat, Bid(b)).map(|_| b),
            )?;

            self.seats[seat as usize].bid = bid;
            debug!(seat, bid, "Bid placed");
            broadcast(self.agents, &GameEvent::BidPlaced { seat, bid });
        }

        bidding
            .finished()
            .ok_or_else(|| DomainError::invariant("bidding ended with missing bids").into())
    }

    /// Ask `seat` for a legal card from its current hand.
    fn choose_card(&mut self, seat: Seat, trick: &Trick, trick_no: u8) -> Result<Card, GameError> {
        let state = &self.seats[seat as usize];
        let context = trick.context();
        let view = PlayView {
            seat,
            name: &state.name,
            hand: &state.cards,
            context,
            plays: trick.plays(),
            trick_no,
        };
        let agent = self.agents[seat as usize].as_mut();
        ask(
            agent,
            seat,
            |a| a.choose_card(&view),
            |card| is_legal(card, &state.cards, &context).into_result().map(|_| card),
        )
    }

    fn play_trick(&mut self, trick_no: u8, leader: Seat, trump: Trump) -> Result<Seat, GameError> {
        let mut trick = Trick::new(leader, trump);
        broadcast(self.agents, &GameEvent::TrickStarted { trick_no, leader });

        let card = self.choose_card(leader, &trick, trick_no)?;
        let call = if card.is_joker() {
            let agent = self.agents[leader as usize].as_mut();
            let call = ask(agent, leader, |a| a.choose_joker_call(), Ok)?;
            let suit = ask(agent, leader, |a| a.choose_suit_wanted(call), Ok)?;
            Some((call, suit))
        } else {
            None
        };
        trick.lead(card, call)?;
        self.seats[leader as usize].take_card(card)?;
        self.announce_play(&trick)?;

        while let Some(seat) = trick.next_seat() {
            let card = self.choose_card(seat, &trick, trick_no)?;
            let action = if card.is_joker() {
                let agent = self.agents[seat as usize].as_mut();
                ask(agent, seat, |a| a.choose_joker_action(), |action| match action {
                    JokerAction::Play | JokerAction::GiveUp => Ok(action),
                    JokerAction::NotApplicable => Err(DomainError::validation(
                        ValidationKind::InvalidJokerAction,
                        "Choose either Play or Give up.",
                    )),
                })?
            } else {
                JokerAction::NotApplicable
            };
            trick.follow(seat, card, action)?;
            self.seats[seat as usize].take_card(card)?;
            self.announce_play(&trick)?;
        }

        let winner = trick.resolve()?;
        self.seats[winner as usize].tricks_won += 1;
        debug!(trick = trick_no + 1, winner, "Trick resolved");
        broadcast(self.agents, &GameEvent::TrickWon { trick_no, seat: winner });
        Ok(winner)
    }

    fn announce_play(&mut self, trick: &Trick) -> Result<(), DomainError> {
        let (Some(play), Some(lead)) = (trick.plays().last(), trick.context().lead) else {
            return Err(DomainError::invariant("announced a play before the lead"));
        };
        debug!(seat = play.seat, card = %play.card, action = ?play.joker_action, "Card played");
        broadcast(self.agents, &GameEvent::CardPlayed { play: *play, lead });
        Ok(())
    }

    fn score(&mut self, trump: Trump, bids: [u8; PLAYERS]) -> Result<HandSummary, GameError> {
        let mut tricks_won = [0u8; PLAYERS];
        for (slot, seat) in tricks_won.iter_mut().zip(self.seats.iter()) {
            *slot = seat.tricks_won;
        }
        let taken: u32 = tricks_won.iter().map(|&t| t as u32).sum();
        if taken != self.config.tricks_per_hand() as u32 {
            return Err(DomainError::invariant(format!(
                "{taken} tricks won in a hand of {}",
                self.config.tricks_per_hand()
            ))
            .into());
        }

        let mut scores = [HandScore {
            delta: 0,
            bonus_eligible: false,
        }; PLAYERS];
        for (i, seat) in self.seats.iter_mut().enumerate() {
            let result = score_hand(bids[i], tricks_won[i], self.config);
            seat.record_hand(result);
            scores[i] = result;
        }
        info!(?bids, ?tricks_won, "Hand scored");

        Ok(HandSummary {
            trump,
            bids,
            tricks_won,
            scores,
        })
    }
}
