//! One trick: the lead, the followers' plays, and the winner.

use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::{card_beats, card_contends};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{nth_from, Seat};
use crate::domain::{Card, Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a following player does with a Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JokerAction {
    /// Claim the trick.
    Play,
    /// Throw the Joker away without claiming anything.
    GiveUp,
    /// Ordinary card, or the Joker that led the trick.
    NotApplicable,
}

/// Declaration made when leading a Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JokerCall {
    /// Others must play their highest card of the wanted suit.
    High,
    /// Others must play the wanted suit; the leader hopes someone else wins.
    Low,
}

/// How the trick was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Lead {
    Ordinary { suit: Suit },
    Joker { call: JokerCall, suit_wanted: Suit },
}

impl Lead {
    /// The suit followers are asked to play.
    pub fn suit_to_follow(&self) -> Suit {
        match *self {
            Lead::Ordinary { suit } => suit,
            Lead::Joker { suit_wanted, .. } => suit_wanted,
        }
    }
}

/// Everything the legal-move validator needs to know about the trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickContext {
    pub trump: Trump,
    /// `None` until the leader has played.
    pub lead: Option<Lead>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Seat,
    pub card: Card,
    pub joker_action: JokerAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickPhase {
    LeadAwaitingCard,
    FollowersPlaying,
    Resolved { winner: Seat },
}

/// A trick in progress. Plays are kept in seating order from the leader;
/// that order decides between two claimed Jokers.
#[derive(Debug, Clone)]
pub struct Trick {
    leader: Seat,
    trump: Trump,
    lead: Option<Lead>,
    plays: Vec<Play>,
    phase: TrickPhase,
}

impl Trick {
    pub fn new(leader: Seat, trump: Trump) -> Self {
        Self {
            leader,
            trump,
            lead: None,
            plays: Vec::with_capacity(PLAYERS),
            phase: TrickPhase::LeadAwaitingCard,
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn phase(&self) -> TrickPhase {
        self.phase
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn context(&self) -> TrickContext {
        TrickContext {
            trump: self.trump,
            lead: self.lead,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Seat expected to play next, `None` once all four have played.
    pub fn next_seat(&self) -> Option<Seat> {
        (!self.is_complete()).then(|| nth_from(self.leader, self.plays.len() as u8))
    }

    /// Open the trick. A Joker lead must come with a call and a wanted suit;
    /// an ordinary lead must not.
    pub fn lead(&mut self, card: Card, call: Option<(JokerCall, Suit)>) -> Result<(), DomainError> {
        if self.phase != TrickPhase::LeadAwaitingCard {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "The trick has already been led",
            ));
        }
        let lead = match (card, call) {
            (Card::Joker(_), Some((call, suit_wanted))) => Lead::Joker { call, suit_wanted },
            (Card::Ordinary { suit, .. }, None) => Lead::Ordinary { suit },
            (Card::Joker(_), None) => {
                return Err(DomainError::invariant(
                    "a leading Joker needs a High/Low call and a wanted suit",
                ))
            }
            (Card::Ordinary { .. }, Some(_)) => {
                return Err(DomainError::invariant(
                    "only a leading Joker carries a High/Low call",
                ))
            }
        };
        self.lead = Some(lead);
        self.plays.push(Play {
            seat: self.leader,
            card,
            joker_action: JokerAction::NotApplicable,
        });
        self.phase = TrickPhase::FollowersPlaying;
        Ok(())
    }

    /// Record a follower's card. Jokers must say `Play` or `GiveUp`, ordinary
    /// cards `NotApplicable`.
    pub fn follow(
        &mut self,
        seat: Seat,
        card: Card,
        joker_action: JokerAction,
    ) -> Result<(), DomainError> {
        if self.phase != TrickPhase::FollowersPlaying {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "The trick is not accepting follow plays",
            ));
        }
        let expected = self.next_seat().ok_or_else(|| {
            DomainError::validation(ValidationKind::PhaseMismatch, "All four cards are played")
        })?;
        if seat != expected {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Out of turn: expected seat {expected}, got seat {seat}"),
            ));
        }
        let consistent = match card {
            Card::Joker(_) => matches!(joker_action, JokerAction::Play | JokerAction::GiveUp),
            Card::Ordinary { .. } => joker_action == JokerAction::NotApplicable,
        };
        if !consistent {
            return Err(DomainError::validation(
                ValidationKind::InvalidJokerAction,
                format!("{joker_action} does not apply to {card}"),
            ));
        }
        self.plays.push(Play {
            seat,
            card,
            joker_action,
        });
        Ok(())
    }

    /// Determine the winner once all four cards are down.
    pub fn resolve(&mut self) -> Result<Seat, DomainError> {
        match self.phase {
            TrickPhase::Resolved { winner } => Ok(winner),
            TrickPhase::LeadAwaitingCard => Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "The trick has not been led",
            )),
            TrickPhase::FollowersPlaying => {
                let winner = resolve_trick(&self.plays, &self.context())?;
                self.phase = TrickPhase::Resolved { winner };
                Ok(winner)
            }
        }
    }
}

/// Highest contending card: trump first, then `follow`, by rank.
fn strongest(plays: &[Play], follow: Option<Suit>, trump: Trump) -> Option<Seat> {
    let mut best: Option<&Play> = None;
    for play in plays {
        if !card_contends(play.card, follow, trump) {
            continue;
        }
        match best {
            Some(b) if !card_beats(play.card, b.card, follow, trump) => {}
            _ => best = Some(play),
        }
    }
    best.map(|p| p.seat)
}

fn claims(play: &Play) -> bool {
    play.card.is_joker() && play.joker_action == JokerAction::Play
}

/// Winner of a completed trick.
///
/// Ordinary lead: the last claimed Joker, else the highest trump, else the
/// highest card of the lead suit, else the leader.
///
/// Joker lead: the first follower to claim with the other Joker wins
/// outright. Otherwise a `High` call wins for the leader when the wanted suit
/// is trump, and loses only to trump otherwise; a `Low` call goes to the
/// highest trump, else the highest card of the wanted suit, else the leader.
pub fn resolve_trick(plays: &[Play], ctx: &TrickContext) -> Result<Seat, DomainError> {
    if plays.len() != PLAYERS {
        return Err(DomainError::invariant(format!(
            "cannot resolve a trick with {} plays",
            plays.len()
        )));
    }
    let lead = ctx
        .lead
        .ok_or_else(|| DomainError::invariant("cannot resolve a trick without a lead"))?;
    let leader = plays[0].seat;
    let trump = ctx.trump;

    let winner = match lead {
        Lead::Ordinary { suit } => plays
            .iter()
            .rev()
            .find(|p| claims(p))
            .map(|p| p.seat)
            .or_else(|| strongest(plays, Some(suit), trump))
            .unwrap_or(leader),
        Lead::Joker { call, suit_wanted } => {
            if let Some(claimer) = plays[1..].iter().find(|p| claims(p)) {
                return Ok(claimer.seat);
            }
            let is_trump_wanted = trump.suit() == Some(suit_wanted);
            match call {
                JokerCall::High if is_trump_wanted => leader,
                JokerCall::High => strongest(plays, None, trump).unwrap_or(leader),
                JokerCall::Low => strongest(plays, Some(suit_wanted), trump).unwrap_or(leader),
            }
        }
    };
    Ok(winner)
}
