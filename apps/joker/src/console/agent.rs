use std::io::{BufRead, Write};

use super::SharedConsole;
use crate::domain::state::Seat;
use crate::domain::tricks::{JokerAction, JokerCall, Lead};
use crate::domain::{Card, Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::game_flow::{AgentError, BidView, GameEvent, PlayView, PlayerAgent, TrumpView};

fn list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A human at the shared terminal.
///
/// Only the announcing agent prints table events, so a table of four console
/// seats shows each event once.
pub struct ConsoleAgent<R, W> {
    console: SharedConsole<R, W>,
    announcer: bool,
    /// Seat-ordered names, learned from `GameStarted`.
    seating: Vec<String>,
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(console: SharedConsole<R, W>, announcer: bool) -> Self {
        Self {
            console,
            announcer,
            seating: Vec::new(),
        }
    }

    /// `players` agents on one console; the first one announces.
    pub fn table(console: &SharedConsole<R, W>, players: usize) -> Vec<Self> {
        (0..players)
            .map(|i| Self::new(console.clone(), i == 0))
            .collect()
    }

    fn name(&self, seat: Seat) -> String {
        self.seating
            .get(seat as usize)
            .cloned()
            .unwrap_or_else(|| format!("Seat {}", seat + 1))
    }

    fn ask(&self, prompt: &str) -> Result<String, AgentError> {
        self.console.borrow_mut().ask(prompt)
    }

    fn say(&self, line: impl AsRef<str>) -> Result<(), AgentError> {
        self.console.borrow_mut().say(line)
    }

    fn describe(&self, event: &GameEvent) -> Vec<String> {
        match event {
            GameEvent::GameStarted { seating } => {
                vec![format!("\nThe order of players: {}", seating.join(", "))]
            }
            GameEvent::HandStarted {
                set_no,
                hand_no,
                lead,
                dealer,
            } => vec![
                format!("\nSET NO. {set_no}, HAND NO. {hand_no}"),
                format!(
                    "{} leads this hand, {} is the dealer.",
                    self.name(*lead),
                    self.name(*dealer)
                ),
            ],
            GameEvent::TrumpDeclared { trump, .. } => vec![match trump {
                Trump::NoTrumps => "There is no trump suit for this hand!".to_string(),
                suit => format!("Trump suit for this hand is {suit}."),
            }],
            GameEvent::BidPlaced { seat, bid } => {
                vec![format!("{}'s bid is {bid}.", self.name(*seat))]
            }
            GameEvent::TrickStarted { trick_no, .. } => {
                vec![format!("\nTrick no. {}", trick_no + 1)]
            }
            GameEvent::CardPlayed { play, lead } => {
                let mut line = format!("{} plays {}", self.name(play.seat), play.card);
                match (play.joker_action, lead) {
                    (JokerAction::NotApplicable, Lead::Joker { call, suit_wanted })
                        if play.card.is_joker() =>
                    {
                        line.push_str(&format!(" ({call}, {suit_wanted} wanted)"));
                    }
                    (JokerAction::Play | JokerAction::GiveUp, _) => {
                        line.push_str(&format!(" ({})", play.joker_action));
                    }
                    _ => {}
                }
                vec![line]
            }
            GameEvent::TrickWon { seat, .. } => {
                vec![format!("{} is the winner of this trick.", self.name(*seat))]
            }
            GameEvent::HandScored { results, .. } => {
                let mut lines = vec!["\nThis hand is over, let's see the results:".to_string()];
                for (seat, (bid, won, score)) in results.iter().enumerate() {
                    lines.push(format!(
                        "{}: bid {bid}, won {won}, scored {score}",
                        self.name(seat as Seat)
                    ));
                }
                lines
            }
            GameEvent::SetBonus { seat, bonus } => vec![format!(
                "{} met every bid of the set and earns a bonus of {bonus} points!",
                self.name(*seat)
            )],
            GameEvent::SetFinished { set_no, totals } => {
                let cells: Vec<String> = totals
                    .iter()
                    .enumerate()
                    .map(|(seat, total)| format!("{} {total}", self.name(seat as Seat)))
                    .collect();
                vec![format!("\nTotals after set {set_no}: {}", cells.join(", "))]
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerAgent for ConsoleAgent<R, W> {
    fn choose_trump(&mut self, view: &TrumpView<'_>) -> Result<Trump, AgentError> {
        self.say(format!("\n{}'s first cards: {}", view.name, list(view.preview)))?;
        let answer = self.ask("Choose the trump suit. Enter \"D\", \"H\", \"S\", \"C\" or \"None\": ")?;
        Ok(answer.parse()?)
    }

    fn choose_bid(&mut self, view: &BidView<'_>) -> Result<u8, AgentError> {
        let mut hand = view.hand.to_vec();
        hand.sort();
        self.say(format!("\n{}'s cards: {}", view.name, list(&hand)))?;
        if let Some(excluded) = view.exclusion {
            self.say(format!("As the dealer you cannot bid {excluded}."))?;
        }
        let answer = self.ask(&format!("{}, place your bid: ", view.name))?;
        answer.parse::<u8>().map_err(|_| {
            AgentError::Invalid(DomainError::validation(
                ValidationKind::InvalidBid,
                format!(
                    "Your bid should be a whole number between 0 and {}.",
                    view.config.cards_per_player
                ),
            ))
        })
    }

    /// Accepts a card token (`AS`, `10h`, `red joker`) or the card's number
    /// in the listed hand.
    fn choose_card(&mut self, view: &PlayView<'_>) -> Result<Card, AgentError> {
        let mut hand = view.hand.to_vec();
        hand.sort();

        if !view.plays.is_empty() {
            let table: Vec<String> = view
                .plays
                .iter()
                .map(|p| format!("{}: {}", self.name(p.seat), p.card))
                .collect();
            self.say(format!("On the table: {}", table.join(", ")))?;
        }
        let numbered: Vec<String> = hand
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}) {c}", i + 1))
            .collect();
        self.say(format!("{}'s cards: {}", view.name, numbered.join("  ")))?;

        let answer = self.ask(&format!("{}, play a card: ", view.name))?;
        if let Ok(n) = answer.parse::<usize>() {
            if let Some(card) = n.checked_sub(1).and_then(|i| hand.get(i)) {
                return Ok(*card);
            }
        }
        Ok(answer.parse()?)
    }

    fn choose_joker_action(&mut self) -> Result<JokerAction, AgentError> {
        let answer =
            self.ask("Would you like to play the JOKER or give it up? Enter \"Play\" or \"Give up\": ")?;
        Ok(answer.parse()?)
    }

    fn choose_joker_call(&mut self) -> Result<JokerCall, AgentError> {
        let answer = self.ask("\"High\" or \"Low\"? Choose one of them: ")?;
        Ok(answer.parse()?)
    }

    fn choose_suit_wanted(&mut self, call: JokerCall) -> Result<Suit, AgentError> {
        let question = match call {
            JokerCall::High => "Which suit would you like others to play?",
            JokerCall::Low => "Which suit would you like to win this trick?",
        };
        let answer = self.ask(&format!(
            "{question} Enter \"D\" for ♦, \"H\" for ♥, \"S\" for ♠, \"C\" for ♣: "
        ))?;
        Ok(answer.parse()?)
    }

    fn rejected(&mut self, error: &DomainError) {
        let _ = self.say(format!("{error} Try again!"));
    }

    fn observe(&mut self, event: &GameEvent) {
        if let GameEvent::GameStarted { seating } = event {
            self.seating = seating.clone();
        }
        if !self.announcer {
            return;
        }
        for line in self.describe(event) {
            if self.say(line).is_err() {
                break;
            }
        }
    }
}
