use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::tricks::{JokerAction, JokerCall};
use crate::domain::{Card, GameConfig, Suit, Trump};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::game_flow::{
    validate_names, AgentError, BidView, Game, GameError, GameEvent, HandRowEntry, PlayView,
    PlayerAgent, ScoreSink, SetRowEntry, SinkError, TrumpView,
};

/// Plays the first legal card and the first legal bid.
#[derive(Default)]
struct FirstLegal {
    events: Rc<RefCell<Vec<GameEvent>>>,
    rejections: Rc<RefCell<Vec<DomainError>>>,
    /// Answer with a card that is not held this many times first.
    bad_cards: usize,
    /// Report an interrupt on the n-th card request.
    interrupt_at: Option<usize>,
    cards_asked: usize,
}

impl PlayerAgent for FirstLegal {
    fn choose_trump(&mut self, _view: &TrumpView<'_>) -> Result<Trump, AgentError> {
        Ok(Trump::NoTrumps)
    }

    fn choose_bid(&mut self, view: &BidView<'_>) -> Result<u8, AgentError> {
        view.legal_bids()
            .first()
            .copied()
            .ok_or(AgentError::Interrupted)
    }

    fn choose_card(&mut self, view: &PlayView<'_>) -> Result<Card, AgentError> {
        self.cards_asked += 1;
        if Some(self.cards_asked) == self.interrupt_at {
            return Err(AgentError::Interrupted);
        }
        if self.bad_cards > 0 {
            self.bad_cards -= 1;
            let missing = crate::domain::dealing::full_deck()
                .into_iter()
                .find(|c| !view.hand.contains(c))
                .ok_or(AgentError::Interrupted)?;
            return Ok(missing);
        }
        view.legal_moves()
            .first()
            .copied()
            .ok_or(AgentError::Interrupted)
    }

    fn choose_joker_action(&mut self) -> Result<JokerAction, AgentError> {
        Ok(JokerAction::Play)
    }

    fn choose_joker_call(&mut self) -> Result<JokerCall, AgentError> {
        Ok(JokerCall::High)
    }

    fn choose_suit_wanted(&mut self, _call: JokerCall) -> Result<Suit, AgentError> {
        Ok(Suit::Hearts)
    }

    fn rejected(&mut self, error: &DomainError) {
        self.rejections.borrow_mut().push(error.clone());
    }

    fn observe(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[derive(Default)]
struct MemorySink {
    hand_rows: Vec<Vec<HandRowEntry>>,
    set_rows: Vec<Vec<SetRowEntry>>,
}

impl ScoreSink for MemorySink {
    fn record_hand_row(&mut self, entries: &[HandRowEntry]) -> Result<(), SinkError> {
        self.hand_rows.push(entries.to_vec());
        Ok(())
    }

    fn record_set_row(&mut self, entries: &[SetRowEntry]) -> Result<(), SinkError> {
        self.set_rows.push(entries.to_vec());
        Ok(())
    }
}

fn names() -> Vec<String> {
    ["Ann", "Bob", "Cid", "Dee"].map(String::from).to_vec()
}

fn agents(list: Vec<FirstLegal>) -> Vec<Box<dyn PlayerAgent>> {
    list.into_iter()
        .map(|a| Box::new(a) as Box<dyn PlayerAgent>)
        .collect()
}

#[test]
fn names_are_trimmed_and_checked() {
    let ok = validate_names(&[" Ann ".into(), "Bob".into(), "Cid".into(), "Dee".into()], 4)
        .unwrap();
    assert_eq!(ok[0], "Ann");

    for bad in [
        vec!["Ann", "Bob", "Cid"],
        vec!["Ann", "Bob", "Cid", "  "],
        vec!["Ann", "Bob", "Cid", "ann"],
    ] {
        let bad: Vec<String> = bad.into_iter().map(String::from).collect();
        let err = validate_names(&bad, 4).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::InvalidPlayerNames));
    }
}

#[test]
fn seating_is_a_shuffle_of_the_names() {
    let game = Game::new(GameConfig::standard(), &names(), 99).unwrap();
    let mut seating = game.seating();
    seating.sort();
    assert_eq!(seating, names());
    assert_eq!(game.seed(), 99);
}

#[test]
fn full_game_writes_every_row_and_keeps_totals() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let list = (0..4)
        .map(|i| FirstLegal {
            // One observer is enough to see every broadcast.
            events: if i == 0 { events.clone() } else { Rc::default() },
            ..FirstLegal::default()
        })
        .collect();

    let mut game = Game::new(GameConfig::standard(), &names(), 2024).unwrap();
    let mut sink = MemorySink::default();
    let outcome = game.play(agents(list), &mut sink).unwrap();

    assert_eq!(sink.hand_rows.len(), 16);
    assert_eq!(sink.set_rows.len(), 4);
    assert_eq!(outcome.totals, game.totals());

    let events = events.borrow();
    let mut hand_sum = vec![0i32; 4];
    let mut bonus_sum = vec![0i32; 4];
    for event in events.iter() {
        match event {
            GameEvent::HandScored { results, .. } => {
                let tricks: u32 = results.iter().map(|r| r.1 as u32).sum();
                let bids: u32 = results.iter().map(|r| r.0 as u32).sum();
                assert_eq!(tricks, 9);
                assert_ne!(bids, 9, "dealer let the bids add up to 9");
                for (seat, r) in results.iter().enumerate() {
                    hand_sum[seat] += r.2;
                }
            }
            GameEvent::SetBonus { seat, bonus } => bonus_sum[*seat as usize] += bonus,
            _ => {}
        }
    }
    let expected: Vec<i32> = hand_sum.iter().zip(&bonus_sum).map(|(h, b)| h + b).collect();
    assert_eq!(outcome.totals, expected);

    let last_set_row: Vec<i32> = sink.set_rows[3].iter().map(|e| e.total).collect();
    assert_eq!(last_set_row, outcome.totals);

    let tricks_won = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TrickWon { .. }))
        .count();
    assert_eq!(tricks_won, 16 * 9);
}

#[test]
fn same_seed_replays_the_same_game() {
    let run = |seed| {
        let list = (0..4).map(|_| FirstLegal::default()).collect();
        let mut game = Game::new(GameConfig::standard(), &names(), seed).unwrap();
        let mut sink = MemorySink::default();
        let outcome = game.play(agents(list), &mut sink).unwrap();
        (outcome, sink.hand_rows)
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn rejected_card_is_asked_again() {
    let rejections = Rc::new(RefCell::new(Vec::new()));
    let list = (0..4)
        .map(|i| FirstLegal {
            rejections: if i == 0 { rejections.clone() } else { Rc::default() },
            bad_cards: if i == 0 { 2 } else { 0 },
            ..FirstLegal::default()
        })
        .collect();

    let mut game = Game::new(GameConfig::standard(), &names(), 11).unwrap();
    let mut sink = MemorySink::default();
    game.play(agents(list), &mut sink).unwrap();

    let rejections = rejections.borrow();
    assert_eq!(rejections.len(), 2);
    for err in rejections.iter() {
        assert!(matches!(
            err.kind(),
            Some(ValidationKind::IllegalCard(crate::domain::IllegalPlay::NotInHand))
        ));
    }
}

#[test]
fn interrupt_stops_the_game_and_keeps_written_rows() {
    // Each player is asked for 9 cards per hand; the 20th request falls in
    // the third hand.
    let list = (0..4)
        .map(|i| FirstLegal {
            interrupt_at: if i == 1 { Some(20) } else { None },
            ..FirstLegal::default()
        })
        .collect();

    let mut game = Game::new(GameConfig::standard(), &names(), 3).unwrap();
    let mut sink = MemorySink::default();
    let err = game.play(agents(list), &mut sink).unwrap_err();

    assert!(matches!(err, GameError::Interrupted));
    assert_eq!(sink.hand_rows.len(), 2);
    assert!(sink.set_rows.is_empty());
}

#[test]
fn wrong_agent_count_is_an_invariant_error() {
    let mut game = Game::new(GameConfig::standard(), &names(), 1).unwrap();
    let mut sink = MemorySink::default();
    let err = game
        .play(agents(vec![FirstLegal::default()]), &mut sink)
        .unwrap_err();
    assert!(matches!(err, GameError::Domain(DomainError::Invariant(_))));
}
