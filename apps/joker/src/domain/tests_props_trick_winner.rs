/// Property-based tests for trick winner resolution
use proptest::prelude::*;

use crate::domain::tricks::{resolve_trick, JokerAction, JokerCall, Lead, Play, TrickContext};
use crate::domain::{test_gens, test_prelude, Card, Rank, Suit, Trump};

/// Independent oracle for an ordinary lead: key = (is_trump, is_lead, rank).
fn oracle_ordinary_winner(plays: &[Play], trump: Trump) -> u8 {
    if let Some(p) = plays
        .iter()
        .rev()
        .find(|p| p.card.is_joker() && p.joker_action == JokerAction::Play)
    {
        return p.seat;
    }
    let lead = plays[0].card.suit();
    let key = |c: Card| -> (u8, u8, u8) {
        match c {
            Card::Joker(_) => (0, 0, 0),
            Card::Ordinary { suit, rank } => {
                let rank_score = Rank::ALL.iter().position(|r| *r == rank).unwrap_or(0) as u8 + 1;
                let is_trump = trump.suit() == Some(suit);
                let is_lead = lead == Some(suit);
                if is_trump || is_lead {
                    (is_trump as u8, is_lead as u8, rank_score)
                } else {
                    (0, 0, 0)
                }
            }
        }
    };
    let mut best = 0;
    for (i, p) in plays.iter().enumerate().skip(1) {
        if key(p.card) > key(plays[best].card) {
            best = i;
        }
    }
    plays[best].seat
}

fn ordinary_ctx(plays: &[Play], trump: Trump) -> Option<TrickContext> {
    plays[0].card.suit().map(|suit| TrickContext {
        trump,
        lead: Some(Lead::Ordinary { suit }),
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Ordinary lead: the resolver agrees with the oracle.
    #[test]
    fn prop_ordinary_lead_matches_oracle(
        (_leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let Some(ctx) = ordinary_ctx(&plays, trump) else {
            return Ok(());
        };
        let winner = resolve_trick(&plays, &ctx).unwrap();
        prop_assert_eq!(winner, oracle_ordinary_winner(&plays, trump),
            "plays={:?} trump={:?}", plays, trump);
    }

    /// The winner is always one of the four seats that played.
    #[test]
    fn prop_winner_is_a_player(
        (_leader, plays) in test_gens::complete_trick(),
        trump in test_gens::trump(),
        call in test_gens::joker_call(),
        wanted in test_gens::suit(),
    ) {
        let lead = match plays[0].card {
            Card::Joker(_) => Lead::Joker { call, suit_wanted: wanted },
            Card::Ordinary { suit, .. } => Lead::Ordinary { suit },
        };
        let ctx = TrickContext { trump, lead: Some(lead) };
        let winner = resolve_trick(&plays, &ctx).unwrap();
        prop_assert!(plays.iter().any(|p| p.seat == winner));
    }

    /// A High call on the trump suit always wins unless a follower claims
    /// with the other Joker.
    #[test]
    fn prop_high_call_on_trump_wins(
        (_leader, plays) in test_gens::complete_trick(),
        wanted in test_gens::suit(),
    ) {
        let mut plays = plays;
        // Put a Joker in the lead slot.
        let leader_card = if plays.iter().any(|p| p.card == Card::RED_JOKER) {
            Card::BLACK_JOKER
        } else {
            Card::RED_JOKER
        };
        prop_assume!(!plays[1..].iter().any(|p| p.card == leader_card));
        plays[0].card = leader_card;
        plays[0].joker_action = JokerAction::NotApplicable;

        let ctx = TrickContext {
            trump: Trump::from(wanted),
            lead: Some(Lead::Joker { call: JokerCall::High, suit_wanted: wanted }),
        };
        let claimed = plays[1..]
            .iter()
            .any(|p| p.card.is_joker() && p.joker_action == JokerAction::Play);
        let winner = resolve_trick(&plays, &ctx).unwrap();
        if !claimed {
            prop_assert_eq!(winner, plays[0].seat);
        }
    }
}

#[test]
fn oracle_sanity() {
    let plays = [
        Play { seat: 0, card: Card::new(Suit::Hearts, Rank::Nine), joker_action: JokerAction::NotApplicable },
        Play { seat: 1, card: Card::new(Suit::Hearts, Rank::Ace), joker_action: JokerAction::NotApplicable },
        Play { seat: 2, card: Card::new(Suit::Clubs, Rank::Seven), joker_action: JokerAction::NotApplicable },
        Play { seat: 3, card: Card::new(Suit::Diamonds, Rank::King), joker_action: JokerAction::NotApplicable },
    ];
    assert_eq!(oracle_ordinary_winner(&plays, Trump::NoTrumps), 1);
    assert_eq!(oracle_ordinary_winner(&plays, Trump::Clubs), 2);
}
