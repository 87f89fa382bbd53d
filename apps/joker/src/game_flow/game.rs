//! Whole-game driver: seating, sets of hands, set bonuses, final standings.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{info, instrument};

use super::agent::{GameEvent, PlayerAgent};
use super::hand::{broadcast, HandRunner, HandSummary};
use super::sink::{HandRowEntry, ScoreSink, SetRowEntry, SinkError};
use crate::domain::derive_seating_seed;
use crate::domain::rules::GameConfig;
use crate::domain::scoring::{final_standings, set_bonus, Standings};
use crate::domain::state::{Seat, SeatState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Errors that end a game early.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("game interrupted by the user")]
    Interrupted,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Final totals and standings of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Names in seat order.
    pub names: Vec<String>,
    /// Totals in seat order.
    pub totals: Vec<i32>,
    pub standings: Standings,
}

impl GameOutcome {
    /// Human-readable result line.
    pub fn announcement(&self) -> String {
        let name = |seat: Seat| self.names[seat as usize].as_str();
        match &self.standings {
            Standings::Winner { seat, score } => {
                format!("{} wins the game with {score} points!", name(*seat))
            }
            Standings::Tie { seats, score } => {
                let names: Vec<&str> = seats.iter().map(|&s| name(s)).collect();
                format!("It's a tie between {} with {score} points!", names.join(" and "))
            }
        }
    }
}

/// Trim the names and check there are `players` distinct, non-empty ones.
pub fn validate_names(names: &[String], players: usize) -> Result<Vec<String>, DomainError> {
    let trimmed: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
    if trimmed.len() != players {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerNames,
            format!("Exactly {players} player names are required."),
        ));
    }
    if trimmed.iter().any(|n| n.is_empty()) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerNames,
            "Player names cannot be empty.",
        ));
    }
    let mut seen = HashSet::new();
    for name in &trimmed {
        if !seen.insert(name.to_lowercase()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerNames,
                format!("The name {name} is already taken."),
            ));
        }
    }
    Ok(trimmed)
}

/// A game between four named players.
///
/// Agents passed to [`Game::play`] are in the same order as the names given
/// to [`Game::new`]; the seating order is shuffled once from the game seed.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    /// `seating[seat]` is the index of the player sitting there.
    seating: Vec<usize>,
    seats: Vec<SeatState>,
    totals: Vec<i32>,
}

impl Game {
    pub fn new(config: GameConfig, names: &[String], seed: u64) -> Result<Self, DomainError> {
        config.validate()?;
        let names = validate_names(names, config.players)?;

        let mut seating: Vec<usize> = (0..config.players).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(derive_seating_seed(seed));
        seating.shuffle(&mut rng);

        let seats = seating
            .iter()
            .map(|&player| SeatState::new(names[player].clone()))
            .collect();

        Ok(Self {
            config,
            seed,
            seating,
            seats,
            totals: vec![0; config.players],
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Names in seat order.
    pub fn seating(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.name.clone()).collect()
    }

    pub fn totals(&self) -> &[i32] {
        &self.totals
    }

    /// Put the agents in seat order.
    fn seat_agents(
        &self,
        agents: Vec<Box<dyn PlayerAgent>>,
    ) -> Result<Vec<Box<dyn PlayerAgent>>, DomainError> {
        if agents.len() != self.config.players {
            return Err(DomainError::invariant(format!(
                "{} agents for {} players",
                agents.len(),
                self.config.players
            )));
        }
        let mut slots: Vec<Option<Box<dyn PlayerAgent>>> = agents.into_iter().map(Some).collect();
        self.seating
            .iter()
            .map(|&player| slots[player].take())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DomainError::invariant("seating is not a permutation"))
    }

    /// Play every set to the end.
    #[instrument(skip_all, fields(seed = self.seed))]
    pub fn play(
        &mut self,
        agents: Vec<Box<dyn PlayerAgent>>,
        sink: &mut dyn ScoreSink,
    ) -> Result<GameOutcome, GameError> {
        let mut agents = self.seat_agents(agents)?;
        info!(seating = ?self.seating(), "Game started");
        broadcast(
            &mut agents,
            &GameEvent::GameStarted {
                seating: self.seating(),
            },
        );

        for set_index in 0..self.config.sets {
            self.play_set(set_index, &mut agents, sink)?;
        }

        let standings = final_standings(&self.totals)
            .ok_or_else(|| DomainError::invariant("no players to rank"))?;
        info!(totals = ?self.totals, ?standings, "Game finished");
        Ok(GameOutcome {
            names: self.seating(),
            totals: self.totals.clone(),
            standings,
        })
    }

    fn play_set(
        &mut self,
        set_index: u8,
        agents: &mut [Box<dyn PlayerAgent>],
        sink: &mut dyn ScoreSink,
    ) -> Result<(), GameError> {
        info!(set = set_index + 1, "Set started");
        for seat in self.seats.iter_mut() {
            seat.reset_for_set();
        }

        for hand_index in 0..self.config.hands_per_set {
            let summary = HandRunner {
                config: &self.config,
                seats: &mut self.seats,
                agents: &mut *agents,
                game_seed: self.seed,
                set_index,
                hand_index,
            }
            .run()?;
            self.finish_hand(set_index, hand_index, &summary, agents, sink)?;
        }

        for (seat, state) in self.seats.iter().enumerate() {
            let bonus = set_bonus(
                &state.bonus_eligibility,
                &state.hand_scores,
                self.config.hands_per_set,
            );
            if let Some(bonus) = bonus {
                self.totals[seat] += bonus;
                info!(seat, bonus, "Set bonus awarded");
                broadcast(
                    agents,
                    &GameEvent::SetBonus {
                        seat: seat as Seat,
                        bonus,
                    },
                );
            }
        }

        let row: Vec<SetRowEntry> = self
            .seats
            .iter()
            .zip(&self.totals)
            .map(|(state, &total)| SetRowEntry {
                name: state.name.clone(),
                total,
            })
            .collect();
        sink.record_set_row(&row)?;
        broadcast(
            agents,
            &GameEvent::SetFinished {
                set_no: set_index + 1,
                totals: self.totals.clone(),
            },
        );
        Ok(())
    }

    fn finish_hand(
        &mut self,
        set_index: u8,
        hand_index: u8,
        summary: &HandSummary,
        agents: &mut [Box<dyn PlayerAgent>],
        sink: &mut dyn ScoreSink,
    ) -> Result<(), GameError> {
        let mut row = Vec::with_capacity(self.seats.len());
        let mut results = Vec::with_capacity(self.seats.len());
        for (seat, state) in self.seats.iter_mut().enumerate() {
            let score = summary.scores[seat].delta;
            self.totals[seat] += score;
            row.push(HandRowEntry {
                name: state.name.clone(),
                bid: summary.bids[seat],
                score,
            });
            results.push((summary.bids[seat], summary.tricks_won[seat], score));
            state.reset_for_hand();
        }

        sink.record_hand_row(&row)?;
        broadcast(
            agents,
            &GameEvent::HandScored {
                set_no: set_index + 1,
                hand_no: hand_index + 1,
                results,
            },
        );
        Ok(())
    }
}
