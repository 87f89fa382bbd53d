//! Game orchestration: drives hands, sets and the game through the
//! `PlayerAgent` and `ScoreSink` seams.

pub mod agent;
pub mod game;
mod hand;
pub mod sink;

#[cfg(test)]
mod tests_game_flow;

pub use agent::{AgentError, BidView, GameEvent, NamePrompt, PlayView, PlayerAgent, TrumpView};
pub use game::{validate_names, Game, GameError, GameOutcome};
pub use hand::HandSummary;
pub use sink::{HandRowEntry, ScoreSink, SetRowEntry, SinkError};
