//! Domain-level error type used by the rules core and the game loop.
//!
//! Every `Validation` error is recoverable: the game loop reports it to the
//! seat that caused it and asks the same question again. `Invariant` errors
//! mean the engine itself was driven incorrectly and abort the game.

use thiserror::Error;

use crate::domain::legality::IllegalPlay;

/// What kind of rule or input check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bid outside `0..=cards_per_player`, or the dealer's excluded value.
    InvalidBid,
    /// Card refused by the legal-move validator.
    IllegalCard(IllegalPlay),
    /// Input does not name a card (or names one the seat does not hold).
    UnknownCardToken,
    InvalidSuitChoice,
    InvalidTrumpChoice,
    InvalidJokerAction,
    InvalidHighLowChoice,
    InvalidPlayerNames,
    InvalidConfig,
    OutOfTurn,
    PhaseMismatch,
    InvalidTrumpConversion,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("{1}")]
    Validation(ValidationKind, String),
    /// The engine was driven out of order
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            Self::Validation(kind, _) => Some(*kind),
            Self::Invariant(_) => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(..))
    }
}
