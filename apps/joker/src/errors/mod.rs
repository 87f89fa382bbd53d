//! Error handling for the joker engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
