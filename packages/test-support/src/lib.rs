//! Test support for the joker workspace.
//!
//! Shared by the library's unit tests and the integration tests under
//! `apps/joker/tests`, so both capture the same tracing output.

pub mod logging;
