//! Tokio host for a round session.
//!
//! One task owns the `RoundSession`. Intents, predictions, clock ticks and
//! fired deferred effects all reach it through a single `select!` loop, so
//! each event is applied in full before the next one is read.

pub mod handle;
pub mod host;

pub use handle::{SessionCommand, SessionHandle};
pub use host::spawn_session;
