#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod runtime;
pub mod session;
pub mod telemetry;

// Re-exports for public API
pub use config::{ClockSource, EngineConfig};
pub use domain::{evaluate, rotate, Direction, Outcome, Symbol, SymbolCatalog};
pub use error::EngineError;
pub use runtime::{spawn_session, SessionCommand, SessionHandle};
pub use session::{
    PlayPrompt, Readiness, RoundSession, RoundState, ScheduledEffect, SessionEvent,
    SessionSnapshot, SessionTransition, Step,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
