//! Session layer: the round state machine and everything it reports.

pub mod deferred;
pub mod presentation;
pub mod snapshot;
pub mod state;
pub mod transition;

#[cfg(test)]
mod test_session_helpers;
#[cfg(test)]
mod tests_deferred;

pub use deferred::{DeferredKind, ScheduledEffect};
pub use presentation::{PlayPrompt, Readiness};
pub use snapshot::SessionSnapshot;
pub use state::{RoundSession, RoundState, SessionEvent, Step};
pub use transition::{derive_session_transitions, SessionTransition};
