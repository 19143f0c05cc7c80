// Shared builders for session unit tests.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::domain::SymbolCatalog;
use crate::session::{DeferredKind, RoundSession, ScheduledEffect, SessionEvent, Step};

/// Session over the full alphabet with default timings (countdown 3).
pub fn alphabet_session() -> RoundSession {
    RoundSession::new(Arc::new(SymbolCatalog::standard()), EngineConfig::default())
}

/// Toggle, optionally predict, then tick until the countdown runs out.
/// Returns the step produced by the finishing tick.
pub fn play_round(session: &mut RoundSession, prediction: Option<&str>) -> Step {
    session.apply(SessionEvent::Toggle);
    if let Some(label) = prediction {
        session.apply(SessionEvent::Prediction(label.to_string()));
    }
    let mut last = Step::default();
    for _ in 0..session.countdown_total() {
        last = session.apply(SessionEvent::Tick);
    }
    last
}

/// Pick the scheduled effect of a given kind out of a step.
pub fn scheduled(step: &Step, kind: DeferredKind) -> Option<ScheduledEffect> {
    step.scheduled.iter().copied().find(|e| e.kind == kind)
}
