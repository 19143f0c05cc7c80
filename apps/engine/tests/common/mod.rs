#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;
use std::time::Duration;

use fingerspell::{spawn_session, ClockSource, EngineConfig, RoundSession, SymbolCatalog};
use fingerspell::{SessionHandle, SessionTransition};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

/// Host an alphabet session with default timings on the given clock.
pub fn spawn_alphabet(clock: ClockSource) -> (SessionHandle, JoinHandle<RoundSession>) {
    let session = RoundSession::new(
        Arc::new(SymbolCatalog::standard()),
        EngineConfig::default().with_clock(clock),
    );
    spawn_session(session)
}

/// Advance virtual time (tests run with `start_paused = true`).
pub async fn wait_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Everything currently buffered on a transition receiver.
pub fn drain(rx: &mut broadcast::Receiver<SessionTransition>) -> Vec<SessionTransition> {
    let mut out = Vec::new();
    while let Ok(transition) = rx.try_recv() {
        out.push(transition);
    }
    out
}
