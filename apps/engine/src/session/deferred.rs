//! Deferred effects armed when a round finishes.
//!
//! The session never sleeps. It hands `ScheduledEffect`s to its host, the host
//! arms a timer, and when the timer fires the effect comes back as
//! `SessionEvent::Deferred`. Each effect carries the generation of the
//! Finished occurrence that produced it; the session drops any effect whose
//! generation no longer matches.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeferredKind {
    /// After a correct round: rotate the target forward and reset the prompt.
    AdvanceTarget,
    /// After any round: return to NotPlaying.
    ResetToIdle,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScheduledEffect {
    pub kind: DeferredKind,
    /// Generation of the Finished occurrence this effect belongs to.
    pub generation: u64,
    /// How long after entering Finished the effect should fire.
    pub delay: Duration,
}

impl ScheduledEffect {
    pub fn new(kind: DeferredKind, generation: u64, delay: Duration) -> Self {
        Self {
            kind,
            generation,
            delay,
        }
    }
}
