use serde::Serialize;

use crate::domain::Outcome;
use crate::session::snapshot::SessionSnapshot;
use crate::session::state::RoundState;

/// Edge-triggered notifications derived from two consecutive snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionTransition {
    /// NotPlaying/Finished -> Playing.
    RoundStarted { target: String },

    /// Playing -> NotPlaying via toggle.
    RoundCancelled,

    /// Countdown decreased while the round is still running.
    CountdownAdvanced { remaining: u32 },

    /// Entered a new Finished occurrence.
    RoundFinished { outcome: Outcome, generation: u64 },

    /// Finished -> NotPlaying.
    SessionReset,

    TargetChanged { from: String, to: String },

    ObservationChanged { observed: String },
}

/// Derive transitions from before/after snapshots.
pub fn derive_session_transitions(
    before: &SessionSnapshot,
    after: &SessionSnapshot,
) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    // 1. Target change (manual navigation, auto-advance, or restart from Finished)
    if before.target != after.target {
        transitions.push(SessionTransition::TargetChanged {
            from: before.target.clone(),
            to: after.target.clone(),
        });
    }

    // 2. Observation change
    if before.observed != after.observed {
        transitions.push(SessionTransition::ObservationChanged {
            observed: after.observed.clone(),
        });
    }

    // 3. Round start
    if before.state != RoundState::Playing && after.state == RoundState::Playing {
        transitions.push(SessionTransition::RoundStarted {
            target: after.target.clone(),
        });
    }

    // 4. Countdown, only while the round keeps running
    if before.state == RoundState::Playing
        && after.state == RoundState::Playing
        && after.countdown_remaining < before.countdown_remaining
    {
        transitions.push(SessionTransition::CountdownAdvanced {
            remaining: after.countdown_remaining,
        });
    }

    // 5. Round end
    if after.state == RoundState::Finished && after.generation != before.generation {
        if let Some(outcome) = after.last_outcome {
            transitions.push(SessionTransition::RoundFinished {
                outcome,
                generation: after.generation,
            });
        }
    }

    // 6. Leaving a round without finishing it, or leaving Finished
    if before.state == RoundState::Playing && after.state == RoundState::NotPlaying {
        transitions.push(SessionTransition::RoundCancelled);
    }
    if before.state == RoundState::Finished && after.state == RoundState::NotPlaying {
        transitions.push(SessionTransition::SessionReset);
    }

    transitions
}
