//! Virtual-time round simulator.
//!
//! Drives a `RoundSession` the way a host would, but on a millisecond
//! timeline held in memory: clock ticks, armed deferred effects, one scripted
//! recognizer label per round, and a start intent whenever the session is
//! idle and the readiness gate allows it.

use std::collections::BTreeMap;

use fingerspell::{
    Outcome, Readiness, RoundSession, RoundState, SessionEvent, SessionTransition, Step,
    SymbolCatalog,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

/// Scripted stand-in for the recognizer pipeline.
pub struct ScriptedRecognizer {
    rng: StdRng,
    /// Probability of reporting the target when something is reported.
    accuracy: f64,
    /// Probability of reporting nothing (hand lost, low confidence).
    dropout: f64,
}

impl ScriptedRecognizer {
    pub fn new(seed: u64, accuracy: f64, dropout: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            accuracy,
            dropout,
        }
    }

    /// Label reported while the learner signs `target`.
    pub fn label_for(&mut self, catalog: &SymbolCatalog, target: &str) -> String {
        if self.rng.random_bool(self.dropout) {
            return String::new();
        }
        if self.rng.random_bool(self.accuracy) || catalog.len() < 2 {
            return target.to_string();
        }
        let others: Vec<&str> = catalog
            .names()
            .into_iter()
            .filter(|name| *name != target)
            .collect();
        others[self.rng.random_range(0..others.len())].to_string()
    }
}

/// One finished round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRecord {
    pub round: u32,
    pub target: String,
    pub observed: String,
    pub outcome: Outcome,
    pub finished_at_ms: u64,
}

#[derive(Debug, Clone)]
enum TimelineEvent {
    Tick,
    Session(SessionEvent),
    Predict,
    RequestStart,
}

pub struct Simulator {
    session: RoundSession,
    recognizer: ScriptedRecognizer,
    readiness: Readiness,
    /// Pending events keyed by (due time, insertion order).
    timeline: BTreeMap<(u64, u64), TimelineEvent>,
    seq: u64,
    now_ms: u64,
    records: Vec<RoundRecord>,
}

impl Simulator {
    pub fn new(session: RoundSession, recognizer: ScriptedRecognizer) -> Self {
        Self {
            session,
            recognizer,
            readiness: Readiness::ready(),
            timeline: BTreeMap::new(),
            seq: 0,
            now_ms: 0,
            records: Vec::new(),
        }
    }

    /// Play until `rounds` rounds have finished and the session is idle again.
    pub fn run(mut self, rounds: u32) -> (Vec<RoundRecord>, RoundSession) {
        if rounds == 0 {
            return (self.records, self.session);
        }
        let tick_ms = millis(self.session.config().tick_interval);
        self.schedule(tick_ms, TimelineEvent::Tick);
        self.schedule(0, TimelineEvent::RequestStart);

        while let Some(((due, _), event)) = self.timeline.pop_first() {
            self.now_ms = due;
            match event {
                TimelineEvent::Tick => {
                    self.apply(SessionEvent::Tick, rounds);
                    self.schedule(tick_ms, TimelineEvent::Tick);
                }
                TimelineEvent::Session(event) => self.apply(event, rounds),
                TimelineEvent::Predict => {
                    let target = self.session.target().name().to_string();
                    let label = self.recognizer.label_for(self.session.catalog(), &target);
                    self.apply(SessionEvent::Prediction(label), rounds);
                }
                TimelineEvent::RequestStart => {
                    if self.session.can_start(self.readiness) {
                        self.apply(SessionEvent::Toggle, rounds);
                        // Sign half a tick into the countdown.
                        self.schedule(tick_ms / 2, TimelineEvent::Predict);
                    }
                }
            }

            let done = self.records.len() as u32 >= rounds;
            if done && self.session.state() == RoundState::NotPlaying {
                break;
            }
        }

        (self.records, self.session)
    }

    fn apply(&mut self, event: SessionEvent, rounds: u32) {
        let Step {
            transitions,
            scheduled,
        } = self.session.apply(event);

        for effect in scheduled {
            let due = millis(effect.delay);
            self.schedule(due, TimelineEvent::Session(SessionEvent::Deferred(effect)));
        }

        for transition in transitions {
            match transition {
                SessionTransition::RoundFinished { outcome, .. } => {
                    let record = RoundRecord {
                        round: self.records.len() as u32 + 1,
                        target: self.session.target().name().to_string(),
                        observed: self.session.observed().name().to_string(),
                        outcome,
                        finished_at_ms: self.now_ms,
                    };
                    debug!(
                        round = record.round,
                        target_symbol = %record.target,
                        observed = %record.observed,
                        outcome = ?outcome,
                        "round finished"
                    );
                    self.records.push(record);
                }
                SessionTransition::SessionReset => {
                    if (self.records.len() as u32) < rounds {
                        self.schedule(0, TimelineEvent::RequestStart);
                    }
                }
                _ => {}
            }
        }
    }

    fn schedule(&mut self, delay_ms: u64, event: TimelineEvent) {
        self.seq += 1;
        self.timeline.insert((self.now_ms + delay_ms, self.seq), event);
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
