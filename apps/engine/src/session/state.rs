//! The round state machine.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::{evaluate, rotate, Direction, Outcome, Symbol, SymbolCatalog};
use crate::session::deferred::{DeferredKind, ScheduledEffect};
use crate::session::presentation::{instruction, PlayPrompt, Readiness};
use crate::session::snapshot::SessionSnapshot;
use crate::session::transition::{derive_session_transitions, SessionTransition};

/// Round progression states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundState {
    /// Idle; the target can be changed.
    NotPlaying,
    /// Countdown running; predictions are recorded.
    Playing,
    /// Round evaluated; waiting for the deferred reset or a restart.
    Finished,
}

/// Every input a session accepts. One event is applied completely before the
/// next one is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start/stop intent.
    Toggle,
    /// One unit of the external clock.
    Tick,
    /// Latest recognizer label; empty means nothing identified.
    Prediction(String),
    /// Manual target navigation.
    Navigate(Direction),
    /// A previously scheduled effect whose timer has fired.
    Deferred(ScheduledEffect),
}

/// Result of applying one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub transitions: Vec<SessionTransition>,
    /// Effects the host must arm; only non-empty when a round just finished.
    pub scheduled: Vec<ScheduledEffect>,
}

/// One learner's practice session.
#[derive(Debug, Clone)]
pub struct RoundSession {
    catalog: Arc<SymbolCatalog>,
    config: EngineConfig,
    state: RoundState,
    target: Symbol,
    observed: Symbol,
    countdown_remaining: u32,
    last_outcome: Option<Outcome>,
    play_prompt: PlayPrompt,
    /// Bumped on every entry into Finished.
    generation: u64,
    /// Set once the target moved forward in the current Finished occurrence,
    /// so the auto-advance and a restart toggle never both advance it.
    advanced_this_generation: bool,
}

impl RoundSession {
    pub fn new(catalog: Arc<SymbolCatalog>, config: EngineConfig) -> Self {
        let target = catalog.first().cloned().unwrap_or_else(Symbol::unknown);
        Self {
            countdown_remaining: config.countdown_total,
            catalog,
            config,
            state: RoundState::NotPlaying,
            target,
            observed: Symbol::unknown(),
            last_outcome: None,
            play_prompt: PlayPrompt::CheckSign,
            generation: 0,
            advanced_this_generation: false,
        }
    }

    /// Start on a specific catalog entry instead of the first one.
    /// Names absent from the catalog leave the default target in place.
    pub fn with_target(mut self, name: &str) -> Self {
        if let Some(symbol) = self.catalog.find(name) {
            self.target = symbol.clone();
        }
        self
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn target(&self) -> &Symbol {
        &self.target
    }

    pub fn observed(&self) -> &Symbol {
        &self.observed
    }

    pub fn countdown_remaining(&self) -> u32 {
        self.countdown_remaining
    }

    pub fn countdown_total(&self) -> u32 {
        self.config.countdown_total
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn play_prompt(&self) -> PlayPrompt {
        self.play_prompt
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn catalog(&self) -> &Arc<SymbolCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a host should let the learner start a round right now.
    /// Advisory only: `Toggle` is never refused on these grounds.
    pub fn can_start(&self, readiness: Readiness) -> bool {
        self.state == RoundState::NotPlaying && readiness.is_ready()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            target: self.target.name().to_string(),
            observed: self.observed.name().to_string(),
            countdown_remaining: self.countdown_remaining,
            countdown_total: self.config.countdown_total,
            last_outcome: self.last_outcome,
            result_text: self.last_outcome.map(Outcome::display_text),
            play_prompt: self.play_prompt,
            instruction: instruction(self.state, self.countdown_remaining, &self.target),
            generation: self.generation,
        }
    }

    /// Apply one event and report what changed and what must be scheduled.
    pub fn apply(&mut self, event: SessionEvent) -> Step {
        let before = self.snapshot();
        let scheduled = match event {
            SessionEvent::Toggle => {
                self.toggle();
                Vec::new()
            }
            SessionEvent::Tick => self.tick(),
            SessionEvent::Prediction(label) => {
                self.record_prediction(&label);
                Vec::new()
            }
            SessionEvent::Navigate(direction) => {
                self.navigate(direction);
                Vec::new()
            }
            SessionEvent::Deferred(effect) => {
                self.fire(effect);
                Vec::new()
            }
        };
        let after = self.snapshot();

        Step {
            transitions: derive_session_transitions(&before, &after),
            scheduled,
        }
    }

    fn toggle(&mut self) {
        match self.state {
            RoundState::NotPlaying => {
                if self.target.is_unknown() {
                    debug!("[ROUND SESSION] toggle ignored: catalog has no practicable symbol");
                    return;
                }
                self.start_round();
            }
            RoundState::Playing => {
                self.state = RoundState::NotPlaying;
                self.countdown_remaining = self.config.countdown_total;
                info!(symbol = %self.target, "[ROUND SESSION] round stopped");
            }
            RoundState::Finished => {
                if !self.advanced_this_generation {
                    self.advance_target();
                }
                self.start_round();
            }
        }
    }

    fn start_round(&mut self) {
        self.state = RoundState::Playing;
        self.countdown_remaining = self.config.countdown_total;
        self.last_outcome = None;
        info!(
            symbol = %self.target,
            countdown = self.countdown_remaining,
            "[ROUND SESSION] round started"
        );
    }

    fn tick(&mut self) -> Vec<ScheduledEffect> {
        if self.state != RoundState::Playing {
            return Vec::new();
        }

        self.countdown_remaining = self.countdown_remaining.saturating_sub(1);
        debug!(
            remaining = self.countdown_remaining,
            "[ROUND SESSION] tick"
        );

        if self.countdown_remaining == 0 {
            self.finish_round()
        } else {
            Vec::new()
        }
    }

    fn finish_round(&mut self) -> Vec<ScheduledEffect> {
        let outcome = evaluate(&self.target, &self.observed);
        self.last_outcome = Some(outcome);
        self.state = RoundState::Finished;
        self.generation += 1;
        self.advanced_this_generation = false;
        if outcome != Outcome::Correct {
            self.play_prompt = PlayPrompt::TryAgain;
        }

        info!(
            symbol = %self.target,
            observed = %self.observed,
            outcome = ?outcome,
            generation = self.generation,
            "[ROUND SESSION] round finished"
        );

        let mut scheduled = Vec::with_capacity(2);
        if outcome == Outcome::Correct {
            scheduled.push(ScheduledEffect::new(
                DeferredKind::AdvanceTarget,
                self.generation,
                self.config.advance_delay,
            ));
        }
        scheduled.push(ScheduledEffect::new(
            DeferredKind::ResetToIdle,
            self.generation,
            self.config.reset_delay,
        ));
        scheduled
    }

    fn record_prediction(&mut self, label: &str) {
        if self.state == RoundState::Finished {
            debug!(label, "[ROUND SESSION] prediction ignored: round already evaluated");
            return;
        }
        self.observed = self.catalog.resolve(label);
    }

    fn navigate(&mut self, direction: Direction) {
        if self.state != RoundState::NotPlaying {
            debug!(
                ?direction,
                state = ?self.state,
                "[ROUND SESSION] navigation ignored outside NotPlaying"
            );
            return;
        }
        self.target = rotate(&self.catalog, self.target.name(), direction);
        self.play_prompt = PlayPrompt::CheckSign;
    }

    fn fire(&mut self, effect: ScheduledEffect) {
        if self.state != RoundState::Finished || effect.generation != self.generation {
            debug!(
                kind = ?effect.kind,
                scheduled_for = effect.generation,
                current = self.generation,
                state = ?self.state,
                "[ROUND SESSION] stale deferred effect dropped"
            );
            return;
        }

        match effect.kind {
            DeferredKind::AdvanceTarget => {
                if !self.advanced_this_generation {
                    self.advance_target();
                }
            }
            DeferredKind::ResetToIdle => {
                self.state = RoundState::NotPlaying;
                self.countdown_remaining = self.config.countdown_total;
                self.last_outcome = None;
                info!(symbol = %self.target, "[ROUND SESSION] reset to idle");
            }
        }
    }

    fn advance_target(&mut self) {
        self.target = rotate(&self.catalog, self.target.name(), Direction::Forward);
        self.play_prompt = PlayPrompt::CheckSign;
        self.advanced_this_generation = true;
    }
}
