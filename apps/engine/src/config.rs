//! Engine configuration.
//!
//! Values are injected into each session at construction; nothing is read
//! from shared statics. `EngineConfig::from_env` overlays environment
//! variables on the defaults:
//!
//! - `FINGERSPELL_COUNTDOWN`: ticks per round (default 3)
//! - `FINGERSPELL_TICK_MS`: clock cadence (default 1000)
//! - `FINGERSPELL_ADVANCE_DELAY_MS`: delay before a correct round advances the target (default 300)
//! - `FINGERSPELL_RESET_DELAY_MS`: delay before a finished round returns to idle (default 1500)
//! - `FINGERSPELL_CLOCK`: `internal` or `external` (default internal)

use std::time::Duration;

use crate::error::EngineError;

pub const DEFAULT_COUNTDOWN_TOTAL: u32 = 3;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(1500);

/// Where clock ticks come from when a session runs inside the tokio host.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClockSource {
    /// The host owns a fixed-cadence interval.
    Internal,
    /// Ticks only arrive through `SessionHandle::tick`.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub countdown_total: u32,
    pub tick_interval: Duration,
    pub advance_delay: Duration,
    pub reset_delay: Duration,
    pub clock: ClockSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            countdown_total: DEFAULT_COUNTDOWN_TOTAL,
            tick_interval: DEFAULT_TICK_INTERVAL,
            advance_delay: DEFAULT_ADVANCE_DELAY,
            reset_delay: DEFAULT_RESET_DELAY,
            clock: ClockSource::Internal,
        }
    }
}

impl EngineConfig {
    pub fn with_countdown(mut self, countdown_total: u32) -> Self {
        self.countdown_total = countdown_total;
        self
    }

    pub fn with_clock(mut self, clock: ClockSource) -> Self {
        self.clock = clock;
        self
    }

    /// Defaults overlaid with `FINGERSPELL_*` environment variables, validated.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("FINGERSPELL_COUNTDOWN") {
            config.countdown_total = parse_number("FINGERSPELL_COUNTDOWN", &raw)?;
        }
        if let Some(raw) = lookup("FINGERSPELL_TICK_MS") {
            config.tick_interval = parse_millis("FINGERSPELL_TICK_MS", &raw)?;
        }
        if let Some(raw) = lookup("FINGERSPELL_ADVANCE_DELAY_MS") {
            config.advance_delay = parse_millis("FINGERSPELL_ADVANCE_DELAY_MS", &raw)?;
        }
        if let Some(raw) = lookup("FINGERSPELL_RESET_DELAY_MS") {
            config.reset_delay = parse_millis("FINGERSPELL_RESET_DELAY_MS", &raw)?;
        }
        if let Some(raw) = lookup("FINGERSPELL_CLOCK") {
            config.clock = match raw.trim().to_lowercase().as_str() {
                "internal" => ClockSource::Internal,
                "external" => ClockSource::External,
                other => {
                    return Err(EngineError::config(format!(
                        "FINGERSPELL_CLOCK must be 'internal' or 'external', got '{other}'"
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.countdown_total == 0 {
            return Err(EngineError::config("countdown must be at least one tick"));
        }
        if self.tick_interval.is_zero() {
            return Err(EngineError::config("tick interval must be non-zero"));
        }
        if self.reset_delay <= self.advance_delay {
            return Err(EngineError::config(format!(
                "reset delay ({:?}) must be longer than advance delay ({:?})",
                self.reset_delay, self.advance_delay
            )));
        }
        Ok(())
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u32, EngineError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| EngineError::config(format!("{key} must be a non-negative integer, got '{raw}'")))
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, EngineError> {
    parse_number(key, raw).map(|ms| Duration::from_millis(u64::from(ms)))
}
