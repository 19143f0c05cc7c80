use thiserror::Error;

/// Errors raised at the fallible edges of the engine.
///
/// The round state machine itself is total; only configuration and the
/// channel to a running session host can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Session host is no longer running")]
    SessionClosed,
}

impl EngineError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Config { .. } => "CONFIG_ERROR",
            EngineError::SessionClosed => "SESSION_CLOSED",
        }
    }
}
