use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::domain::Direction;
use crate::error::EngineError;
use crate::session::{SessionEvent, SessionSnapshot, SessionTransition};

/// Messages accepted by the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle,
    Tick,
    Prediction(String),
    Navigate(Direction),
    Shutdown,
}

impl SessionCommand {
    /// The session event this command maps to; `None` for `Shutdown`.
    pub fn into_event(self) -> Option<SessionEvent> {
        match self {
            SessionCommand::Toggle => Some(SessionEvent::Toggle),
            SessionCommand::Tick => Some(SessionEvent::Tick),
            SessionCommand::Prediction(label) => Some(SessionEvent::Prediction(label)),
            SessionCommand::Navigate(direction) => Some(SessionEvent::Navigate(direction)),
            SessionCommand::Shutdown => None,
        }
    }
}

/// Cloneable handle used by the presentation layer and the recognizer feed.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
    transitions: broadcast::Sender<SessionTransition>,
}

impl SessionHandle {
    pub(crate) fn new(
        commands: mpsc::Sender<SessionCommand>,
        snapshots: watch::Receiver<SessionSnapshot>,
        transitions: broadcast::Sender<SessionTransition>,
    ) -> Self {
        Self {
            commands,
            snapshots,
            transitions,
        }
    }

    pub async fn toggle(&self) -> Result<(), EngineError> {
        self.send(SessionCommand::Toggle).await
    }

    /// Deliver one clock tick (hosts running `ClockSource::External`).
    pub async fn tick(&self) -> Result<(), EngineError> {
        self.send(SessionCommand::Tick).await
    }

    pub async fn predict(&self, label: impl Into<String>) -> Result<(), EngineError> {
        self.send(SessionCommand::Prediction(label.into())).await
    }

    pub async fn navigate(&self, direction: Direction) -> Result<(), EngineError> {
        self.send(SessionCommand::Navigate(direction)).await
    }

    /// Ask the host loop to stop. The session is returned by the join handle.
    pub async fn shutdown(&self) -> Result<(), EngineError> {
        self.send(SessionCommand::Shutdown).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified whenever the snapshot changes.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Receiver of every transition published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionTransition> {
        self.transitions.subscribe()
    }

    /// Forward a recognizer feed into the session until the feed ends or the
    /// host stops.
    pub fn pipe_predictions<S>(&self, feed: S) -> JoinHandle<()>
    where
        S: Stream<Item = String> + Send + Unpin + 'static,
    {
        let commands = self.commands.clone();
        tokio::spawn(async move {
            let mut feed = feed;
            while let Some(label) = feed.next().await {
                if commands
                    .send(SessionCommand::Prediction(label))
                    .await
                    .is_err()
                {
                    debug!("[SESSION HOST] prediction feed detached: host stopped");
                    break;
                }
            }
        })
    }

    async fn send(&self, command: SessionCommand) -> Result<(), EngineError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| EngineError::SessionClosed)
    }
}
