use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::ClockSource;
use crate::runtime::handle::{SessionCommand, SessionHandle};
use crate::session::{
    RoundSession, ScheduledEffect, SessionEvent, SessionSnapshot, SessionTransition,
};

const COMMAND_BUFFER: usize = 64;
const TRANSITION_BUFFER: usize = 64;

/// Move `session` onto its own task and return a handle to drive it.
///
/// The join handle yields the session back once the loop stops (shutdown
/// command, or every handle dropped).
pub fn spawn_session(session: RoundSession) -> (SessionHandle, JoinHandle<RoundSession>) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());
    let (transition_tx, _) = broadcast::channel(TRANSITION_BUFFER);

    let handle = SessionHandle::new(command_tx, snapshot_rx, transition_tx.clone());
    let join = tokio::spawn(run_session(session, command_rx, snapshot_tx, transition_tx));
    (handle, join)
}

async fn run_session(
    mut session: RoundSession,
    mut commands: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<SessionSnapshot>,
    transitions: broadcast::Sender<SessionTransition>,
) -> RoundSession {
    let config = session.config().clone();
    let (deferred_tx, mut deferred_rx) = mpsc::unbounded_channel::<ScheduledEffect>();

    let mut clock = match config.clock {
        ClockSource::Internal => {
            let mut clock = interval_at(Instant::now() + config.tick_interval, config.tick_interval);
            clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Some(clock)
        }
        ClockSource::External => None,
    };

    info!(
        target_symbol = %session.target(),
        countdown = config.countdown_total,
        clock = ?config.clock,
        "[SESSION HOST] started"
    );

    loop {
        // Commands first: a prediction queued alongside the terminal tick must
        // land before that tick evaluates the round.
        let event = tokio::select! {
            biased;

            command = commands.recv() => {
                match command.and_then(SessionCommand::into_event) {
                    Some(event) => event,
                    None => break,
                }
            }
            Some(effect) = deferred_rx.recv() => SessionEvent::Deferred(effect),
            _ = next_tick(&mut clock) => SessionEvent::Tick,
        };

        let step = session.apply(event);

        for effect in step.scheduled {
            arm(effect, deferred_tx.clone());
        }
        for transition in step.transitions {
            // No subscribers is fine.
            let _ = transitions.send(transition);
        }

        let snapshot = session.snapshot();
        snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }

    info!(
        generation = session.generation(),
        "[SESSION HOST] stopped"
    );
    session
}

async fn next_tick(clock: &mut Option<Interval>) {
    match clock {
        Some(clock) => {
            clock.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

fn arm(effect: ScheduledEffect, deferred_tx: mpsc::UnboundedSender<ScheduledEffect>) {
    debug!(
        kind = ?effect.kind,
        generation = effect.generation,
        delay_ms = delay_millis(effect.delay),
        "[SESSION HOST] deferred effect armed"
    );
    tokio::spawn(async move {
        sleep(effect.delay).await;
        // The loop may have stopped meanwhile; nothing to deliver to then.
        let _ = deferred_tx.send(effect);
    });
}

/// Milliseconds for log fields, saturating instead of truncating.
fn delay_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
