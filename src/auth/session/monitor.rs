//! Session expiry and inactivity monitor

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use super::types::{ExpiryReason, SessionSnapshot, SessionState};
use crate::config::SessionConfig;

const MIN_CHECK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct Clock {
    started_at: Instant,
    last_activity: Instant,
    started_wall: DateTime<Utc>,
    last_activity_wall: DateTime<Utc>,
    signed_out: bool,
    /// Latched once a terminal state has been observed
    terminal: Option<SessionState>,
}

/// Timer-driven session monitor
///
/// State is derived from two deadlines: the inactivity deadline, pushed back by
/// every `record_activity`, and the absolute lifetime deadline fixed at start.
/// The warning window counts down to whichever of the two comes first.
#[derive(Debug)]
pub struct SessionMonitor {
    id: Uuid,
    inactivity_timeout: Duration,
    warning_before: Duration,
    max_lifetime: Duration,
    check_interval: Duration,
    clock: Mutex<Clock>,
    tx: watch::Sender<SessionState>,
}

impl SessionMonitor {
    /// Start monitoring a session that begins now
    pub fn new(config: &SessionConfig) -> Self {
        let now = Instant::now();
        let wall = Utc::now();
        let (tx, _rx) = watch::channel(SessionState::Active);
        let id = Uuid::new_v4();

        debug!(
            session_id = %id,
            inactivity_timeout_secs = config.inactivity_timeout_secs,
            max_lifetime_secs = config.max_lifetime_secs,
            "Session monitor started"
        );

        Self {
            id,
            inactivity_timeout: config.inactivity_timeout(),
            warning_before: config.warning_before(),
            max_lifetime: config.max_lifetime(),
            // tokio's interval rejects a zero period
            check_interval: config.check_interval().max(MIN_CHECK_INTERVAL),
            clock: Mutex::new(Clock {
                started_at: now,
                last_activity: now,
                started_wall: wall,
                last_activity_wall: wall,
                signed_out: false,
                terminal: None,
            }),
            tx,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Receiver that observes state transitions
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// State the session is (or would be) in at `now`; does not publish
    pub fn state_at(&self, now: Instant) -> SessionState {
        let clock = self.clock.lock();
        self.evaluate(&clock, now)
    }

    fn evaluate(&self, clock: &Clock, now: Instant) -> SessionState {
        if clock.signed_out {
            return SessionState::SignedOut;
        }
        if let Some(terminal) = clock.terminal {
            return terminal;
        }

        // A deadline past the end of representable time never arrives
        let lifetime_deadline = clock.started_at.checked_add(self.max_lifetime);
        let idle_deadline = clock.last_activity.checked_add(self.inactivity_timeout);

        if lifetime_deadline.is_some_and(|deadline| now >= deadline) {
            return SessionState::Expired {
                reason: ExpiryReason::MaxLifetime,
            };
        }
        if idle_deadline.is_some_and(|deadline| now >= deadline) {
            return SessionState::Expired {
                reason: ExpiryReason::Inactivity,
            };
        }

        let next_deadline = match (lifetime_deadline, idle_deadline) {
            (Some(lifetime), Some(idle)) => Some(lifetime.min(idle)),
            (lifetime, idle) => lifetime.or(idle),
        };

        match next_deadline {
            Some(deadline) if deadline - now <= self.warning_before => SessionState::Warning {
                remaining: deadline - now,
            },
            _ => SessionState::Active,
        }
    }

    /// Evaluate at the current instant, latch terminal states and publish
    /// changes of state kind
    pub fn refresh(&self) -> SessionState {
        let state = {
            let mut clock = self.clock.lock();
            let state = self.evaluate(&clock, Instant::now());
            if state.is_terminal() {
                clock.terminal = Some(state);
            }
            state
        };

        let changed = self.tx.send_if_modified(|current| {
            if current.same_kind(&state) {
                false
            } else {
                *current = state;
                true
            }
        });
        if changed {
            info!(session_id = %self.id, ?state, "Session state changed");
        }

        state
    }

    /// Push the inactivity deadline back; returns false once the session has ended
    pub fn record_activity(&self) -> bool {
        {
            let mut clock = self.clock.lock();
            let now = Instant::now();
            if self.evaluate(&clock, now).is_terminal() {
                drop(clock);
                self.refresh();
                return false;
            }
            clock.last_activity = now;
            clock.last_activity_wall = Utc::now();
        }

        !self.refresh().is_terminal()
    }

    /// End the session explicitly
    pub fn sign_out(&self) {
        self.clock.lock().signed_out = true;
        self.refresh();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let now = Instant::now();
        let clock = self.clock.lock();
        SessionSnapshot {
            session_id: self.id,
            started_at: clock.started_wall,
            last_activity_at: clock.last_activity_wall,
            idle_for: now.saturating_duration_since(clock.last_activity),
            state: self.evaluate(&clock, now),
        }
    }

    /// Spawn the background checker; it stops after publishing a terminal state
    pub fn spawn(self: &Arc<Self>) -> JoinHandle<()> {
        let monitor = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(monitor.check_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if monitor.refresh().is_terminal() {
                    debug!(session_id = %monitor.id, "Session monitor stopped");
                    break;
                }
            }
        })
    }
}
