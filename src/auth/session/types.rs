//! Session monitor types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Why a session ended on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryReason {
    /// No activity within the inactivity timeout
    Inactivity,
    /// The absolute session lifetime ran out
    MaxLifetime,
}

/// Session state as seen by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    Active,
    /// Expiry is near; `remaining` until the earlier deadline
    Warning { remaining: Duration },
    Expired { reason: ExpiryReason },
    SignedOut,
}

impl SessionState {
    /// Terminal states never change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Expired { .. } | SessionState::SignedOut)
    }

    /// Same variant, ignoring the warning countdown
    pub fn same_kind(&self, other: &SessionState) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Point-in-time view of a monitored session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
    pub idle_for: Duration,
    pub state: SessionState,
}
