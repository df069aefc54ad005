/*
[INPUT]:  Notification messages and severity levels from controller operations
[OUTPUT]: Transient notification queue with fixed-duration expiry
[POS]:    Notification layer - user-visible operation feedback
[UPDATE]: When changing display duration or severity levels
*/

use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a notification stays visible
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notification, mapped to a display style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    created: Instant,
}

impl Notification {
    fn new(message: String, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            severity,
            created: Instant::now(),
        }
    }

    fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= DISPLAY_DURATION
    }
}

/// Queue of currently visible notifications.
///
/// Entries auto-dismiss after `DISPLAY_DURATION`; `sweep` runs on every UI
/// tick. Emitting never fails and returns nothing.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display a message at the given severity
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(%message, ?severity, "notification");
        self.entries.push(Notification::new(message, severity));
    }

    /// Drop notifications older than the display duration
    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    pub(crate) fn sweep_at(&mut self, now: Instant) {
        self.entries.retain(|entry| !entry.expired_at(now));
    }

    /// Currently visible notifications, oldest first
    pub fn current(&self) -> &[Notification] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
