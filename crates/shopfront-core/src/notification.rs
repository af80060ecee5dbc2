//! Transient notification widget.
//!
//! Auto-dismissing toast messages for success/warning/error feedback.
//! At most one notification is visible at a time: new calls supersede the
//! current one, they never queue.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::view::StorefrontView;

/// How long a notification stays visible before auto-dismissal.
pub const DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Length of the exit transition played before removal.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Notification severity, each with a fixed display color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    #[default]
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// The kind-specific display color.
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Warning => "#ff9800",
            NotificationKind::Error => "#f44336",
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub kind: NotificationKind,
}

/// Schedules the deferred auto-dismissal of a notification.
///
/// The frontend implements this with an explicit scheduled-task handle;
/// a center without a scheduler never auto-dismisses (tests drive
/// `dismiss` directly).
pub trait DismissScheduler: Send + Sync {
    fn schedule_dismiss(&self, notification: &Notification);
}

/// Owns the currently displayed notification and the supersede policy.
pub struct NotificationCenter {
    view: Arc<dyn StorefrontView>,
    scheduler: Option<Arc<dyn DismissScheduler>>,
    current: Mutex<Option<Notification>>,
}

impl NotificationCenter {
    /// Creates a center rendering through the given view, with no
    /// auto-dismiss scheduling.
    pub fn new(view: Arc<dyn StorefrontView>) -> Self {
        Self {
            view,
            scheduler: None,
            current: Mutex::new(None),
        }
    }

    /// Attaches an auto-dismiss scheduler.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn DismissScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Displays a notification, superseding any currently displayed one.
    ///
    /// Returns the displayed notification so callers can correlate a later
    /// `dismiss`.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        };

        {
            let mut current = self
                .current
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(existing) = current.take() {
                self.view.remove_notification(&existing);
            }
            *current = Some(notification.clone());
        }

        tracing::debug!(kind = ?notification.kind, "notification: {}", notification.message);
        self.view.show_notification(&notification);

        if let Some(scheduler) = &self.scheduler {
            scheduler.schedule_dismiss(&notification);
        }

        notification
    }

    /// Displays a success notification (the default kind).
    pub fn notify_default(&self, message: impl Into<String>) -> Notification {
        self.notify(message, NotificationKind::Success)
    }

    /// Dismisses the notification with the given id.
    ///
    /// A stale id (the notification was already superseded or dismissed)
    /// is a no-op, so a superseded notification's pending auto-dismiss
    /// fires harmlessly.
    pub fn dismiss(&self, id: Uuid) {
        let removed = {
            let mut current = self
                .current
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            match current.as_ref() {
                Some(n) if n.id == id => current.take(),
                _ => None,
            }
        };

        if let Some(notification) = removed {
            self.view.remove_notification(&notification);
        }
    }

    /// Returns a copy of the currently displayed notification, if any.
    pub fn current(&self) -> Option<Notification> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
