//! FILENAME: dashboard/src/notify.rs
//! User-facing, non-fatal notifications.
//!
//! Outcomes that must stay visible but must not interrupt interaction
//! land here: loaded reports as info, refused exports and rejected
//! fixtures as warnings. The UI drains the queue and renders each entry
//! as a toast/banner.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// One queued message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notification {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}
