//! Transient user-facing notices
//!
//! Nothing here is fatal: every notice is dismissible and the calendar stays
//! interactive after any of them. The sink is injected (see
//! [`NotificationSink`](crate::traits::NotificationSink)) rather than being an
//! ambient global queue.

use std::sync::Mutex;

use uuid::Uuid;

use crate::traits::NotificationSink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// One notice to show the user
#[derive(Clone, Debug)]
pub struct Notice {
    pub id: Uuid,
    pub level: Level,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new<T: ToString, M: ToString>(level: Level, title: T, message: M) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success<M: ToString>(message: M) -> Self {
        Self::new(Level::Success, "", message)
    }
    pub fn warning<M: ToString>(message: M) -> Self {
        Self::new(Level::Warning, "", message)
    }
    pub fn error<M: ToString>(message: M) -> Self {
        Self::new(Level::Error, "", message)
    }
}

/// A sink that keeps every notice in memory until dismissed.
///
/// Good enough for simple embedders, and what the tests use to assert on emitted
/// notices. Everything is also mirrored to the `log` crate at a matching level.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: Mutex<Vec<Notice>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the not-yet-dismissed notices
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notices.lock().unwrap().retain(|notice| notice.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Success => log::info!("{}", notice.message),
            Level::Warning => log::warn!("{}", notice.message),
            Level::Error => log::error!("{}", notice.message),
        }
        self.notices.lock().unwrap().push(notice);
    }
}
