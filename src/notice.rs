//! User-facing notices (toasts) raised by canvas actions.

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// An action completed
    Success,
    /// Neutral information
    Info,
}

/// A short message for the user, e.g. "Canvas cleared!".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// FIFO of notices waiting for the presentation layer.
///
/// Posting logs the notice immediately, so headless runs still leave a
/// trace even if nobody drains the queue.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn post(&mut self, notice: Notice) {
        log::info!("Notice: {}", notice);
        self.pending.push_back(notice);
    }

    /// Removes and returns every pending notice, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.pending.drain(..).collect()
    }

}
