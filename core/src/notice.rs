//! Transient user-visible notices.
//!
//! A notice is shown after a failed operation and disappears on its own
//! after [`NOTICE_TTL`] with no user interaction. At most one notice exists
//! at a time; a newer one replaces the current one and restarts the clock.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A short-lived message with an expiry deadline.
#[derive(Debug, Clone)]
pub struct TransientNotice {
    message: String,
    visible_until: Instant,
}

impl TransientNotice {
    fn new(message: String, now: Instant) -> Self {
        Self {
            message,
            visible_until: now + NOTICE_TTL,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.visible_until
    }
}

/// Holds the single current notice, last write wins.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<TransientNotice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.show_at(message, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(TransientNotice::new(message.into(), now));
    }

    /// The visible message, if any. An expired notice is dropped here rather
    /// than by a background timer.
    pub fn current(&mut self) -> Option<&str> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&mut self, now: Instant) -> Option<&str> {
        if let Some(notice) = &self.current {
            if !notice.is_visible_at(now) {
                self.current = None;
            }
        }
        self.current.as_ref().map(|n| n.message())
    }
}
