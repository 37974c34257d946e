//! Fire-and-forget sink for page titles and transient notices.

use std::sync::Mutex;

/// Receives user-facing side effects of navigation.
///
/// Implementations must not fail; nothing is returned to the caller.
pub trait Notifier: Send + Sync {
    /// Shows a transient warning.
    fn warn(&self, text: &str);

    /// Shows a transient error.
    fn error(&self, text: &str);

    /// Sets the page title.
    fn set_title(&self, title: &str);
}

/// Notifier that writes everything to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warn(&self, text: &str) {
        log::warn!("{text}");
    }

    fn error(&self, text: &str) {
        log::error!("{text}");
    }

    fn set_title(&self, title: &str) {
        log::debug!("Title: {title}");
    }
}

/// A notice captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Warn(String),
    Error(String),
    Title(String),
}

/// Notifier that keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices in arrival order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Warning texts in arrival order.
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|n| match n {
            Notice::Warn(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// Error texts in arrival order.
    pub fn errors(&self) -> Vec<String> {
        self.collect(|n| match n {
            Notice::Error(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// The most recently set title.
    pub fn last_title(&self) -> Option<String> {
        self.collect(|n| match n {
            Notice::Title(text) => Some(text.clone()),
            _ => None,
        })
        .pop()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.clear();
        }
    }

    fn collect(&self, pick: impl Fn(&Notice) -> Option<String>) -> Vec<String> {
        self.notices
            .lock()
            .map(|n| n.iter().filter_map(&pick).collect())
            .unwrap_or_default()
    }

    fn push(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, text: &str) {
        self.push(Notice::Warn(text.to_string()));
    }

    fn error(&self, text: &str) {
        self.push(Notice::Error(text.to_string()));
    }

    fn set_title(&self, title: &str) {
        self.push(Notice::Title(title.to_string()));
    }
}
