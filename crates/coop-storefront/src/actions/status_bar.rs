//! Status bar actions
//!
//! Middleware report progress and outcomes as notices; the constructors keep
//! call sites to one line per outcome.

use crate::state::{Notice, NoticeKind, NoticeTopic};

/// Actions for the status bar slice
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Record a notice in the feed
    Notify(Notice),
    /// Drop the whole feed
    Clear,
}

impl StatusBarAction {
    pub fn busy(topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self::Notify(Notice::new(NoticeKind::Busy, topic, text))
    }

    pub fn success(topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self::Notify(Notice::new(NoticeKind::Success, topic, text))
    }

    pub fn error(topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self::Notify(Notice::new(NoticeKind::Error, topic, text))
    }

    pub fn warning(topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self::Notify(Notice::new(NoticeKind::Warning, topic, text))
    }

    pub fn info(topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self::Notify(Notice::new(NoticeKind::Info, topic, text))
    }
}
