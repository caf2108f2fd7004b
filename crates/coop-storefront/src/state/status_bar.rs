//! Status Bar State
//!
//! A bounded feed of feedback notices from the middleware. Only the newest
//! notice is rendered; the rest stay behind as a short history.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Concern area a notice reports on, rendered as a bracketed tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTopic {
    Session,
    Cart,
    Catalog,
    Order,
    Checkout,
}

impl NoticeTopic {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeTopic::Session => "session",
            NoticeTopic::Cart => "cart",
            NoticeTopic::Catalog => "catalog",
            NoticeTopic::Order => "order",
            NoticeTopic::Checkout => "checkout",
        }
    }
}

/// Severity of a notice; drives glyph and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// An operation is in flight
    Busy,
    Success,
    Error,
    /// Rejected before any request was made (empty cart, invalid form)
    Warning,
    Info,
}

impl NoticeKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            NoticeKind::Busy => "…",
            NoticeKind::Success => "✔",
            NoticeKind::Error => "✘",
            NoticeKind::Warning => "!",
            NoticeKind::Info => "·",
        }
    }
}

/// One entry in the feedback feed
#[derive(Debug, Clone)]
pub struct Notice {
    pub at: DateTime<Local>,
    pub kind: NoticeKind,
    pub topic: NoticeTopic,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, topic: NoticeTopic, text: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            kind,
            topic,
            text: text.into(),
        }
    }
}

/// Status bar state, newest notice at the back
#[derive(Debug, Clone)]
pub struct StatusBarState {
    pub notices: VecDeque<Notice>,
    /// History cap; the oldest notice drops first
    pub capacity: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            notices: VecDeque::new(),
            capacity: 100,
        }
    }
}

impl StatusBarState {
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Append a notice, trimming the history to its cap
    pub fn record(&mut self, notice: Notice) {
        self.notices.push_back(notice);
        while self.notices.len() > self.capacity {
            self.notices.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
