//! # Notifications
//!
//! Toast messages raised by state transitions and form submissions. The queue
//! keeps the newest notices last and drops the oldest beyond its capacity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of toasts kept on screen.
pub const DEFAULT_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Destructive,
}

/// A toast that has not been queued yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: NoticeKind,
    pub title: String,
}

impl Toast {
    pub fn new(kind: NoticeKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title)
    }

    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new(NoticeKind::Destructive, title)
    }

    pub fn wallet_disconnected() -> Self {
        Self::success("Wallet disconnected")
    }

    pub fn address_copied() -> Self {
        Self::info("Address copied to clipboard")
    }
}

/// A queued toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeQueue {
    notices: VecDeque<Notice>,
    capacity: usize,
    next_id: u64,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NoticeQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            notices: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    /// Queue a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.notices.len() == self.capacity {
            self.notices.pop_front();
        }

        tracing::debug!(id, kind = ?toast.kind, title = %toast.title, "notice queued");
        self.notices.push_back(Notice {
            id,
            kind: toast.kind,
            title: toast.title,
        });
        id
    }

    /// Remove a notice. Returns whether it was still queued.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(Toast::success("Wallet connected"));
        let b = queue.push(Toast::address_copied());
        assert!(b > a);

        let titles: Vec<_> = queue.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["Wallet connected", "Address copied to clipboard"]);
        assert_eq!(queue.iter().last().unwrap().kind, NoticeKind::Info);
    }

    #[test]
    fn test_notice_serializes_kind_lowercase() {
        let mut queue = NoticeQueue::default();
        queue.push(Toast::destructive("Connection failed"));
        let json = serde_json::to_value(queue.iter().next().unwrap()).unwrap();
        assert_eq!(json["kind"], "destructive");
        assert_eq!(json["title"], "Connection failed");
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::default();
        let id = queue.push(Toast::wallet_disconnected());
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_oldest_dropped_beyond_capacity() {
        let mut queue = NoticeQueue::with_capacity(2);
        let first = queue.push(Toast::success("one"));
        queue.push(Toast::success("two"));
        queue.push(Toast::destructive("three"));

        assert_eq!(queue.len(), 2);
        assert!(queue.iter().all(|n| n.id != first));
        assert_eq!(queue.iter().last().unwrap().kind, NoticeKind::Destructive);
    }
}
