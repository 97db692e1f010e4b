use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity level for widget toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient toast for overlay rendering next to the panel.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates an info toast with a 5-second TTL.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(5),
        }
    }

    /// Creates a success toast with a 4-second TTL.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(4),
        }
    }

    /// Creates an error toast with a 10-second TTL.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            body: body.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(10),
        }
    }

    /// Returns `true` if this toast has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of toasts that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a toast, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) toasts.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// Removes and returns the oldest non-expired toast.
    pub fn pop(&mut self) -> Option<Notification> {
        self.evict_expired();
        self.items.pop_front()
    }

    /// Returns the number of toasts currently in the queue (including expired).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_beyond_capacity_drops_oldest() {
        let mut queue = NotificationQueue::new(2);
        queue.push(Notification::info("a", "first"));
        queue.push(Notification::info("b", "second"));
        queue.push(Notification::info("c", "third"));

        let visible = queue.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title, "b");
        assert_eq!(visible[1].title, "c");
    }

    #[test]
    fn expired_toasts_are_evicted() {
        let mut queue = NotificationQueue::new(4);
        let mut stale = Notification::success("old", "gone");
        stale.ttl = Duration::ZERO;
        queue.push(stale);
        queue.push(Notification::error("new", "kept"));

        let visible = queue.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "new");
        assert_eq!(visible[0].level, NotificationLevel::Error);
    }

    #[test]
    fn default_queue_is_empty() {
        let queue = NotificationQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn pop_drains_in_order() {
        let mut queue = NotificationQueue::new(4);
        queue.push(Notification::info("a", "first"));
        queue.push(Notification::success("b", "second"));

        assert_eq!(queue.pop().unwrap().title, "a");
        assert_eq!(queue.pop().unwrap().title, "b");
        assert!(queue.pop().is_none());
    }
}
