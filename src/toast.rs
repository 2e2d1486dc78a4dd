//! Transient notification banners.
//!
//! Toasts live in an ordered queue and expire against a deadline swept by the
//! tick handler. Manual removal and expiry share the same removal path, and a
//! toast's deadline is stored on the toast itself, so dismissing one early
//! leaves nothing behind to fire later.

use std::time::{Duration, Instant};

pub type ToastId = u64;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// Ordered toast queue with unique ids and a size cap.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            max_visible: max_visible.max(1),
        }
    }

    /// Append a toast and return its id. The oldest toast is evicted when the
    /// queue is full.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
        now: Instant,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now + duration,
        });
        if self.toasts.len() > self.max_visible {
            self.toasts.remove(0);
        }
        id
    }

    /// Remove the toast with `id` if present. No-op otherwise.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose deadline has passed. Returns how many were
    /// removed so the caller can mark the frame dirty.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        before - self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> ToastQueue {
        ToastQueue::new(8)
    }

    #[test]
    fn show_assigns_unique_ids_in_order() {
        let now = Instant::now();
        let mut q = queue();
        let a = q.show("one", ToastKind::Info, DEFAULT_TOAST_DURATION, now);
        let b = q.show("two", ToastKind::Success, DEFAULT_TOAST_DURATION, now);
        assert_ne!(a, b);
        let messages: Vec<_> = q.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["one", "two"]);
    }

    #[test]
    fn expiry_removes_exactly_once() {
        let now = Instant::now();
        let mut q = queue();
        q.show("bye", ToastKind::Info, Duration::from_millis(100), now);
        assert_eq!(q.sweep_expired(now + Duration::from_millis(50)), 0);
        assert_eq!(q.sweep_expired(now + Duration::from_millis(150)), 1);
        assert!(q.is_empty());
        // A later sweep finds nothing left to remove.
        assert_eq!(q.sweep_expired(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn manual_removal_cancels_the_deadline() {
        let now = Instant::now();
        let mut q = queue();
        let id = q.show("bye", ToastKind::Warning, Duration::from_millis(100), now);
        assert!(q.remove(id));
        // The expiry sweep must not act a second time.
        assert_eq!(q.sweep_expired(now + Duration::from_secs(1)), 0);
        // Removing an unknown id is a no-op.
        assert!(!q.remove(id));
        assert!(!q.remove(999));
    }

    #[test]
    fn independent_deadlines() {
        let now = Instant::now();
        let mut q = queue();
        q.show("short", ToastKind::Info, Duration::from_millis(100), now);
        let long = q.show("long", ToastKind::Info, Duration::from_millis(500), now);
        assert_eq!(q.sweep_expired(now + Duration::from_millis(200)), 1);
        assert_eq!(q.len(), 1);
        assert_eq!(q.iter().next().unwrap().id, long);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let now = Instant::now();
        let mut q = ToastQueue::new(2);
        q.show("a", ToastKind::Info, DEFAULT_TOAST_DURATION, now);
        q.show("b", ToastKind::Info, DEFAULT_TOAST_DURATION, now);
        q.show("c", ToastKind::Info, DEFAULT_TOAST_DURATION, now);
        let messages: Vec<_> = q.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["b", "c"]);
    }
}
