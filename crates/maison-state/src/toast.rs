//! # Toast Queue
//!
//! Transient notifications, shown in push order and auto-dismissed after a
//! fixed duration (3000ms by default).
//!
//! ## Lifecycle
//! ```text
//! push("Added to cart") ──► active ──┬── sweep(now) past expiry ──► gone
//!                                    └── dismiss(id)             ──► gone
//! ```
//!
//! Dismissal is idempotent: dismissing an id that has already expired or
//! never existed is a no-op, so a click racing the auto-dismiss timer is
//! harmless. Ids are monotonic and never reused within a queue.
//!
//! Time is passed in explicitly (`sweep`/`active` take a `now`) so the expiry
//! logic is testable without sleeping.

use std::time::{Duration, Instant};

use serde::Serialize;
use ts_rs::TS;

use maison_core::DEFAULT_TOAST_DURATION_MS;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// A queued notification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    #[serde(skip)]
    pushed_at: Instant,
    #[serde(skip)]
    duration: Duration,
}

impl Toast {
    /// When this toast should auto-dismiss.
    pub fn expires_at(&self) -> Instant {
        self.pushed_at + self.duration
    }

    /// Whether this toast is past its expiry at `now`.
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}

/// Queue of active toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a toast with the default auto-dismiss duration; returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.push_with_duration(
            message,
            kind,
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        )
    }

    /// Pushes a toast with an explicit duration; returns its id.
    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            pushed_at: Instant::now(),
            duration,
        });
        id
    }

    /// Removes a toast by id. No-op when the id is absent (already expired,
    /// already dismissed, or never existed).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops every toast past its expiry at `now`.
    pub fn sweep(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.expired(now));
    }

    /// Toasts still visible at `now`, oldest first.
    pub fn active(&self, now: Instant) -> Vec<&Toast> {
        self.toasts.iter().filter(|t| !t.expired(now)).collect()
    }

    /// All queued toasts, including any awaiting a sweep.
    pub fn all(&self) -> &[Toast] {
        &self.toasts
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_order_and_monotonic_ids() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Added to cart", ToastKind::Success);
        let second = queue.push("Out of stock", ToastKind::Error);

        assert!(second > first);
        let messages: Vec<&str> = queue.all().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["Added to cart", "Out of stock"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::new();
        let id = queue.push("Saved", ToastKind::Info);

        queue.dismiss(id);
        queue.dismiss(id); // second dismiss is a no-op
        queue.dismiss(999); // unknown id is a no-op

        assert!(queue.all().is_empty());
    }

    #[test]
    fn test_sweep_expires_by_duration() {
        let mut queue = ToastQueue::new();
        queue.push_with_duration("short", ToastKind::Info, Duration::from_millis(10));
        queue.push("long", ToastKind::Info);

        let later = Instant::now() + Duration::from_millis(100);
        queue.sweep(later);

        let messages: Vec<&str> = queue.all().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["long"]);
    }

    #[test]
    fn test_active_hides_expired_without_sweep() {
        let mut queue = ToastQueue::new();
        queue.push_with_duration("gone", ToastKind::Warning, Duration::from_millis(10));
        let id = queue.push("here", ToastKind::Success);

        let later = Instant::now() + Duration::from_millis(100);
        let active = queue.active(later);

        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);
        // Not removed until swept.
        assert_eq!(queue.all().len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push("a", ToastKind::Info);
        queue.dismiss(first);
        let second = queue.push("b", ToastKind::Info);

        assert!(second > first);
    }
}
