use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible
pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
/// Exit transition after the visible period
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Leaving,
    Gone,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.shown_at);
        if age < TOAST_VISIBLE {
            ToastPhase::Visible
        } else if age < TOAST_VISIBLE + TOAST_EXIT {
            ToastPhase::Leaving
        } else {
            ToastPhase::Gone
        }
    }
}

/// Stack of transient banners, oldest first.
/// Each toast runs on its own clock; expiry is checked on every tick.
#[derive(Debug, Default)]
pub struct ToastStack {
    items: VecDeque<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push_back(Toast {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message, Instant::now());
    }

    /// Drop every toast whose exit transition has finished
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| t.phase(now) != ToastPhase::Gone);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Toast> {
        self.items.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push(ToastKind::Success, "saved", start);
        let toast = stack.last().unwrap();

        assert_eq!(toast.phase(start), ToastPhase::Visible);
        assert_eq!(toast.phase(start + Duration::from_millis(2999)), ToastPhase::Visible);
        assert_eq!(toast.phase(start + Duration::from_millis(3000)), ToastPhase::Leaving);
        assert_eq!(toast.phase(start + Duration::from_millis(3299)), ToastPhase::Leaving);
        assert_eq!(toast.phase(start + Duration::from_millis(3300)), ToastPhase::Gone);
    }

    #[test]
    fn test_toasts_expire_independently() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.push(ToastKind::Success, "first", start);
        stack.push(ToastKind::Error, "second", start + Duration::from_secs(2));
        assert_eq!(stack.len(), 2);

        stack.prune(start + Duration::from_millis(3400));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.last().unwrap().message, "second");

        stack.prune(start + Duration::from_millis(5400));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let now = Instant::now();
        let mut stack = ToastStack::new();
        stack.push(ToastKind::Success, "a", now);
        stack.push(ToastKind::Error, "b", now);
        let messages: Vec<&str> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }
}
