use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
    shown_at: Instant,
    timeout: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, timeout: Duration, now: Instant) -> Self {
        Self {
            kind: ToastKind::Success,
            title: None,
            message: message.into(),
            shown_at: now,
            timeout,
        }
    }

    pub fn error(
        title: impl Into<String>,
        message: impl Into<String>,
        timeout: Duration,
        now: Instant,
    ) -> Self {
        Self {
            kind: ToastKind::Error,
            title: Some(title.into()),
            message: message.into(),
            shown_at: now,
            timeout,
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.timeout
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, message = %toast.message, "showing toast");
        self.items.push(toast);
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| !toast.is_expired(now));
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.items.iter().map(|toast| toast.remaining(now)).min()
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
}
