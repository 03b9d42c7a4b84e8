//! Single-slot transient notifications.
//!
//! Showing a toast replaces whatever was visible and restarts the display
//! window. Time is passed in so callers (and tests) control the clock.

use std::time::{Duration, Instant};

use serde::Serialize;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Toasts {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> &Toast {
        self.current.insert(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        })
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> &Toast {
        self.show(message, ToastKind::Success, now)
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> &Toast {
        self.show(message, ToastKind::Error, now)
    }

    pub const fn dismiss(&mut self) -> Option<Toast> {
        self.current.take()
    }

    /// Clear the toast if its window has elapsed at `now`, returning it.
    pub fn expire(&mut self, now: Instant) -> Option<Toast> {
        let elapsed = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.duration);
        if elapsed { self.current.take() } else { None }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show_replaces_current() {
        let now = Instant::now();
        let mut toasts = Toasts::default();
        toasts.success("Recipe saved successfully!", now);
        toasts.error("Could not delete recipe", now);
        let current = toasts.current().unwrap();
        assert_eq!(current.kind, ToastKind::Error);
        assert_eq!(current.message, "Could not delete recipe");
    }

    #[test]
    fn expires_after_window() {
        let start = Instant::now();
        let mut toasts = Toasts::default();
        toasts.success("done", start);

        assert!(toasts.expire(start + Duration::from_millis(3999)).is_none());
        assert!(toasts.current().is_some());

        let expired = toasts.expire(start + Duration::from_millis(4000)).unwrap();
        assert_eq!(expired.message, "done");
        assert!(toasts.current().is_none());
    }

    #[test]
    fn new_toast_restarts_window() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(1));
        toasts.success("first", start);
        toasts.success("second", start + Duration::from_millis(900));
        assert!(toasts.expire(start + Duration::from_millis(1500)).is_none());
        assert!(toasts.expire(start + Duration::from_millis(1900)).is_some());
    }

    #[test]
    fn dismiss_clears() {
        let mut toasts = Toasts::default();
        toasts.error("nope", Instant::now());
        assert!(toasts.dismiss().is_some());
        assert!(toasts.dismiss().is_none());
    }
}
