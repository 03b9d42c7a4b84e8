use std::time::{Duration, Instant};

use pantry_state::{ToastKind, Toasts};

/// Shows toasts on stderr as `✓ message` / `✗ message`.
pub struct Notifier {
    toasts: Toasts,
    quiet: bool,
}

impl Notifier {
    pub const fn new(duration: Duration, quiet: bool) -> Self {
        Self {
            toasts: Toasts::new(duration),
            quiet,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&mut self, message: String, kind: ToastKind) {
        let now = Instant::now();
        if let Some(expired) = self.toasts.expire(now) {
            tracing::trace!(message = %expired.message, "toast expired");
        }
        let toast = self.toasts.show(message, kind, now);
        if !self.quiet {
            eprintln!("{}", format_toast(toast.kind, &toast.message));
        }
    }
}

fn format_toast(kind: ToastKind, message: &str) -> String {
    format!("{} {message}", kind.symbol())
}
