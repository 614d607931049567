//! User-visible notices from the enhancement walk
//!
//! The UI layer registers its own implementation (toast, status bar);
//! headless runs use the tracing-backed default.

/// Sink for notices the user should see.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: routes notices through `tracing`.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
