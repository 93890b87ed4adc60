//! User-feedback seams
//!
//! The admin core is headless; toasts and confirm dialogs sit behind
//! traits so a desktop shell, a TUI or a test recorder can plug in.

use async_trait::async_trait;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Routes notices through `tracing`; the default for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(notice = message),
            NoticeKind::Error => tracing::warn!(notice = message),
        }
    }
}

/// Asks the user to confirm a destructive action
#[async_trait]
pub trait ConfirmDelete: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Confirms everything; for scripts and demos
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmDelete for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        true
    }
}
