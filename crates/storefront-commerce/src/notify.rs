//! User-facing notification port.
//!
//! Cart operations report their outcome ("Item added to cart.", "Maximum
//! stock reached.") through this seam instead of calling a toast widget
//! directly, so the cart logic stays testable without a rendering layer.

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The action succeeded.
    Success,
    /// The action was rejected or failed.
    Error,
}

/// Transient, fire-and-forget message channel toward the shopper.
///
/// Implementations surface the message however the UI shell does it
/// (toast, banner, log). The cart never awaits or queries the channel.
pub trait Notifier: Send + Sync {
    /// Push a notice. At most one is emitted per cart operation.
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that forwards notices to the tracing subscriber.
///
/// The default wiring outside a UI shell.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!(notice = message, "cart notice"),
            NoticeKind::Error => tracing::warn!(notice = message, "cart notice"),
        }
    }
}

/// Notifier that drops every notice.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _kind: NoticeKind, _message: &str) {}
}
