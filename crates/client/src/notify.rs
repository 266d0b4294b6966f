//! Toast notifications.
//!
//! Every user-facing operation reports its outcome as a [`Toast`]. Stores
//! hand toasts to a [`Notifier`]; the UI layer decides how to show them.

use tokio::sync::broadcast;

/// Visual treatment of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Sink for toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

const DEFAULT_CAPACITY: usize = 64;

/// Fan-out toast channel.
///
/// Any number of subscribers each receive every toast published after they
/// subscribed. Toasts published with no subscriber are dropped.
pub struct ToastBus {
    sender: broadcast::Sender<Toast>,
}

impl ToastBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// Slow receivers observe `RecvError::Lagged` once the buffer fills.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Notifier for ToastBus {
    fn notify(&self, toast: Toast) {
        // A send error only means nobody is listening.
        let _ = self.sender.send(toast);
    }
}

/// Notifier that writes toasts to the log. Handy for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "Toast")
            }
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, description = %toast.description, "Toast")
            }
        }
    }
}
