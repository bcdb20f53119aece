//! Notification center.
//!
//! Fire-and-forget toast messages. Each toast lives and dies on its own
//! timers: pushed hidden, made visible shortly after mount so the CSS
//! transition engages, hidden again after the display duration and
//! removed once the fade-out has run. No queue, no de-duplication.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

/// Delay before a freshly mounted toast is made visible
const SHOW_DELAY: Duration = Duration::from_millis(10);

/// How long a toast stays visible
const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Fade-out transition time before removal
const FADE_DURATION: Duration = Duration::from_millis(300);

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

/// Toast severity, mapped onto a CSS modifier class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// One transient toast
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
    severity: Severity,
    visible: bool,
}

/// Handle for emitting toasts, provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
}

impl Notifier {
    pub fn new(toasts: Signal<Vec<Toast>>) -> Self {
        Self { toasts }
    }

    /// Show a transient toast with the given severity
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        self.toasts.write().push(Toast {
            id,
            message: message.into(),
            severity,
            visible: false,
        });

        let mut toasts = self.toasts;
        spawn(async move {
            sleep(SHOW_DELAY).await;
            if let Some(toast) = toasts.write().iter_mut().find(|t| t.id == id) {
                toast.visible = true;
            }

            sleep(DISPLAY_DURATION).await;
            if let Some(toast) = toasts.write().iter_mut().find(|t| t.id == id) {
                toast.visible = false;
            }

            sleep(FADE_DURATION).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

/// Renders every live toast; mounted once at the app root
#[component]
pub fn NotificationLayer() -> Element {
    let toasts = use_context::<Notifier>().toasts;

    rsx! {
        div { class: "notification-layer",
            for toast in toasts().iter() {
                {
                    let severity = toast.severity.class_name();
                    rsx! {
                        div {
                            key: "{toast.id}",
                            class: if toast.visible {
                                "notification {severity} show"
                            } else {
                                "notification {severity}"
                            },
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_class_names() {
        assert_eq!(Severity::Info.class_name(), "info");
        assert_eq!(Severity::Success.class_name(), "success");
        assert_eq!(Severity::Error.class_name(), "error");
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let a = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        let b = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
        assert_ne!(a, b);
    }
}
