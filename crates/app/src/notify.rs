use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{use_toast, ToastOptions, Toasts};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "Ushuari";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
fn send_desktop(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "Failed to show desktop notification");
        }
    }
}

/// Fire-and-forget user feedback: a toast, mirrored as a desktop
/// notification when running on the desktop platform.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        send_desktop("Ushuari", &message);
        self.toasts.success(message, ToastOptions::new());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        send_desktop("Ushuari", &message);
        self.toasts.error(message, ToastOptions::new());
    }

    /// Error toast carrying the server's message for a failed call.
    pub fn server_error(&self, err: &ServerFnError) {
        self.error(AppError::friendly_message(&err.to_string()));
    }
}

pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toast(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_desktop_noop_does_not_panic() {
        send_desktop("Ushuari", "Organization approved");
    }
}
