//! Toast lifecycle and timing.
//!
//! DESIGN
//! ======
//! A toast moves strictly forward through `Created -> Visible -> Hidden ->
//! Removed`. Timers drive the forward steps; being superseded by a newer toast
//! jumps straight to `Removed`, after which late timers are ignored.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

/// Delay between insertion and the `show` class (entry animation).
pub const SHOW_DELAY: Duration = Duration::from_millis(100);
/// Delay between insertion and dropping the `show` class.
pub const HIDE_DELAY: Duration = Duration::from_millis(4000);
/// Delay between hiding and detaching from the document.
pub const REMOVE_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    #[default]
    Created,
    Visible,
    Hidden,
    Removed,
}

impl ToastPhase {
    /// Move to `next` if that is a forward step; returns the resulting phase
    /// or `None` when the transition is stale.
    pub fn advance_to(self, next: ToastPhase) -> Option<ToastPhase> {
        (next > self).then_some(next)
    }

    pub fn is_in_document(self) -> bool {
        self != ToastPhase::Removed
    }
}

/// Style variant of a toast. Unknown tags pass through as `Custom`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Custom(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Custom(tag) => tag,
        }
    }

    /// Full class list for the toast element.
    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        match tag.trim() {
            "" | "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            other => Severity::Custom(other.to_owned()),
        }
    }
}
