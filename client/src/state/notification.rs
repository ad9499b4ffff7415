//! Single-slot toast notification.
//!
//! A new notification evicts the current one. Ids only grow, so timers
//! scheduled for an evicted toast find a different id and do nothing.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Lifetime of a notification before it starts fading out.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Duration of the fade-out transition.
pub const FADE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Fade-out in progress.
    pub leaving: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Show a notification, replacing any existing one. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, message: message.into(), kind, leaving: false });
        id
    }

    /// Start the fade-out for `id`. Returns `true` if it was the live one.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Remove `id` immediately. Returns `true` if it was the live one.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
