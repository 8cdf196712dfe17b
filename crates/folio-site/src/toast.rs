#![forbid(unsafe_code)]

//! Transient notifications.
//!
//! One toast is visible at a time; showing a new one replaces the old.
//! Each toast has an id so an expiry timer armed for a replaced toast
//! cannot dismiss its successor.

use folio_i18n::Translator;
use folio_runtime::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    /// Translation key of the message.
    pub key: &'static str,
}

#[derive(Debug, Default)]
pub struct ToastState {
    next_id: u64,
    current: Option<Toast>,
}

impl ToastState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing any visible one. Returns its id.
    pub fn show(&mut self, kind: ToastKind, key: &'static str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast { id, kind, key });
        id
    }

    /// Remove toast `id` if it is still the visible one.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn view(&self, frame: &mut Frame, t: &Translator) {
        let Some(toast) = &self.current else {
            return;
        };
        let id = toast.id.to_string();
        frame.with(
            "div",
            &[("class", toast.kind.class()), ("role", "status"), ("data-toast", id.as_str())],
            |f| {
                f.element("p", &[], &t.t(toast.key));
                f.element(
                    "button",
                    &[("type", "button"), ("data-action", "dismiss-toast")],
                    &t.t("toast.dismiss"),
                );
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_expiry_does_not_hide_newer_toast() {
        let mut toasts = ToastState::new();
        let first = toasts.show(ToastKind::Info, "toast.welcome");
        let second = toasts.show(ToastKind::Success, "contact.success");
        assert!(!toasts.expire(first));
        assert_eq!(toasts.current().map(|t| t.id), Some(second));
        assert!(toasts.expire(second));
        assert!(toasts.current().is_none());
    }
}
