use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A one-line outcome message shown above a form or list.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

#[component]
pub fn StatusBanner(status: Option<Status>, on_dismiss: Option<EventHandler<()>>) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };

    let class = match status.kind {
        StatusKind::Error => "status-banner error",
        StatusKind::Success => "status-banner success",
    };

    rsx! {
        div {
            class: class,
            role: if status.is_error() { "alert" } else { "status" },
            match status.kind {
                StatusKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
                StatusKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
            }
            span { class: "status-message", "{status.message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "status-dismiss",
                    r#type: "button",
                    title: "Dismiss",
                    onclick: move |_| handler.call(()),
                    "✕"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_are_alerts() {
        assert!(Status::error("Error saving note").is_error());
        assert!(!Status::success("Note saved").is_error());
    }
}
