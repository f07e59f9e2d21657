use api::Notification;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ModalOverlay};
use crate::display::{format_feed_date, format_full_date, truncate_chars};
use crate::icons::{FaBullhorn, FaTrash};
use crate::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|p| p.trim().to_ascii_lowercase()).as_deref() {
            Some("high") | Some("urgent") => Priority::High,
            Some("low") => Priority::Low,
            _ => Priority::Normal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

/// An announcement in the public feed or the admin list.
///
/// The heading is the message cut to `heading_chars`; the full text lives in
/// [`NotificationModal`].
#[component]
pub fn NotificationCard(
    notification: Notification,
    #[props(default = 50)] heading_chars: usize,
    on_open: EventHandler<Notification>,
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let priority = Priority::parse(notification.priority.as_deref());
    let label = priority.label();
    let heading = truncate_chars(&notification.message, heading_chars);
    let date = format_feed_date(notification.created_at);
    let title = notification.display_title().map(str::to_string);
    let image = notification.display_image().map(str::to_string);
    let id = notification.id.clone();

    rsx! {
        article {
            class: "card notification-card priority-{label}",
            onclick: move |_| on_open.call(notification.clone()),
            header {
                class: "card-header",
                Icon { icon: FaBullhorn, width: 14, height: 14 }
                if let Some(title) = title {
                    h3 { class: "card-title", "{title}" }
                }
                time { class: "card-date", "{date}" }
            }
            if let Some(url) = image {
                img { class: "card-image", src: "{url}", alt: "Announcement image" }
            }
            p { class: "notification-heading", "{heading}" }
            if let Some(handler) = on_delete {
                div {
                    class: "card-actions",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    Button {
                        variant: ButtonVariant::Danger,
                        title: "Delete announcement",
                        onclick: move |_| handler.call(id.clone()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Full view of one announcement.
#[component]
pub fn NotificationModal(notification: Notification, on_close: EventHandler<()>) -> Element {
    let priority = Priority::parse(notification.priority.as_deref()).label();
    let title = notification
        .display_title()
        .unwrap_or("Announcement")
        .to_string();
    let when = format_full_date(notification.created_at);
    let image = notification.display_image().map(str::to_string);

    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "notification-modal priority-{priority}",
                h2 { "{title}" }
                if let Some(url) = image {
                    img { class: "modal-image", src: "{url}", alt: "Announcement image" }
                }
                p { class: "notification-message", "{notification.message}" }
                p {
                    class: "notification-meta",
                    "Priority: {priority} | {when}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse(Some("HIGH ")), Priority::High);
        assert_eq!(Priority::parse(Some("low")), Priority::Low);
        assert_eq!(Priority::parse(Some("whatever")), Priority::Normal);
        assert_eq!(Priority::parse(None), Priority::Normal);
    }
}
