//! Admin console: broadcast announcements, prune the feed, manage users.

use api::{Attachment, Notification, NotificationDraft, UserRecord};
use dioxus::prelude::*;
use store::Role;
use ui::browser::confirm;
use ui::components::{
    Button, ButtonVariant, Input, Label, Spinner, Status, StatusBanner, Textarea,
};
use ui::display::format_feed_date;
use ui::icons::{FaPaperPlane, FaTrash};
use ui::{use_api, use_settings, Icon, ImagePicker, NotificationCard, NotificationModal};

use crate::Protected;

#[component]
pub fn Admin() -> Element {
    rsx! {
        Protected {
            allowed: vec![Role::Admin],
            Dashboard {}
        }
    }
}

/// Multipart body for a broadcast, or `None` when the message is blank.
fn broadcast_draft(
    message: &str,
    title: &str,
    image: Option<Attachment>,
) -> Option<NotificationDraft> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }
    let title = Some(title.trim().to_string()).filter(|t| !t.is_empty());
    Some(NotificationDraft {
        message: message.to_string(),
        title,
        image,
    })
}

/// Display strings for one row of the user table.
#[derive(Debug, Clone, PartialEq)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: String,
    joined: String,
}

impl From<UserRecord> for UserRow {
    fn from(user: UserRecord) -> Self {
        Self {
            name: user.display_name().to_string(),
            joined: match user.created_at {
                Some(at) => format_feed_date(Some(at)),
                None => "-".to_string(),
            },
            role: user.role.to_string(),
            id: user.id,
            email: user.email,
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let api = use_api();
    let settings = use_settings();
    let mut message = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut image = use_signal(|| Option::<Attachment>::None);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut posting = use_signal(|| false);
    let mut announcements = use_signal(Vec::<Notification>::new);
    let mut users = use_signal(Vec::<UserRecord>::new);
    let mut selected = use_signal(|| Option::<Notification>::None);

    let heading_chars = settings().config.display.heading_chars;

    let mut feed = use_resource(move || async move {
        match api.client().list_notifications().await {
            Ok(items) => announcements.set(items),
            Err(e) => api.report(status, &e, "Could not load announcements"),
        }
    });

    let roster = use_resource(move || async move {
        match api.client().list_users().await {
            Ok(list) => users.set(list),
            Err(e) => api.report(status, &e, "Could not load users"),
        }
    });

    let broadcast = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(draft) = broadcast_draft(&message(), &title(), image()) else {
                status.set(Some(Status::error("Write a message before broadcasting")));
                return;
            };

            posting.set(true);
            status.set(None);
            match api.client().broadcast_notification(draft).await {
                Ok(()) => {
                    message.set(String::new());
                    title.set(String::new());
                    image.set(None);
                    status.set(Some(Status::success("Notification posted successfully!")));
                    feed.restart();
                }
                Err(e) => api.report(status, &e, "Upload Failed. Server might be sleeping."),
            }
            posting.set(false);
        });
    };

    let delete_announcement = move |id: String| async move {
        if !confirm("Delete this announcement?") {
            return;
        }
        match api.client().delete_notification(&id).await {
            Ok(()) => {
                announcements.write().retain(|n| n.id != id);
                status.set(Some(Status::success("Announcement deleted")));
            }
            Err(e) => api.report(status, &e, "Error deleting announcement"),
        }
    };

    let delete_user = move |user: UserRecord| async move {
        if !confirm(&format!("Delete user {}?", user.display_name())) {
            return;
        }
        match api.client().delete_user(&user.id).await {
            Ok(()) => {
                users.write().retain(|u| u.id != user.id);
                status.set(Some(Status::success(format!(
                    "Deleted {}",
                    user.display_name()
                ))));
            }
            Err(e) => api.report(status, &e, "Error deleting user"),
        }
    };

    rsx! {
        section {
            class: "dashboard",
            header {
                class: "page-header",
                h1 { "Admin Dashboard" }
            }

            StatusBanner {
                status: status(),
                on_dismiss: move |_| status.set(None),
            }

            form {
                class: "composer card",
                onsubmit: broadcast,
                h2 { "Broadcast an announcement" }
                div {
                    Label { html_for: "broadcast-title", "Title" }
                    Input {
                        id: "broadcast-title",
                        placeholder: "Optional headline",
                        value: title(),
                        disabled: posting(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "broadcast-message", "Message" }
                    Textarea {
                        id: "broadcast-message",
                        placeholder: "What should everyone know?",
                        value: message(),
                        disabled: posting(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                    }
                }
                ImagePicker {
                    attachment: image(),
                    disabled: posting(),
                    on_pick: move |picked| image.set(picked),
                }
                div {
                    class: "composer-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        submit: true,
                        disabled: posting(),
                        Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        if posting() { " Broadcasting..." } else { " Broadcast" }
                    }
                }
            }

            h2 { "Announcements" }
            if feed.read().is_none() {
                Spinner { label: "Loading announcements" }
            } else if announcements().is_empty() {
                p { class: "empty", "Nothing has been broadcast yet." }
            } else {
                div {
                    class: "grid",
                    for (id, item) in announcements().into_iter().map(|n| (n.id.clone(), n)) {
                        NotificationCard {
                            key: "{id}",
                            notification: item,
                            heading_chars: heading_chars,
                            on_open: move |n| selected.set(Some(n)),
                            on_delete: delete_announcement,
                        }
                    }
                }
            }

            h2 { "Users" }
            if roster.read().is_none() {
                Spinner { label: "Loading users" }
            } else if users().is_empty() {
                p { class: "empty", "No registered users." }
            } else {
                table {
                    class: "user-table",
                    thead {
                        tr {
                            th { "Username" }
                            th { "Email" }
                            th { "Role" }
                            th { "Joined" }
                            th {}
                        }
                    }
                    tbody {
                        for (user, row) in users().into_iter().map(|u| (u.clone(), UserRow::from(u))) {
                            tr {
                                key: "{row.id}",
                                td { "{row.name}" }
                                td { "{row.email}" }
                                td {
                                    span { class: "role-badge role-{row.role}", "{row.role}" }
                                }
                                td { "{row.joined}" }
                                td {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        title: "Delete user",
                                        onclick: move |_| delete_user(user.clone()),
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(notification) = selected() {
            NotificationModal {
                notification: notification,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_broadcast_is_rejected() {
        assert!(broadcast_draft("", "Title", None).is_none());
        assert!(broadcast_draft(" \n ", "", None).is_none());
    }

    #[test]
    fn test_broadcast_trims_fields() {
        let image = Attachment::new("banner.png", vec![0x89, b'P', b'N', b'G']);
        let draft = broadcast_draft("  Maintenance at 22:00 ", "   ", Some(image)).unwrap();
        assert_eq!(draft.message, "Maintenance at 22:00");
        assert!(draft.title.is_none());
        assert_eq!(draft.image.map(|i| i.content_type), Some("image/png".to_string()));
    }

    #[test]
    fn test_user_row_falls_back_to_email() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"u1","username":"","email":"ops@void.dev","role":"admin"}"#,
        )
        .unwrap();
        let row = UserRow::from(user);
        assert_eq!(row.name, "ops@void.dev");
        assert_eq!(row.role, "admin");
        assert_eq!(row.joined, "-");
    }
}
