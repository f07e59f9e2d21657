//! Public landing page with the announcements feed.

use api::{ApiError, Notification};
use dioxus::prelude::*;
use ui::components::{Spinner, Status, StatusBanner};
use ui::{use_api, use_auth, use_settings, NotificationCard, NotificationModal};

use crate::{landing_route, Route};

fn feed_error(err: &ApiError) -> Status {
    Status::error(err.user_message("Could not load announcements"))
}

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let auth = use_auth();
    let settings = use_settings();
    let mut selected = use_signal(|| Option::<Notification>::None);

    let feed = use_resource(move || async move {
        let result = api.client().list_notifications().await;
        if let Err(e) = &result {
            tracing::warn!("announcement feed unavailable: {e}");
        }
        result
    });

    let heading_chars = settings().config.display.heading_chars;
    let session = auth();

    rsx! {
        section {
            class: "hero",
            h1 { "Void Notes" }
            p { class: "hero-tagline", "Capture thoughts, dictate ideas, stay in the loop." }
            div {
                class: "hero-actions",
                match &session.role {
                    Some(role) if session.is_authenticated() => rsx! {
                        Link { to: landing_route(role), class: "btn btn-primary", "Open workspace" }
                    },
                    _ => rsx! {
                        Link { to: Route::Signup {}, class: "btn btn-primary", "Get started" }
                        Link { to: Route::Login {}, class: "btn btn-outline", "Sign in" }
                    },
                }
            }
        }

        section {
            class: "feed",
            h2 { "Announcements" }
            match &*feed.read() {
                None => rsx! { Spinner { label: "Loading announcements" } },
                Some(Err(e)) => rsx! {
                    StatusBanner { status: feed_error(e) }
                },
                Some(Ok(items)) if items.is_empty() => rsx! {
                    p { class: "empty", "No announcements yet." }
                },
                Some(Ok(items)) => rsx! {
                    div {
                        class: "grid",
                        for (id, item) in items.iter().map(|n| (n.id.clone(), n.clone())) {
                            NotificationCard {
                                key: "{id}",
                                notification: item,
                                heading_chars: heading_chars,
                                on_open: move |n| selected.set(Some(n)),
                            }
                        }
                    }
                },
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
