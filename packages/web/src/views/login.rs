//! Login page view with email/password form.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, Status, StatusBanner};
use ui::{sign_in, use_api, use_auth};

use crate::{landing_route, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<Status>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the workspace
    use_effect(move || {
        let state = auth();
        if let (true, Some(role)) = (state.is_authenticated(), state.role.as_ref()) {
            nav.replace(landing_route(role));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let body = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if body.email.is_empty() || body.password.is_empty() {
                error.set(Some(Status::error("Email and password are required")));
                return;
            }

            loading.set(true);
            match api.client().login(&body).await {
                Ok(session) => {
                    sign_in(&mut auth, &session.token, session.role.clone());
                    nav.replace(landing_route(&session.role));
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    error.set(Some(Status::error(
                        e.user_message("Invalid email or password. Please try again."),
                    )));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Sign in to your Void Notes account" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                StatusBanner { status: error() }

                div {
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "login-password", "Password" }
                    Input {
                        id: "login-password",
                        input_type: "password",
                        placeholder: "••••••",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "wide",
                    submit: true,
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Signup {}, "Create one" }
            }
        }
    }
}
