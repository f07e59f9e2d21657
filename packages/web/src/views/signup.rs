//! Registration page view.

use api::SignupRequest;
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input, Label, Status, StatusBanner};
use ui::use_api;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut error = use_signal(|| Option::<Status>::None);
    let mut loading = use_signal(|| false);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let body = SignupRequest {
                username: username().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
            };
            if body.username.is_empty() || body.email.is_empty() || body.password.is_empty() {
                error.set(Some(Status::error("All fields are required")));
                return;
            }

            loading.set(true);
            match api.client().signup(&body).await {
                Ok(_) => {
                    tracing::info!("account created for {}", body.email);
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!("signup failed: {e}");
                    error.set(Some(Status::error(
                        e.user_message("Error signing up. Please try again."),
                    )));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h1 { "Create Account" }
            p { class: "auth-subtitle", "Join the Void Notes community" }

            form {
                class: "auth-form",
                onsubmit: handle_signup,

                StatusBanner { status: error() }

                div {
                    Label { html_for: "signup-username", "Username" }
                    Input {
                        id: "signup-username",
                        placeholder: "Your username",
                        required: true,
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "signup-email", "Email address" }
                    Input {
                        id: "signup-email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "signup-password", "Password" }
                    Input {
                        id: "signup-password",
                        input_type: "password",
                        placeholder: "••••••",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    Label { html_for: "signup-role", "Account role" }
                    select {
                        id: "signup-role",
                        class: "field",
                        value: "{role().as_str()}",
                        onchange: move |evt: FormEvent| role.set(Role::from(evt.value())),
                        option { value: "user", "User account" }
                        option { value: "admin", "Administrator" }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "wide",
                    submit: true,
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
