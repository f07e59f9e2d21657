//! Authentication context and hooks for the UI.
//!
//! The session (token + role) is read from storage once, when
//! [`AuthProvider`] mounts, and lives in a `Signal<AuthState>` context from
//! then on. Every write goes through [`sign_in`] / [`sign_out`], which update
//! storage and the signal together, so all mounted views observe a login or
//! logout immediately.

use api::{AiBackend, ApiClient, ApiError};
use dioxus::prelude::*;
use store::{Credentials, Role, VoidNotesConfig};

use crate::components::{Button, ButtonVariant, Status};
use crate::session::make_session;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<Role>,
}

impl AuthState {
    pub fn from_credentials(credentials: Option<Credentials>) -> Self {
        match credentials {
            Some(c) => Self {
                token: Some(c.token),
                role: c.role,
            },
            None => Self::default(),
        }
    }

    pub fn signed_in(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.is_authenticated() && self.role.as_ref() == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::Admin)
    }
}

/// Configuration the views need beyond the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    pub config: VoidNotesConfig,
    pub openai_api_key: Option<String>,
}

impl ClientSettings {
    pub fn ai_backend(&self) -> Result<AiBackend, ApiError> {
        AiBackend::from_config(&self.config.ai, self.openai_api_key.as_deref())
    }
}

/// What a view does with a failed call.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureAction {
    /// 401/403: drop the session; the route guard sends the user to login.
    SignOut,
    /// Show this text in the view's status banner.
    Report(String),
}

pub fn failure_action(err: &ApiError, fallback: &str) -> FailureAction {
    if err.is_auth_failure() {
        FailureAction::SignOut
    } else {
        FailureAction::Report(err.user_message(fallback))
    }
}

/// Banner for any failed enhancement that is not an auth failure.
pub const AI_OFFLINE: &str = "AI Module Offline";

/// Failure policy for the enhancer: the server's message is not shown.
pub fn ai_failure_action(err: &ApiError) -> FailureAction {
    if err.is_auth_failure() {
        FailureAction::SignOut
    } else {
        FailureAction::Report(AI_OFFLINE.to_string())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_settings() -> Signal<ClientSettings> {
    use_context::<Signal<ClientSettings>>()
}

/// Persist a successful login and publish it to every view.
pub fn sign_in(auth: &mut Signal<AuthState>, token: &str, role: Role) {
    make_session().sign_in(token, &role);
    auth.set(AuthState::signed_in(token, role));
}

/// Forget the session in storage and in the context.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    make_session().sign_out();
    auth.set(AuthState::default());
}

/// Copyable access to the typed client, bound to the live session.
#[derive(Clone, Copy, PartialEq)]
pub struct ApiHandle {
    auth: Signal<AuthState>,
    settings: Signal<ClientSettings>,
}

impl ApiHandle {
    /// A client carrying the current token.
    pub fn client(&self) -> ApiClient {
        let token = self.auth.peek().token.clone();
        ApiClient::new(&self.settings.peek().config.api).with_token(token)
    }

    pub fn ai_backend(&self) -> Result<AiBackend, ApiError> {
        self.settings.peek().ai_backend()
    }

    /// Apply the uniform failure policy.
    ///
    /// Returns the banner text, or `None` when the session was ended.
    pub fn fail(&self, err: &ApiError, fallback: &str) -> Option<String> {
        self.apply(failure_action(err, fallback), err, fallback)
    }

    /// Route a failed call: auth failures end the session, the rest hit the banner.
    pub fn report(&self, mut status: Signal<Option<Status>>, err: &ApiError, fallback: &str) {
        if let Some(message) = self.fail(err, fallback) {
            status.set(Some(Status::error(message)));
        }
    }

    /// Like [`ApiHandle::report`], with the enhancer's fixed banner.
    pub fn report_ai(&self, mut status: Signal<Option<Status>>, err: &ApiError) {
        if let Some(message) = self.apply(ai_failure_action(err), err, AI_OFFLINE) {
            status.set(Some(Status::error(message)));
        }
    }

    fn apply(&self, action: FailureAction, err: &ApiError, context: &str) -> Option<String> {
        match action {
            FailureAction::SignOut => {
                tracing::info!("session rejected by the server ({err}), signing out");
                let mut auth = self.auth;
                sign_out(&mut auth);
                None
            }
            FailureAction::Report(message) => {
                tracing::error!("{context}: {err}");
                Some(message)
            }
        }
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        auth: use_auth(),
        settings: use_settings(),
    }
}

/// Provider component that owns the session and client settings.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(settings: ClientSettings, children: Element) -> Element {
    let auth_state = use_signal(|| AuthState::from_credentials(make_session().credentials()));
    let settings = use_signal(move || settings);

    use_context_provider(|| auth_state);
    use_context_provider(|| settings);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        sign_out(&mut auth_state);
        on_signed_out.call(());
    };

    rsx! {
        Button {
            variant: ButtonVariant::Danger,
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_credentials() {
        assert_eq!(AuthState::from_credentials(None), AuthState::default());

        let state = AuthState::from_credentials(Some(Credentials {
            token: "t".into(),
            role: Some(Role::Admin),
        }));
        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert!(!state.has_role(&Role::User));
    }

    #[test]
    fn test_role_without_token_grants_nothing() {
        let state = AuthState {
            token: None,
            role: Some(Role::Admin),
        };
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
    }

    #[test]
    fn test_auth_failures_sign_out() {
        for err in [
            ApiError::from_status(401, ""),
            ApiError::from_status(403, r#"{"message":"Admins only"}"#),
            ApiError::MissingToken,
        ] {
            assert_eq!(failure_action(&err, "Server Error"), FailureAction::SignOut);
        }
    }

    #[test]
    fn test_other_failures_are_reported() {
        let err = ApiError::from_status(500, r#"{"message":"db down"}"#);
        assert_eq!(
            failure_action(&err, "Server Error"),
            FailureAction::Report("db down".into())
        );

        let err = ApiError::Network("offline".into());
        assert_eq!(
            failure_action(&err, "Server Error"),
            FailureAction::Report("Server Error".into())
        );
    }

    #[test]
    fn test_enhancer_failure_hides_server_message() {
        let err = ApiError::from_status(500, r#"{"message":"Summarizer crashed"}"#);
        assert_eq!(
            ai_failure_action(&err),
            FailureAction::Report(AI_OFFLINE.into())
        );
        assert_eq!(
            ai_failure_action(&ApiError::Network("offline".into())),
            FailureAction::Report(AI_OFFLINE.into())
        );
        assert_eq!(
            ai_failure_action(&ApiError::from_status(401, "")),
            FailureAction::SignOut
        );
    }

    #[test]
    fn test_settings_default_to_service_backend() {
        let settings = ClientSettings::default();
        assert_eq!(settings.ai_backend().unwrap(), AiBackend::Service);
    }
}
