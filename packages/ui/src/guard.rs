//! Route access decisions.
//!
//! Pure functions so the routing rules can be tested without a renderer. The
//! web crate's guard component maps [`Access`] onto router navigation.

use store::Role;

use crate::auth::AuthState;

/// Outcome of checking a session against a route's allowed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// No session: go to the login form.
    SignIn,
    /// Signed in with a role the route does not admit: go home.
    Home,
}

/// Decide whether `state` may view a route restricted to `allowed`.
///
/// An empty `allowed` list admits any signed-in user.
pub fn check_access(state: &AuthState, allowed: &[Role]) -> Access {
    if !state.is_authenticated() {
        return Access::SignIn;
    }
    if allowed.is_empty() {
        return Access::Granted;
    }
    match &state.role {
        Some(role) if allowed.contains(role) => Access::Granted,
        _ => Access::Home,
    }
}

/// Where a role lands right after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Notes,
    Admin,
}

pub fn landing_for(role: &Role) -> Landing {
    if role.is_admin() {
        Landing::Admin
    } else {
        Landing::Notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ONLY: &[Role] = &[Role::User];
    const ADMIN_ONLY: &[Role] = &[Role::Admin];

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let anon = AuthState::default();
        assert_eq!(check_access(&anon, USER_ONLY), Access::SignIn);
        assert_eq!(check_access(&anon, ADMIN_ONLY), Access::SignIn);
        assert_eq!(check_access(&anon, &[]), Access::SignIn);
    }

    #[test]
    fn test_admin_unlocks_admin_route_only() {
        let admin = AuthState::signed_in("t", Role::Admin);
        assert_eq!(check_access(&admin, ADMIN_ONLY), Access::Granted);
        assert_eq!(check_access(&admin, USER_ONLY), Access::Home);
    }

    #[test]
    fn test_user_cannot_open_admin_route() {
        let user = AuthState::signed_in("t", Role::User);
        assert_eq!(check_access(&user, USER_ONLY), Access::Granted);
        assert_eq!(check_access(&user, ADMIN_ONLY), Access::Home);
    }

    #[test]
    fn test_token_without_role() {
        let state = AuthState {
            token: Some("t".into()),
            role: None,
        };
        assert_eq!(check_access(&state, USER_ONLY), Access::Home);
        assert_eq!(check_access(&state, &[]), Access::Granted);
    }

    #[test]
    fn test_unknown_role_is_not_elevated() {
        let state = AuthState::signed_in("t", Role::Other("root".into()));
        assert_eq!(check_access(&state, ADMIN_ONLY), Access::Home);
    }

    #[test]
    fn test_landing() {
        assert_eq!(landing_for(&Role::Admin), Landing::Admin);
        assert_eq!(landing_for(&Role::User), Landing::Notes);
        assert_eq!(landing_for(&Role::Other("x".into())), Landing::Notes);
    }
}
