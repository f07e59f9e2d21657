use dioxus::prelude::*;

use crate::auth::AuthState;

/// Destinations offered in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Login,
    Signup,
    Notes,
    Admin,
}

impl NavTarget {
    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Login => "Login",
            NavTarget::Signup => "Signup",
            NavTarget::Notes => "My Notes",
            NavTarget::Admin => "Dashboard",
        }
    }
}

/// Links to show for the given session, in display order.
pub fn nav_links(state: &AuthState) -> Vec<NavTarget> {
    let mut links = vec![NavTarget::Home];
    if !state.is_authenticated() {
        links.extend([NavTarget::Login, NavTarget::Signup]);
    } else if state.is_admin() {
        links.push(NavTarget::Admin);
    } else if state.has_role(&store::Role::User) {
        links.push(NavTarget::Notes);
    }
    links
}

#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div { class: "navbar-brand", {brand} }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn test_anonymous_links() {
        assert_eq!(
            nav_links(&AuthState::default()),
            vec![NavTarget::Home, NavTarget::Login, NavTarget::Signup]
        );
    }

    #[test]
    fn test_role_links() {
        assert_eq!(
            nav_links(&AuthState::signed_in("t", Role::User)),
            vec![NavTarget::Home, NavTarget::Notes]
        );
        assert_eq!(
            nav_links(&AuthState::signed_in("t", Role::Admin)),
            vec![NavTarget::Home, NavTarget::Admin]
        );
        assert_eq!(
            nav_links(&AuthState::signed_in("t", Role::Other("guest".into()))),
            vec![NavTarget::Home]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(NavTarget::Notes.label(), "My Notes");
        assert_eq!(NavTarget::Admin.label(), "Dashboard");
    }
}
