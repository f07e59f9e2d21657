use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::Role;
use ui::{
    check_access, landing_for, nav_links, use_auth, Access, AuthProvider, Landing, LogoutButton,
    NavTarget, Navbar,
};
use views::{Admin, Home, Login, NotFound, Notes, Signup};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/notes")]
        Notes {},
        #[route("/admin")]
        Admin {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Login => Route::Login {},
            NavTarget::Signup => Route::Signup {},
            NavTarget::Notes => Route::Notes {},
            NavTarget::Admin => Route::Admin {},
        }
    }
}

impl From<Landing> for Route {
    fn from(landing: Landing) -> Self {
        match landing {
            Landing::Notes => Route::Notes {},
            Landing::Admin => Route::Admin {},
        }
    }
}

/// Route a freshly signed-in role should land on.
pub(crate) fn landing_route(role: &Role) -> Route {
    landing_for(role).into()
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = config::load_settings();
    tracing::info!("using API at {}", settings.config.api.base_url);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Void Notes" }

        AuthProvider {
            settings: settings,
            Router::<Route> {}
        }
    }
}

/// Navbar above every page.
#[component]
fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let links = nav_links(&auth());

    rsx! {
        Navbar {
            brand: rsx! {
                Link { to: Route::Home {}, "Void Notes" }
            },
            for target in links {
                Link {
                    key: "{target.label()}",
                    to: Route::from(target),
                    class: "nav-link",
                    active_class: "active",
                    "{target.label()}"
                }
            }
            if auth().is_authenticated() {
                LogoutButton {
                    class: "nav-logout",
                    on_signed_out: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Renders `children` only for a session whose role is in `allowed`.
///
/// Re-evaluated whenever the session changes, so a sign-out anywhere (the
/// logout button, or a 401/403 from the API) leaves the page immediately.
#[component]
fn Protected(allowed: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let access = check_access(&auth(), &allowed);

    use_effect(use_reactive!(|access| match access {
        Access::Granted => {}
        Access::SignIn => {
            nav.replace(Route::Login {});
        }
        Access::Home => {
            nav.replace(Route::Home {});
        }
    }));

    if access != Access::Granted {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::from(NavTarget::Notes).to_string(), "/notes");
        assert_eq!(Route::from(NavTarget::Admin).to_string(), "/admin");
        assert_eq!("/signup".parse::<Route>().ok(), Some(Route::Signup {}));
    }

    #[test]
    fn test_unknown_paths_reach_not_found() {
        assert!(matches!(
            "/nope/deeper".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }

    #[test]
    fn test_landing_routes() {
        assert_eq!(landing_route(&Role::Admin), Route::Admin {});
        assert_eq!(landing_route(&Role::User), Route::Notes {});
    }
}
