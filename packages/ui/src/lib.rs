//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod session;
pub use session::make_session;

mod auth;
pub use auth::{
    ai_failure_action, failure_action, sign_in, sign_out, use_api, use_auth, use_settings, ApiHandle, AuthProvider,
    AuthState, ClientSettings, FailureAction, LogoutButton, AI_OFFLINE,
};

pub mod guard;
pub use guard::{check_access, landing_for, Access, Landing};

mod navbar;
pub use navbar::{nav_links, NavTarget, Navbar};

pub mod display;

pub mod board;
pub use board::{NoteBoard, NoteDraft};

pub mod browser;

pub mod dictation;
pub use dictation::{use_dictation, Dictation};

mod note_card;
pub use note_card::NoteCard;

mod notification_card;
pub use notification_card::{NotificationCard, NotificationModal, Priority};

mod image_picker;
pub use image_picker::ImagePicker;
