//! # API crate: typed client for the Void Notes service
//!
//! Every request the web client makes to the remote note service goes through
//! [`ApiClient`]. The client owns the service origin, attaches the
//! `Authorization` header for authenticated endpoints, and turns HTTP failures
//! into an [`ApiError`] whose [`is_auth_failure`](ApiError::is_auth_failure)
//! drives the uniform "401/403 → sign out" path in the UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: URL building, auth header, status checking, JSON decoding |
//! | [`error`] | [`ApiError`] taxonomy and user-facing messages |
//! | [`models`] | Wire types for users, notes, notifications and attachments |
//! | [`auth`] | `signup`, `login` |
//! | [`notes`] | `list_notes`, `create_note`, `create_note_with_image`, `update_note`, `delete_note` |
//! | [`notifications`] | `list_notifications`, `broadcast_notification`, `delete_notification` |
//! | [`admin`] | `list_users`, `delete_user` |
//! | [`ai`] | `summarize` and the [`AiBackend`] switch for "AI enhance" |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/api/signup` | – |
//! | POST | `/api/login` | – |
//! | GET/POST | `/api/notes` | token |
//! | PUT/DELETE | `/api/notes/:id` | token |
//! | GET | `/api/notifications` | – |
//! | POST | `/api/notifications` | admin token |
//! | DELETE | `/api/notifications/:id` | admin token |
//! | GET | `/api/admin/users` | admin token |
//! | DELETE | `/api/admin/users/:id` | admin token |
//! | POST | `/api/ai/summarize` | token |

pub mod admin;
pub mod ai;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod notes;
pub mod notifications;

pub use ai::AiBackend;
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Attachment, LoginRequest, LoginResponse, Note, NoteInput, Notification, NotificationDraft,
    SignupRequest, SignupResponse, UserRecord,
};

pub use store::{AuthScheme, Role};
