//! Wire types exchanged with the note service.

mod attachment;
mod note;
mod notification;
mod timestamp;
mod user;

pub use attachment::{mime_for_file_name, Attachment};
pub use note::{Note, NoteInput};
pub use notification::{Notification, NotificationDraft};
pub use user::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserRecord};
