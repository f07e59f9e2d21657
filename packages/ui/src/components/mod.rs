//! Small building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Textarea};

mod status;
pub use status::{Status, StatusBanner, StatusKind};

mod modal;
pub use modal::ModalOverlay;

mod spinner;
pub use spinner::Spinner;
