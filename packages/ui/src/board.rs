//! The notes list shown in the workspace, and the drafts that feed it.
//!
//! [`NoteBoard`] applies server responses to the displayed list without a
//! refetch: creates are prepended, edits replace in place, deletes remove.
//! [`NoteDraft`] decides whether a form submission should reach the network
//! at all.

use api::{Note, NoteInput};

use crate::display::derive_title;

/// Notes in display order (newest first after local creates).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteBoard {
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Put a freshly created note at the top.
    pub fn prepend(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Swap in the server's copy of an edited note. Returns false if absent.
    pub fn replace(&mut self, note: Note) -> bool {
        match self.notes.iter_mut().find(|n| n.id == note.id) {
            Some(slot) => {
                *slot = note;
                true
            }
            None => false,
        }
    }

    /// Drop a deleted note. Returns false if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}

/// Contents of the note form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Body to send, or `None` when there is nothing to save.
    ///
    /// A blank title is derived from the first line of the content.
    pub fn submission(&self, title_chars: usize) -> Option<NoteInput> {
        let content = self.content.trim();
        if content.is_empty() {
            return None;
        }
        let title = match self.title.trim() {
            "" => derive_title(content, title_chars),
            t => t.to_string(),
        };
        Some(NoteInput::new(content).with_title(Some(title)))
    }

    /// Body for editing `original`, or `None` when blank or unchanged.
    ///
    /// Clearing an existing title sends `"title": ""`; an absent field would
    /// leave the stored title in place.
    pub fn edit_of(&self, original: &Note) -> Option<NoteInput> {
        let content = self.content.trim();
        if content.is_empty() {
            return None;
        }
        let title = self.title.trim();
        let unchanged = content == original.content.trim()
            && Some(title).filter(|t| !t.is_empty()) == original.display_title();
        if unchanged {
            return None;
        }
        let title = match (title, original.display_title()) {
            ("", None) => None,
            (t, _) => Some(t.to_string()),
        };
        Some(NoteInput::new(content).with_title(title))
    }
}
