//! # Notes
//!
//! [`Note`] is the record returned by `GET /api/notes` and echoed back by
//! create/update. The service uses MongoDB ids (`_id`) and camel-cased
//! timestamps; both are mapped onto Rust field names here. Missing optional
//! fields default instead of failing the whole list.
//!
//! [`NoteInput`] is the body for `POST /api/notes` and `PUT /api/notes/:id`.
//! An absent title is omitted from the JSON rather than sent as `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-owned note persisted by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "super::timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "updatedAt",
        default,
        deserialize_with = "super::timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "imageUrl",
        alias = "image",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Note {
    /// Title to render: the stored title when non-blank.
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Body for creating or updating a note.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
}

impl NoteInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_service_note() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "title": "Groceries",
            "content": "milk\neggs",
            "owner": "u1",
            "createdAt": "2024-03-05T14:07:00.000Z",
            "__v": 0
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "65f0c0ffee");
        assert_eq!(note.display_title(), Some("Groceries"));
        assert_eq!(note.content, "milk\neggs");
        assert!(note.created_at.is_some());
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn test_decode_minimal_note() {
        let note: Note = serde_json::from_str(r#"{"_id":"1","content":"x","createdAt":"soon"}"#).unwrap();
        assert!(note.title.is_none());
        assert!(note.created_at.is_none());
        assert!(note.display_title().is_none());

        let blank: Note = serde_json::from_str(r#"{"_id":"2","title":"  ","content":"y"}"#).unwrap();
        assert!(blank.display_title().is_none());
    }

    #[test]
    fn test_input_omits_missing_title() {
        let body = serde_json::to_value(NoteInput::new("hello")).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "hello" }));

        let titled = NoteInput::new("hello").with_title(Some("Hi".into()));
        let body = serde_json::to_value(titled).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Hi", "content": "hello" }));
    }
}
