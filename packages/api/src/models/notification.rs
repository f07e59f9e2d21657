use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Attachment;

/// An admin-authored announcement shown on the public feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(
        rename = "imageUrl",
        alias = "image",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
    /// `high`, `low`, or anything else for normal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "super::timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn display_image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Multipart body for `POST /api/notifications`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationDraft {
    pub message: String,
    pub title: Option<String>,
    pub image: Option<Attachment>,
}
