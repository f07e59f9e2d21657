//! Public announcements feed and admin broadcasting.

use reqwest::multipart::Form;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Notification, NotificationDraft};

impl ApiClient {
    /// `GET /api/notifications` (no credentials required)
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let request = self.public(Method::GET, "notifications");
        self.send_json(request).await
    }

    /// `POST /api/notifications` as multipart `message`, `title`, `image`.
    ///
    /// The response body is not relied upon; some deployments answer with a
    /// bare status message instead of the created record.
    pub async fn broadcast_notification(&self, draft: NotificationDraft) -> Result<(), ApiError> {
        let form = notification_form(draft)?;
        let request = self.authed(Method::POST, "notifications")?.multipart(form);
        self.send_empty(request).await
    }

    /// `DELETE /api/notifications/:id`
    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authed(Method::DELETE, &format!("notifications/{id}"))?;
        self.send_empty(request).await
    }
}

fn notification_form(draft: NotificationDraft) -> Result<Form, ApiError> {
    let mut form = Form::new().text("message", draft.message);
    if let Some(title) = draft.title.filter(|t| !t.trim().is_empty()) {
        form = form.text("title", title);
    }
    if let Some(image) = draft.image {
        form = form.part("image", image.into_part()?);
    }
    Ok(form)
}
