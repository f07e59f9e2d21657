//! Note CRUD.

use reqwest::multipart::Form;
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Attachment, Note, NoteInput};

impl ApiClient {
    /// `GET /api/notes`
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let request = self.authed(Method::GET, "notes")?;
        self.send_json(request).await
    }

    /// `POST /api/notes` with a JSON body.
    pub async fn create_note(&self, input: &NoteInput) -> Result<Note, ApiError> {
        let request = self.authed(Method::POST, "notes")?.json(input);
        self.send_json(request).await
    }

    /// `POST /api/notes` as multipart, with an image attached.
    pub async fn create_note_with_image(
        &self,
        input: &NoteInput,
        image: Attachment,
    ) -> Result<Note, ApiError> {
        let form = note_form(input).part("image", image.into_part()?);
        let request = self.authed(Method::POST, "notes")?.multipart(form);
        self.send_json(request).await
    }

    /// `PUT /api/notes/:id`
    pub async fn update_note(&self, id: &str, input: &NoteInput) -> Result<Note, ApiError> {
        let request = self.authed(Method::PUT, &format!("notes/{id}"))?.json(input);
        self.send_json(request).await
    }

    /// `DELETE /api/notes/:id`
    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authed(Method::DELETE, &format!("notes/{id}"))?;
        self.send_empty(request).await
    }
}

fn note_form(input: &NoteInput) -> Form {
    let form = Form::new().text("content", input.content.clone());
    match &input.title {
        Some(title) => form.text("title", title.clone()),
        None => form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use store::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://svc".into(),
            ..ApiConfig::default()
        })
        .with_token(Some("tok".into()))
    }

    #[test]
    fn test_create_note_json_request() {
        let c = client();
        let request = c
            .authed(Method::POST, "notes")
            .unwrap()
            .json(&NoteInput::new("hello"))
            .build()
            .unwrap();

        assert_eq!(request.url().path(), "/api/notes");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer tok");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"content":"hello"}"#);
    }

    #[test]
    fn test_multipart_request_content_type() {
        let c = client();
        let input = NoteInput::new("hello").with_title(Some("T".into()));
        let form = note_form(&input).part(
            "image",
            Attachment::new("a.png", vec![0u8; 4]).into_part().unwrap(),
        );
        let request = c.authed(Method::POST, "notes").unwrap().multipart(form).build().unwrap();

        let content_type = request.headers()[CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
    }
}
