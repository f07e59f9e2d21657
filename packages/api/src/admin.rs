//! Admin-only user management.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserRecord;

impl ApiClient {
    /// `GET /api/admin/users`
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let request = self.authed(Method::GET, "admin/users")?;
        self.send_json(request).await
    }

    /// `DELETE /api/admin/users/:id`
    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let request = self.authed(Method::DELETE, &format!("admin/users/{id}"))?;
        self.send_empty(request).await
    }
}
