//! Signup and login.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

impl ApiClient {
    /// `POST /api/signup`
    pub async fn signup(&self, body: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let request = self.public(Method::POST, "signup").json(body);
        self.send_json(request).await
    }

    /// `POST /api/login`
    ///
    /// The caller persists the returned token and role.
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = self.public(Method::POST, "login").json(body);
        let response: LoginResponse = self.send_json(request).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".into()));
        }
        Ok(response)
    }
}
