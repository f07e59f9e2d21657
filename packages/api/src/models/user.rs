//! # Users and authentication payloads
//!
//! - [`SignupRequest`] / [`SignupResponse`]: `POST /api/signup`. The service
//!   may or may not return a token; the client ignores it and sends the user
//!   to the login form.
//! - [`LoginRequest`] / [`LoginResponse`]: `POST /api/login`, returning the
//!   token and role label persisted in the session.
//! - [`UserRecord`]: one row of `GET /api/admin/users`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use store::Role;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Role,
}

/// A user account as listed in the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "super::timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Username, falling back to email when unset.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_body_shape() {
        let body = serde_json::to_value(SignupRequest {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            role: Role::Admin,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "secret",
                "role": "admin",
            })
        );
    }

    #[test]
    fn test_login_response() {
        let res: LoginResponse = serde_json::from_str(r#"{"token":"jwt","role":"admin"}"#).unwrap();
        assert_eq!(res.role, Role::Admin);

        // Missing role defaults to a plain user
        let res: LoginResponse = serde_json::from_str(r#"{"token":"jwt"}"#).unwrap();
        assert_eq!(res.role, Role::User);
    }

    #[test]
    fn test_signup_response_without_token() {
        let res: SignupResponse = serde_json::from_str(r#"{"message":"User created"}"#).unwrap();
        assert!(res.token.is_none());
        assert_eq!(res.message.as_deref(), Some("User created"));
    }

    #[test]
    fn test_user_record_display_name() {
        let user: UserRecord =
            serde_json::from_str(r#"{"_id":"u1","email":"x@y.z","role":"user"}"#).unwrap();
        assert_eq!(user.display_name(), "x@y.z");
        assert_eq!(user.role, Role::User);
    }
}
