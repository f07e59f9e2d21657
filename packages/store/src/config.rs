//! # Client configuration: `void-notes.toml`
//!
//! Defines the TOML configuration bundled with the web client
//! (filename: [`VoidNotesConfig::filename`] = `"void-notes.toml"`). It replaces
//! the API origins that used to be hard-coded in every page.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://void-server-6.onrender.com"
//! auth_scheme = "bearer"   # "raw" sends the token without the Bearer prefix
//!
//! [ai]
//! backend = "service"      # "openai" calls a chat-completion API directly
//! model = "gpt-3.5-turbo"
//! openai_base_url = "https://api.openai.com/v1"
//! max_tokens = 100
//!
//! [display]
//! heading_chars = 50
//! preview_chars = 240
//! title_chars = 60
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`VoidNotesConfig`] | Top-level config. TOML (de)serialisation, builder helpers, the canonical filename. |
//! | [`ApiConfig`] | Remote service origin and how the token is presented. |
//! | [`AiConfig`] | Which backend answers "AI enhance", and its parameters. |
//! | [`DisplayConfig`] | Truncation lengths used by the views. |
//!
//! Every field has a default, so a missing or empty config file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `void-notes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoidNotesConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// How the token is sent in the `Authorization` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `Authorization: <token>`
    Raw,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the remote service, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub auth_scheme: AuthScheme,
}

fn default_base_url() -> String {
    "https://void-server-6.onrender.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_scheme: AuthScheme::default(),
        }
    }
}

/// Backend used by the "AI enhance" action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiBackendKind {
    /// `POST /api/ai/summarize` on the note service.
    #[default]
    Service,
    /// An OpenAI-compatible chat-completion endpoint.
    OpenAi,
}

/// AI settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub backend: AiBackendKind,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_max_tokens() -> u32 {
    100
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            backend: AiBackendKind::default(),
            model: default_model(),
            openai_base_url: default_openai_base_url(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Truncation lengths (in characters) used when rendering lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Announcement card heading.
    #[serde(default = "default_heading_chars")]
    pub heading_chars: usize,
    /// Note body preview in compact lists.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// Title derived from the first line of a note.
    #[serde(default = "default_title_chars")]
    pub title_chars: usize,
}

fn default_heading_chars() -> usize {
    50
}

fn default_preview_chars() -> usize {
    240
}

fn default_title_chars() -> usize {
    60
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            heading_chars: default_heading_chars(),
            preview_chars: default_preview_chars(),
            title_chars: default_title_chars(),
        }
    }
}

impl VoidNotesConfig {
    /// Create a config pointing at the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
            ..Self::default()
        }
    }

    /// Builder method to set the auth header scheme.
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.api.auth_scheme = scheme;
        self
    }

    /// Builder method to set the AI backend.
    pub fn with_ai_backend(mut self, backend: AiBackendKind) -> Self {
        self.ai.backend = backend;
        self
    }

    /// Replace the API origin when `base_url` is set and non-blank.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "void-notes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = VoidNotesConfig::from_toml("").unwrap();
        assert_eq!(config, VoidNotesConfig::default());
        assert_eq!(config.api.auth_scheme, AuthScheme::Bearer);
        assert_eq!(config.ai.backend, AiBackendKind::Service);
        assert_eq!(config.display.heading_chars, 50);
        assert_eq!(config.display.title_chars, 60);
    }

    #[test]
    fn test_partial_sections() {
        let config = VoidNotesConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:10000"
            auth_scheme = "raw"

            [ai]
            backend = "openai"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:10000");
        assert_eq!(config.api.auth_scheme, AuthScheme::Raw);
        assert_eq!(config.ai.backend, AiBackendKind::OpenAi);
        assert_eq!(config.ai.model, "gpt-3.5-turbo");
        assert_eq!(config.ai.max_tokens, 100);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        assert!(VoidNotesConfig::from_toml("[api]\nauth_scheme = \"basic\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = VoidNotesConfig::new("http://localhost:10000")
            .with_auth_scheme(AuthScheme::Raw)
            .with_ai_backend(AiBackendKind::OpenAi);
        let text = config.to_toml().unwrap();
        assert_eq!(VoidNotesConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = VoidNotesConfig::default().with_base_url_override(Some("http://127.0.0.1:5000"));
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");

        let untouched = VoidNotesConfig::default().with_base_url_override(Some("   "));
        assert_eq!(untouched.api.base_url, default_base_url());

        let none = VoidNotesConfig::default().with_base_url_override(None);
        assert_eq!(none.api.base_url, default_base_url());
    }
}
