//! # "AI enhance" backends
//!
//! The notes workspace can turn a draft into a summary before saving it. Two
//! backends answer that request:
//!
//! | Backend | Request |
//! |---------|---------|
//! | [`AiBackend::Service`] | `POST /api/ai/summarize` `{text}` → `{content}` on the note service, with the session token |
//! | [`AiBackend::OpenAi`] | `POST {base}/chat/completions` with a system prompt and the draft as the user message |
//!
//! Neither path retries or streams. An empty completion is reported as a
//! decode error so the UI never saves a blank note.

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use store::config::{AiBackendKind, AiConfig};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Instruction sent with every chat-completion request.
pub const SYSTEM_PROMPT: &str = "Format as a technical log.";

/// Which service turns a draft into an enhanced note.
#[derive(Clone, PartialEq)]
pub enum AiBackend {
    Service,
    OpenAi {
        api_key: String,
        base_url: String,
        model: String,
        max_tokens: u32,
    },
}

impl std::fmt::Debug for AiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiBackend::Service => f.write_str("Service"),
            AiBackend::OpenAi { base_url, model, .. } => f
                .debug_struct("OpenAi")
                .field("base_url", base_url)
                .field("model", model)
                .finish_non_exhaustive(),
        }
    }
}

impl AiBackend {
    /// Resolve the configured backend. The OpenAI backend needs a key.
    pub fn from_config(config: &AiConfig, openai_api_key: Option<&str>) -> Result<Self, ApiError> {
        match config.backend {
            AiBackendKind::Service => Ok(AiBackend::Service),
            AiBackendKind::OpenAi => {
                let api_key = openai_api_key
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .ok_or_else(|| ApiError::Config("OpenAI API key is not set".into()))?;
                Ok(AiBackend::OpenAi {
                    api_key: api_key.to_string(),
                    base_url: config.openai_base_url.trim_end_matches('/').to_string(),
                    model: config.model.clone(),
                    max_tokens: config.max_tokens,
                })
            }
        }
    }
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ApiClient {
    /// `POST /api/ai/summarize`
    pub async fn summarize(&self, text: &str) -> Result<String, ApiError> {
        let request = self
            .authed(Method::POST, "ai/summarize")?
            .json(&SummarizeRequest { text });
        let response: SummarizeResponse = self.send_json(request).await?;
        non_empty(response.content)
    }

    /// Enhance a draft with the given backend.
    pub async fn enhance(&self, backend: &AiBackend, text: &str) -> Result<String, ApiError> {
        match backend {
            AiBackend::Service => self.summarize(text).await,
            AiBackend::OpenAi {
                api_key,
                base_url,
                model,
                max_tokens,
            } => {
                let body = chat_request(model, text, *max_tokens);
                let request = self
                    .http()
                    .request(Method::POST, format!("{base_url}/chat/completions"))
                    .header(AUTHORIZATION, format!("Bearer {api_key}"))
                    .json(&body);
                tracing::debug!(%model, "chat completion request");
                let response: ChatResponse = self
                    .send_json(request)
                    .await
                    .map_err(ApiError::third_party)?;
                first_choice(response)
            }
        }
    }
}

fn chat_request<'a>(model: &'a str, text: &'a str, max_tokens: u32) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: text,
            },
        ],
        max_tokens,
    }
}

fn first_choice(response: ChatResponse) -> Result<String, ApiError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_default();
    non_empty(content)
}

fn non_empty(content: String) -> Result<String, ApiError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Decode("empty AI response".into()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_config() {
        let service = AiBackend::from_config(&AiConfig::default(), None).unwrap();
        assert_eq!(service, AiBackend::Service);

        let openai_config = AiConfig {
            backend: AiBackendKind::OpenAi,
            openai_base_url: "https://api.openai.com/v1/".into(),
            ..AiConfig::default()
        };
        assert!(matches!(
            AiBackend::from_config(&openai_config, None),
            Err(ApiError::Config(_))
        ));
        assert!(AiBackend::from_config(&openai_config, Some("  ")).is_err());

        let backend = AiBackend::from_config(&openai_config, Some("sk-test")).unwrap();
        match &backend {
            AiBackend::OpenAi { base_url, model, max_tokens, .. } => {
                assert_eq!(base_url, "https://api.openai.com/v1");
                assert_eq!(model, "gpt-3.5-turbo");
                assert_eq!(*max_tokens, 100);
            }
            other => panic!("unexpected backend {other:?}"),
        }
        // The key never shows up in logs
        assert!(!format!("{backend:?}").contains("sk-test"));
    }

    #[test]
    fn test_chat_request_body() {
        let body = serde_json::to_value(chat_request("gpt-3.5-turbo", "raw notes", 100)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    { "role": "system", "content": "Format as a technical log." },
                    { "role": "user", "content": "raw notes" },
                ],
                "max_tokens": 100,
            })
        );
    }

    #[test]
    fn test_first_choice() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  > log entry\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice(response).unwrap(), "> log entry");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_choice(empty), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_summarize_response_must_have_content() {
        let res: SummarizeResponse = serde_json::from_str(r#"{"content":""}"#).unwrap();
        assert!(non_empty(res.content).is_err());
    }
}
