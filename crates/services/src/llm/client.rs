use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{LanguageModel, LlmConfig};
use crate::error::LlmError;

const RETRY_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Clone)]
pub struct ChatCompletionsClient {
    client: Client,
    config: Option<LlmConfig>,
    retry_backoff: Duration,
}

impl ChatCompletionsClient {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(LlmConfig::from_env())
    }

    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: Option<LlmConfig>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.as_ref().and_then(|c| c.timeout) {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
            retry_backoff: RETRY_BACKOFF,
        })
    }

    /// Base delay between attempts; the n-th retry waits `n` times this.
    #[must_use]
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn config(&self) -> Option<&LlmConfig> {
        self.config.as_ref()
    }

    async fn send_once(&self, config: &LlmConfig, prompt: &str) -> Result<String, LlmError> {
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: config.temperature,
        };

        let response = self
            .client
            .post(config.completions_url())
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LlmError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body.into_content())
    }
}

#[async_trait]
impl LanguageModel for ChatCompletionsClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let config = self.config.as_ref().ok_or(LlmError::Disabled)?;

        let mut attempt = 0_u32;
        loop {
            match self.send_once(config, prompt).await {
                Ok(content) => {
                    debug!(
                        model = %config.model,
                        attempt,
                        chars = content.len(),
                        "completion received"
                    );
                    return Ok(content);
                }
                Err(err) if err.is_transient() && attempt < config.max_retries => {
                    attempt += 1;
                    warn!(model = %config.model, attempt, error = %err, "retrying completion");
                    tokio::time::sleep(self.retry_backoff * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Trimmed text of the first choice; empty when the model sent nothing.
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::stub_server::{StubServer, reply_body};
    use reqwest::StatusCode;

    fn client_for(server: &StubServer, max_retries: u32) -> ChatCompletionsClient {
        let mut config = LlmConfig::new("test-key").with_base_url(server.base_url());
        config.max_retries = max_retries;
        ChatCompletionsClient::new(Some(config))
            .unwrap()
            .with_retry_backoff(Duration::ZERO)
    }

    #[tokio::test]
    async fn server_errors_are_retried_up_to_the_limit() {
        let server = StubServer::start(vec![(503, String::new())]).await;
        let client = client_for(&server, 2);

        let err = client.complete("hola").await.unwrap_err();
        assert!(matches!(err, LlmError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE)));
        assert_eq!(server.requests(), 3);
    }

    #[tokio::test]
    async fn unauthorized_is_not_retried() {
        let server = StubServer::start(vec![(401, String::new())]).await;
        let client = client_for(&server, 2);

        let err = client.complete("hola").await.unwrap_err();
        assert!(matches!(err, LlmError::HttpStatus(StatusCode::UNAUTHORIZED)));
        assert_eq!(server.requests(), 1);
    }

    #[tokio::test]
    async fn succeeds_after_a_transient_failure() {
        let server =
            StubServer::start(vec![(429, String::new()), (200, reply_body("  True "))]).await;
        let client = client_for(&server, 2);

        assert_eq!(client.complete("hola").await.unwrap(), "True");
        assert_eq!(server.requests(), 2);
    }

    #[tokio::test]
    async fn empty_content_is_returned_as_empty_text() {
        let server = StubServer::start(vec![(200, reply_body(""))]).await;
        let client = client_for(&server, 2);

        assert_eq!(client.complete("hola").await.unwrap(), "");
        assert_eq!(server.requests(), 1);
    }

    #[tokio::test]
    async fn disabled_client_refuses_to_call() {
        let client = ChatCompletionsClient::new(None).unwrap();
        assert!(!client.enabled());
        let err = client.complete("hola").await.unwrap_err();
        assert!(matches!(err, LlmError::Disabled));
    }

    #[test]
    fn request_serializes_single_user_message() {
        let payload = ChatRequest {
            model: "gemma2-9b-it".into(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hola".into(),
            }],
            temperature: 0.0,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gemma2-9b-it");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hola");
    }

    #[test]
    fn response_content_is_trimmed() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  True\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_content(), "True");
    }

    #[test]
    fn blank_or_missing_content_is_empty() {
        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert_eq!(blank.into_content(), "");

        let none: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(none.into_content(), "");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(empty.into_content(), "");
    }

    #[test]
    fn rate_limits_and_server_errors_are_transient() {
        assert!(LlmError::HttpStatus(reqwest::StatusCode::TOO_MANY_REQUESTS).is_transient());
        assert!(LlmError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY).is_transient());
        assert!(!LlmError::HttpStatus(reqwest::StatusCode::UNAUTHORIZED).is_transient());
        assert!(!LlmError::EmptyResponse.is_transient());
    }
}
