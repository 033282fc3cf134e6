//! Shared error types for the services crate.

use thiserror::Error;

use esg_core::model::{FormError, ProfileParseError, QuestionnaireStateError};
use storage::repository::StorageError;

/// Errors emitted by the language model client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("language model is not configured")]
    Disabled,
    #[error("language model returned an empty response")]
    EmptyResponse,
    #[error("language model request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl LlmError {
    /// Failures worth another attempt: rate limits, server errors, timeouts, dropped connections.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::HttpStatus(status) => {
                *status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            LlmError::Http(err) => err.is_timeout() || err.is_connect(),
            LlmError::Disabled | LlmError::EmptyResponse => false,
        }
    }
}

/// Errors emitted by the questionnaire services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error("questionnaire already completed")]
    Completed,
    #[error("questionnaire is not complete yet")]
    NotComplete,
    #[error("final form already submitted")]
    AlreadySubmitted,
    #[error("follow-up generator returned an empty question")]
    EmptyFollowUp,
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Profile(#[from] ProfileParseError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    State(#[from] QuestionnaireStateError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
