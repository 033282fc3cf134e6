use std::sync::Arc;

use esg_core::model::EsgProfile;
use tracing::warn;

use crate::error::{LlmError, QuestionnaireError};
use crate::llm::LanguageModel;
use crate::prompts::profile_prompt;

/// Turns the accepted answers into four ESG/risk scores.
#[derive(Clone)]
pub struct ProfileSynthesizer {
    model: Arc<dyn LanguageModel>,
}

impl ProfileSynthesizer {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Joins `answers` with newlines, asks for scores and parses them.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Llm` if the request fails or the reply is empty,
    /// and `QuestionnaireError::Profile` if any labelled score is missing.
    pub async fn synthesize(&self, answers: &[String]) -> Result<EsgProfile, QuestionnaireError> {
        let analysis = answers.join("\n");
        let reply = self.model.complete(&profile_prompt(&analysis)).await?;
        if reply.is_empty() {
            return Err(LlmError::EmptyResponse.into());
        }
        EsgProfile::parse(&reply).map_err(|err| {
            warn!(error = %err, "profile reply could not be parsed");
            QuestionnaireError::Profile(err)
        })
    }
}
