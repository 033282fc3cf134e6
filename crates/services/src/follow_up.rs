use std::sync::Arc;

use crate::error::QuestionnaireError;
use crate::llm::LanguageModel;
use crate::prompts::follow_up_prompt;

/// Produces one clarifying question for a weak answer.
#[derive(Clone)]
pub struct FollowUpGenerator {
    model: Arc<dyn LanguageModel>,
}

impl FollowUpGenerator {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireError::Llm` if the request fails and
    /// `QuestionnaireError::EmptyFollowUp` if the model replies with blank text.
    pub async fn generate(&self, answer: &str) -> Result<String, QuestionnaireError> {
        let question = self.model.complete(&follow_up_prompt(answer)).await?;
        let question = question.trim();
        if question.is_empty() {
            return Err(QuestionnaireError::EmptyFollowUp);
        }
        Ok(question.to_string())
    }
}
