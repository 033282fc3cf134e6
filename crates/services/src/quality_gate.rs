use std::sync::Arc;

use esg_core::quality::{AnswerAssessment, MIN_ANSWER_CHARS, is_too_short, verdict_says_poor};
use tracing::debug;

use crate::error::LlmError;
use crate::llm::LanguageModel;
use crate::prompts::evaluation_prompt;

/// Decides whether an answer is too weak to accept without a follow-up.
#[derive(Clone)]
pub struct QualityGate {
    model: Arc<dyn LanguageModel>,
    min_chars: usize,
}

impl QualityGate {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            min_chars: MIN_ANSWER_CHARS,
        }
    }

    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Runs the length check and, if it passes, asks the model for a verdict.
    ///
    /// A short answer is poor regardless of the model, so the call is skipped.
    ///
    /// # Errors
    ///
    /// Returns `LlmError` if the verdict request fails.
    pub async fn assess(&self, answer: &str) -> Result<AnswerAssessment, LlmError> {
        let too_short = is_too_short(answer, self.min_chars);
        if too_short {
            debug!(min_chars = self.min_chars, "answer below length threshold");
            return Ok(AnswerAssessment {
                too_short,
                model_flagged: false,
            });
        }

        let verdict = self.model.complete(&evaluation_prompt(answer)).await?;
        let model_flagged = verdict_says_poor(&verdict);
        debug!(model_flagged, "sufficiency verdict");
        Ok(AnswerAssessment {
            too_short,
            model_flagged,
        })
    }

    /// # Errors
    ///
    /// Returns `LlmError` if the verdict request fails.
    pub async fn is_poor(&self, answer: &str) -> Result<bool, LlmError> {
        Ok(self.assess(answer).await?.is_poor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::scripted::ScriptedModel;
    use crate::llm::stub_server::{StubServer, reply_body};
    use crate::llm::{ChatCompletionsClient, LlmConfig};

    const LONG_ANSWER: &str = "Creo que las empresas deben reducir sus emisiones cuanto antes.";

    #[tokio::test]
    async fn short_answer_is_poor_without_calling_model() {
        let model = Arc::new(ScriptedModel::with_replies(&["True"]));
        let gate = QualityGate::new(model.clone());

        assert!(gate.is_poor("   no sé   ").await.unwrap());
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn model_false_marks_long_answer_poor() {
        let model = Arc::new(ScriptedModel::with_replies(&["False"]));
        let gate = QualityGate::new(model.clone());

        let assessment = gate.assess(LONG_ANSWER).await.unwrap();
        assert!(!assessment.too_short);
        assert!(assessment.model_flagged);
        assert!(model.prompts()[0].contains(LONG_ANSWER));
    }

    #[tokio::test]
    async fn model_true_accepts_long_answer() {
        let model = Arc::new(ScriptedModel::with_replies(&["True"]));
        let gate = QualityGate::new(model);
        assert!(!gate.is_poor(LONG_ANSWER).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_verdict_falls_through_as_acceptable() {
        let model = Arc::new(ScriptedModel::with_replies(&["Quizás", ""]));
        let gate = QualityGate::new(model);
        assert!(!gate.is_poor(LONG_ANSWER).await.unwrap());
        assert!(!gate.is_poor(LONG_ANSWER).await.unwrap());
    }

    #[tokio::test]
    async fn empty_verdict_from_live_client_is_acceptable() {
        let server = StubServer::start(vec![(200, reply_body(""))]).await;
        let config = LlmConfig::new("test-key").with_base_url(server.base_url());
        let client = ChatCompletionsClient::new(Some(config)).unwrap();
        let gate = QualityGate::new(Arc::new(client));

        assert!(!gate.is_poor(LONG_ANSWER).await.unwrap());
        assert_eq!(server.requests(), 1);
    }

    #[tokio::test]
    async fn threshold_is_configurable() {
        let model = Arc::new(ScriptedModel::with_replies(&["True"]));
        let gate = QualityGate::new(model).with_min_chars(3);
        assert!(!gate.is_poor("sí, mucho").await.unwrap());
    }

    #[tokio::test]
    async fn model_failure_propagates() {
        let model = Arc::new(ScriptedModel::default());
        model.push_error(LlmError::Disabled);
        let gate = QualityGate::new(model);
        assert!(matches!(gate.is_poor(LONG_ANSWER).await, Err(LlmError::Disabled)));
    }
}
