use std::sync::Arc;

use storage::repository::Storage;
use tracing::{info, warn};

use crate::error::AppServicesError;
use crate::follow_up::FollowUpGenerator;
use crate::llm::{ChatCompletionsClient, LanguageModel, LlmConfig};
use crate::profile_synthesizer::ProfileSynthesizer;
use crate::quality_gate::QualityGate;
use crate::questionnaire::{QuestionnaireLoopService, SubmissionService};
use crate::Clock;

/// Assembles app-facing services around one language model.
#[derive(Clone)]
pub struct AppServices {
    model_enabled: bool,
    questionnaire: Arc<QuestionnaireLoopService>,
    submissions: Arc<SubmissionService>,
}

impl AppServices {
    /// Build services backed by the chat completions client and in-memory storage.
    ///
    /// A missing config still builds; every model call then fails with `LlmError::Disabled`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new_http(config: Option<LlmConfig>, clock: Clock) -> Result<Self, AppServicesError> {
        match config.as_ref() {
            Some(config) => info!(
                model = %config.model,
                base_url = %config.base_url,
                "language model configured"
            ),
            None => warn!("GROQ_API_KEY is not set; language model calls will fail"),
        }
        let enabled = config.is_some();
        let client = ChatCompletionsClient::new(config)?;
        let mut services = Self::with_model(Arc::new(client), clock, Storage::in_memory());
        services.model_enabled = enabled;
        Ok(services)
    }

    /// Build services around any model implementation.
    #[must_use]
    pub fn with_model(model: Arc<dyn LanguageModel>, clock: Clock, storage: Storage) -> Self {
        let questionnaire = Arc::new(QuestionnaireLoopService::new(
            clock,
            QualityGate::new(Arc::clone(&model)),
            FollowUpGenerator::new(Arc::clone(&model)),
            ProfileSynthesizer::new(model),
            Arc::clone(&storage.submissions),
        ));
        let submissions = Arc::new(SubmissionService::new(storage.submissions));

        Self {
            model_enabled: true,
            questionnaire,
            submissions,
        }
    }

    #[must_use]
    pub fn model_enabled(&self) -> bool {
        self.model_enabled
    }

    #[must_use]
    pub fn questionnaire(&self) -> Arc<QuestionnaireLoopService> {
        Arc::clone(&self.questionnaire)
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }
}
