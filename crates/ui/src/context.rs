use std::sync::Arc;

use services::{QuestionnaireLoopService, SubmissionService};

pub trait UiApp: Send + Sync {
    fn model_enabled(&self) -> bool;

    fn questionnaire(&self) -> Arc<QuestionnaireLoopService>;
    fn submissions(&self) -> Arc<SubmissionService>;
}

#[derive(Clone)]
pub struct AppContext {
    model_enabled: bool,

    questionnaire: Arc<QuestionnaireLoopService>,
    submissions: Arc<SubmissionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            model_enabled: app.model_enabled(),
            questionnaire: app.questionnaire(),
            submissions: app.submissions(),
        }
    }

    /// False when no API key was configured; model calls will fail.
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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
