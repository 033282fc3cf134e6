use esg_core::model::{EsgProfile, QuestionnaireProgress, QuestionnaireState, Step, Transcript};
use esg_core::question::QuestionBank;

/// In-memory questionnaire run.
///
/// Owns the question bank and the mutable state. The first prompt is already in
/// the transcript when the session is created.
#[derive(Debug, Clone)]
pub struct QuestionnaireSession {
    bank: QuestionBank,
    state: QuestionnaireState,
    pending_retry: Option<String>,
}

impl QuestionnaireSession {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        let mut state = QuestionnaireState::new();
        state.show_current_prompt(&bank);
        Self {
            bank,
            state,
            pending_retry: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &QuestionnaireState {
        &self.state
    }

    pub(crate) fn parts_mut(&mut self) -> (&QuestionBank, &mut QuestionnaireState) {
        (&self.bank, &mut self.state)
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        self.state.transcript()
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.state.current_step(&self.bank)
    }

    #[must_use]
    pub fn progress(&self) -> QuestionnaireProgress {
        self.state.progress(&self.bank)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.bank)
    }

    #[must_use]
    pub fn follow_up_pending(&self) -> bool {
        self.state.follow_up_pending()
    }

    #[must_use]
    pub fn profile(&self) -> Option<EsgProfile> {
        self.state.profile()
    }

    #[must_use]
    pub fn submitted(&self) -> bool {
        self.state.submitted()
    }

    /// Answer text whose processing failed and can be retried.
    #[must_use]
    pub fn pending_retry(&self) -> Option<&str> {
        self.pending_retry.as_deref()
    }

    pub(crate) fn set_pending_retry(&mut self, text: Option<String>) {
        self.pending_retry = text;
    }

    pub(crate) fn take_pending_retry(&mut self) -> Option<String> {
        self.pending_retry.take()
    }
}

impl Default for QuestionnaireSession {
    fn default() -> Self {
        Self::new(QuestionBank::default())
    }
}
