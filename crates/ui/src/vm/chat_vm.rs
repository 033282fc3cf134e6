use esg_core::model::{EsgProfile, FinalQuestionnaireDraft, Speaker, Step};
use services::{QuestionnaireError, QuestionnaireLoopService, QuestionnaireSession, TurnOutcome};
use storage::repository::SubmissionId;
use tracing::debug;

use crate::views::ViewError;
use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::profile_vm::{ProfileChartVm, map_profile_chart};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatIntent {
    Send(String),
    Retry,
    Submit(FinalQuestionnaireDraft),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPhase {
    /// Waiting for an answer to a question or its follow-up.
    Asking,
    /// All answers are in; the profile is missing.
    Profiling,
    /// Profile shown, final form open.
    Profiled,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessageVm {
    pub from_bot: bool,
    /// Sanitized HTML for bot messages, escaped by the renderer for user ones.
    pub body: String,
}

impl ChatMessageVm {
    #[must_use]
    pub fn bot(text: &str) -> Self {
        Self {
            from_bot: true,
            body: markdown_to_html(text),
        }
    }

    #[must_use]
    pub fn user(text: &str) -> Self {
        Self {
            from_bot: false,
            body: text.to_string(),
        }
    }
}

pub struct ChatVm {
    session: QuestionnaireSession,
    submission_id: Option<SubmissionId>,
}

impl ChatVm {
    #[must_use]
    pub fn new(session: QuestionnaireSession) -> Self {
        Self {
            session,
            submission_id: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuestionnaireSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> ChatPhase {
        if self.session.submitted() {
            ChatPhase::Submitted
        } else if self.session.profile().is_some() {
            ChatPhase::Profiled
        } else if matches!(self.session.current_step(), Step::Profiling) {
            ChatPhase::Profiling
        } else {
            ChatPhase::Asking
        }
    }

    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessageVm> {
        self.session
            .transcript()
            .entries()
            .iter()
            .map(|entry| match entry.speaker {
                Speaker::Bot => ChatMessageVm::bot(&entry.text),
                Speaker::User => ChatMessageVm::user(&entry.text),
            })
            .collect()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.session.progress();
        format!("Respuestas: {} / {}", progress.answered, progress.total)
    }

    #[must_use]
    pub fn profile_chart(&self) -> Option<ProfileChartVm> {
        self.session.profile().as_ref().map(map_profile_chart)
    }

    #[must_use]
    pub fn profile(&self) -> Option<EsgProfile> {
        self.session.profile()
    }

    #[must_use]
    pub fn submission_id(&self) -> Option<SubmissionId> {
        self.submission_id
    }

    /// Whether a failed step is waiting to be retried.
    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.session.pending_retry().is_some()
            || (self.phase() == ChatPhase::Profiling && self.session.profile().is_none())
    }

    /// Apply one user intent. The profile is computed as soon as the last
    /// answer is accepted.
    ///
    /// # Errors
    ///
    /// Returns the `ViewError` matching the service failure.
    pub async fn apply(
        &mut self,
        questionnaire: &QuestionnaireLoopService,
        intent: ChatIntent,
    ) -> Result<(), ViewError> {
        let result = match intent {
            ChatIntent::Send(text) => {
                let outcome = questionnaire.answer_current(&mut self.session, &text).await;
                self.after_turn(questionnaire, outcome).await
            }
            ChatIntent::Retry => {
                if self.session.pending_retry().is_some() {
                    let outcome = questionnaire.retry_last(&mut self.session).await;
                    self.after_turn(questionnaire, outcome).await
                } else {
                    self.ensure_profile(questionnaire).await
                }
            }
            ChatIntent::Submit(draft) => questionnaire
                .submit_form(&mut self.session, &draft)
                .await
                .map(|id| {
                    self.submission_id = Some(id);
                }),
        };
        result.map_err(|err| {
            debug!(error = %err, "chat intent failed");
            ViewError::from_questionnaire(&err)
        })
    }

    async fn after_turn(
        &mut self,
        questionnaire: &QuestionnaireLoopService,
        outcome: Result<TurnOutcome, QuestionnaireError>,
    ) -> Result<(), QuestionnaireError> {
        if outcome? == TurnOutcome::Completed {
            self.ensure_profile(questionnaire).await?;
        }
        Ok(())
    }

    async fn ensure_profile(
        &mut self,
        questionnaire: &QuestionnaireLoopService,
    ) -> Result<(), QuestionnaireError> {
        questionnaire.ensure_profile(&mut self.session).await.map(|_| ())
    }
}

#[must_use]
pub fn start_chat(questionnaire: &QuestionnaireLoopService) -> ChatVm {
    ChatVm::new(questionnaire.start())
}
