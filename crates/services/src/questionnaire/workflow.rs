use std::sync::Arc;

use esg_core::model::{EsgProfile, FinalQuestionnaireDraft, Step};
use esg_core::question::{Prompt, QuestionBank, Stage};
use storage::repository::{ProfileSubmission, SubmissionId, SubmissionRepository};
use tracing::{debug, info};

use super::service::QuestionnaireSession;
use crate::error::QuestionnaireError;
use crate::follow_up::FollowUpGenerator;
use crate::profile_synthesizer::ProfileSynthesizer;
use crate::quality_gate::QualityGate;
use crate::Clock;

/// What happened after the user sent a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// The answer was weak; this clarifying question was asked.
    FollowUp { question: String },
    /// An answer was accepted and the next prompt is now shown.
    Advanced { next: Prompt },
    /// The last answer was accepted; the profile can be computed.
    Completed,
}

/// Drives a questionnaire run turn by turn.
///
/// Each question is shown once and takes exactly one answer. A poor first answer
/// triggers one follow-up whose answer is accepted without another check.
#[derive(Clone)]
pub struct QuestionnaireLoopService {
    clock: Clock,
    bank: QuestionBank,
    gate: QualityGate,
    follow_ups: FollowUpGenerator,
    synthesizer: ProfileSynthesizer,
    submissions: Arc<dyn SubmissionRepository>,
}

impl QuestionnaireLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        gate: QualityGate,
        follow_ups: FollowUpGenerator,
        synthesizer: ProfileSynthesizer,
        submissions: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            clock,
            bank: QuestionBank::default(),
            gate,
            follow_ups,
            synthesizer,
            submissions,
        }
    }

    #[must_use]
    pub fn with_bank(mut self, bank: QuestionBank) -> Self {
        self.bank = bank;
        self
    }

    /// Start a new run; the first prompt is already shown.
    #[must_use]
    pub fn start(&self) -> QuestionnaireSession {
        info!(questions = self.bank.total(), "questionnaire started");
        QuestionnaireSession::new(self.bank.clone())
    }

    /// Record the user's message and process it.
    ///
    /// Blank input is ignored. If processing fails the message stays in the
    /// transcript and can be re-processed with [`Self::retry_last`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Completed` when every question is answered,
    /// or model errors from the quality gate and follow-up generator.
    pub async fn answer_current(
        &self,
        session: &mut QuestionnaireSession,
        text: &str,
    ) -> Result<TurnOutcome, QuestionnaireError> {
        if text.trim().is_empty() {
            return Ok(TurnOutcome::Ignored);
        }
        if session.is_complete() {
            return Err(QuestionnaireError::Completed);
        }

        session.set_pending_retry(None);
        session.parts_mut().1.record_user(text);
        self.process(session, text.to_string()).await
    }

    /// Re-process the last message after a failure, without recording it again.
    ///
    /// # Errors
    ///
    /// Same as [`Self::answer_current`].
    pub async fn retry_last(
        &self,
        session: &mut QuestionnaireSession,
    ) -> Result<TurnOutcome, QuestionnaireError> {
        let Some(text) = session.take_pending_retry() else {
            return Ok(TurnOutcome::Ignored);
        };
        self.process(session, text).await
    }

    async fn process(
        &self,
        session: &mut QuestionnaireSession,
        text: String,
    ) -> Result<TurnOutcome, QuestionnaireError> {
        let result = self.process_inner(session, &text).await;
        if result.is_err() {
            session.set_pending_retry(Some(text));
        }
        result
    }

    async fn process_inner(
        &self,
        session: &mut QuestionnaireSession,
        text: &str,
    ) -> Result<TurnOutcome, QuestionnaireError> {
        if session.follow_up_pending() {
            debug!("follow-up answered; accepting without evaluation");
            return self.accept(session, text);
        }

        if self.gate.is_poor(text).await? {
            let question = self.follow_ups.generate(text).await?;
            debug!("answer judged poor; follow-up asked");
            session.parts_mut().1.begin_follow_up(question.clone());
            return Ok(TurnOutcome::FollowUp { question });
        }

        self.accept(session, text)
    }

    fn accept(
        &self,
        session: &mut QuestionnaireSession,
        text: &str,
    ) -> Result<TurnOutcome, QuestionnaireError> {
        let (bank, state) = session.parts_mut();
        state.accept_answer(bank, text)?;

        match state.current_step(bank) {
            Step::Asking(next) => {
                if next.index == 0 && next.stage == Stage::News {
                    info!("general questions done; moving to news");
                }
                state.show_current_prompt(bank);
                Ok(TurnOutcome::Advanced { next })
            }
            Step::Profiling => {
                info!(answers = state.answers().len(), "questionnaire completed");
                Ok(TurnOutcome::Completed)
            }
        }
    }

    /// Compute the profile once; later calls return the cached value.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::NotComplete` before the last answer, or
    /// model and parse errors from the synthesizer.
    pub async fn ensure_profile(
        &self,
        session: &mut QuestionnaireSession,
    ) -> Result<EsgProfile, QuestionnaireError> {
        if let Some(profile) = session.profile() {
            return Ok(profile);
        }
        if !session.is_complete() {
            return Err(QuestionnaireError::NotComplete);
        }

        let profile = self.synthesizer.synthesize(session.state().answers()).await?;
        session.parts_mut().1.set_profile(profile)?;
        info!(
            environmental = profile.environmental,
            social = profile.social,
            governance = profile.governance,
            risk = profile.risk,
            "profile computed"
        );
        Ok(profile)
    }

    /// Validate and store the final form alongside the profile and answers.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::AlreadySubmitted` on a second submit,
    /// `QuestionnaireError::NotComplete` if no profile exists yet,
    /// `QuestionnaireError::Form` for missing fields, or storage errors.
    pub async fn submit_form(
        &self,
        session: &mut QuestionnaireSession,
        draft: &FinalQuestionnaireDraft,
    ) -> Result<SubmissionId, QuestionnaireError> {
        if session.submitted() {
            return Err(QuestionnaireError::AlreadySubmitted);
        }
        let profile = session.profile().ok_or(QuestionnaireError::NotComplete)?;
        let form = draft.validate()?;

        let submission = ProfileSubmission {
            profile,
            answers: session.state().answers().to_vec(),
            transcript: session.transcript().clone(),
            form,
            submitted_at: self.clock.now(),
        };
        let id = self.submissions.append_submission(&submission).await?;
        session.parts_mut().1.mark_submitted();
        info!(%id, "final form submitted");
        Ok(id)
    }
}
