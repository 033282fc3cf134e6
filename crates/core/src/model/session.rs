use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{EsgProfile, Transcript};
use crate::question::{Prompt, QuestionBank, Stage};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionnaireStateError {
    #[error("all questions have already been answered")]
    Completed,

    #[error("profile has already been computed")]
    ProfileAlreadySet,
}

/// What the questionnaire is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// An answer to this prompt (or to its follow-up, if one is pending).
    Asking(Prompt),
    /// Every question has an accepted answer.
    Profiling,
}

/// Aggregated view of questionnaire progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Mutable state of one questionnaire run.
///
/// Created empty at session start and mutated in place per turn. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireState {
    transcript: Transcript,
    answers: Vec<String>,
    general_idx: usize,
    news_idx: usize,
    follow_up_pending: bool,
    shown: Option<(Stage, usize)>,
    profile: Option<EsgProfile>,
    submitted: bool,
}

impl QuestionnaireState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Answers that feed the profile, in the order they were accepted.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn general_idx(&self) -> usize {
        self.general_idx
    }

    #[must_use]
    pub fn news_idx(&self) -> usize {
        self.news_idx
    }

    #[must_use]
    pub fn follow_up_pending(&self) -> bool {
        self.follow_up_pending
    }

    #[must_use]
    pub fn profile(&self) -> Option<EsgProfile> {
        self.profile
    }

    #[must_use]
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    fn active_stage(&self, bank: &QuestionBank) -> Option<Stage> {
        if self.general_idx < bank.len(Stage::General) {
            Some(Stage::General)
        } else if self.news_idx < bank.len(Stage::News) {
            Some(Stage::News)
        } else {
            None
        }
    }

    /// General questions first, then headlines, then profiling.
    #[must_use]
    pub fn current_step(&self, bank: &QuestionBank) -> Step {
        let prompt = self.active_stage(bank).and_then(|stage| {
            let index = match stage {
                Stage::General => self.general_idx,
                Stage::News => self.news_idx,
            };
            bank.prompt(stage, index)
        });
        prompt.map_or(Step::Profiling, Step::Asking)
    }

    #[must_use]
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        self.active_stage(bank).is_none()
    }

    /// Appends the current prompt to the transcript unless it was already shown.
    ///
    /// Returns the prompt when it was added.
    pub fn show_current_prompt(&mut self, bank: &QuestionBank) -> Option<Prompt> {
        let Step::Asking(prompt) = self.current_step(bank) else {
            return None;
        };
        let key = (prompt.stage, prompt.index);
        if self.shown == Some(key) {
            return None;
        }
        self.shown = Some(key);
        self.transcript.push_bot(prompt.text.clone());
        Some(prompt)
    }

    pub fn record_user(&mut self, text: impl Into<String>) {
        self.transcript.push_user(text);
    }

    /// Shows a clarifying question and waits for its answer.
    pub fn begin_follow_up(&mut self, question: impl Into<String>) {
        self.transcript.push_bot(question);
        self.follow_up_pending = true;
    }

    /// Accepts `answer` for the current prompt and moves to the next one.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireStateError::Completed` if every question is answered.
    pub fn accept_answer(
        &mut self,
        bank: &QuestionBank,
        answer: impl Into<String>,
    ) -> Result<(), QuestionnaireStateError> {
        let stage = self
            .active_stage(bank)
            .ok_or(QuestionnaireStateError::Completed)?;
        self.answers.push(answer.into());
        match stage {
            Stage::General => self.general_idx += 1,
            Stage::News => self.news_idx += 1,
        }
        self.follow_up_pending = false;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireStateError::ProfileAlreadySet` on a second call.
    pub fn set_profile(&mut self, profile: EsgProfile) -> Result<(), QuestionnaireStateError> {
        if self.profile.is_some() {
            return Err(QuestionnaireStateError::ProfileAlreadySet);
        }
        self.profile = Some(profile);
        Ok(())
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    #[must_use]
    pub fn progress(&self, bank: &QuestionBank) -> QuestionnaireProgress {
        let total = bank.total();
        let answered = self.general_idx + self.news_idx;
        QuestionnaireProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_complete(bank),
        }
    }
}
