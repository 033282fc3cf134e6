use chrono::{DateTime, Utc};
use std::sync::Arc;

use esg_core::model::{EsgProfile, InvestmentHorizon, InvestmentObjective};
use storage::repository::{ProfileSubmission, SubmissionId, SubmissionRepository, SubmissionRow};

use crate::error::QuestionnaireError;

/// Presentation-agnostic list item for a stored submission.
///
/// No pre-formatted strings; the UI formats timestamps and labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionListItem {
    pub id: SubmissionId,
    pub submitted_at: DateTime<Utc>,
    pub profile: EsgProfile,
    pub objective: InvestmentObjective,
    pub horizon: InvestmentHorizon,
    pub product_count: usize,
}

impl SubmissionListItem {
    #[must_use]
    pub fn from_row(row: &SubmissionRow) -> Self {
        let submission = &row.submission;
        Self {
            id: row.id,
            submitted_at: submission.submitted_at,
            profile: submission.profile,
            objective: submission.form.objective(),
            horizon: submission.form.horizon(),
            product_count: submission.form.products().len(),
        }
    }
}

/// Read access to finished runs.
#[derive(Clone)]
pub struct SubmissionService {
    submissions: Arc<dyn SubmissionRepository>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(submissions: Arc<dyn SubmissionRepository>) -> Self {
        Self { submissions }
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireError::Storage` on repository failures.
    pub async fn list_recent(
        &self,
        limit: u32,
    ) -> Result<Vec<SubmissionListItem>, QuestionnaireError> {
        let rows = self.submissions.list_submissions(limit).await?;
        Ok(rows.iter().map(SubmissionListItem::from_row).collect())
    }

    /// # Errors
    ///
    /// Returns `QuestionnaireError::Storage` if missing or on repository failures.
    pub async fn get(&self, id: SubmissionId) -> Result<ProfileSubmission, QuestionnaireError> {
        Ok(self.submissions.get_submission(id).await?)
    }
}
