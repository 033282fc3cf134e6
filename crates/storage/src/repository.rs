use async_trait::async_trait;
use chrono::{DateTime, Utc};
use esg_core::model::{EsgProfile, FinalQuestionnaire, Transcript};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),
}

/// Identifier assigned to a stored submission.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmissionId({})", self.0)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub profile: EsgProfile,
    pub answers: Vec<String>,
    pub transcript: Transcript,
    pub form: FinalQuestionnaire,
    pub submitted_at: DateTime<Utc>,
}

/// A stored submission with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRow {
    pub id: SubmissionId,
    pub submission: ProfileSubmission,
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store a finished submission and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the submission cannot be stored.
    async fn append_submission(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<SubmissionId, StorageError>;

    /// Fetch a submission by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_submission(&self, id: SubmissionId) -> Result<ProfileSubmission, StorageError>;

    /// Newest submissions first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_submissions(&self, limit: u32) -> Result<Vec<SubmissionRow>, StorageError>;
}

#[derive(Default)]
struct Submissions {
    next_id: u64,
    rows: BTreeMap<SubmissionId, ProfileSubmission>,
}

/// Process-lifetime repository; nothing outlives the app.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    submissions: Arc<Mutex<Submissions>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryRepository {
    async fn append_submission(
        &self,
        submission: &ProfileSubmission,
    ) -> Result<SubmissionId, StorageError> {
        let mut guard = self
            .submissions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.next_id += 1;
        let id = SubmissionId::new(guard.next_id);
        guard.rows.insert(id, submission.clone());
        Ok(id)
    }

    async fn get_submission(&self, id: SubmissionId) -> Result<ProfileSubmission, StorageError> {
        let guard = self
            .submissions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.rows.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn list_submissions(&self, limit: u32) -> Result<Vec<SubmissionRow>, StorageError> {
        let guard = self
            .submissions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(guard
            .rows
            .iter()
            .rev()
            .take(limit)
            .map(|(id, submission)| SubmissionRow {
                id: *id,
                submission: submission.clone(),
            })
            .collect())
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub submissions: Arc<dyn SubmissionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let submissions: Arc<dyn SubmissionRepository> = Arc::new(InMemoryRepository::new());
        Self { submissions }
    }
}
