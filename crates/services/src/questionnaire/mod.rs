mod service;
mod view;
mod workflow;

// Public API of the questionnaire subsystem.
pub use crate::error::QuestionnaireError;
pub use service::QuestionnaireSession;
pub use view::{SubmissionListItem, SubmissionService};
pub use workflow::{QuestionnaireLoopService, TurnOutcome};
