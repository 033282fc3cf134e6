#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod follow_up;
pub mod llm;
pub mod profile_synthesizer;
pub mod prompts;
pub mod quality_gate;
pub mod questionnaire;

pub use esg_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, LlmError, QuestionnaireError};
pub use follow_up::FollowUpGenerator;
pub use llm::{ChatCompletionsClient, LanguageModel, LlmConfig};
pub use profile_synthesizer::ProfileSynthesizer;
pub use quality_gate::QualityGate;
pub use questionnaire::{
    QuestionnaireLoopService, QuestionnaireSession, SubmissionListItem, SubmissionService,
    TurnOutcome,
};
