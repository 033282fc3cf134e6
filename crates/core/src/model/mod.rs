mod form;
mod profile;
mod session;
mod transcript;

pub use form::{
    FinalQuestionnaire, FinalQuestionnaireDraft, FinancialProduct, FormError, InvestmentHorizon,
    InvestmentObjective,
};
pub use profile::{EsgProfile, MAX_SCORE, ProfileAxis, ProfileParseError};
pub use session::{QuestionnaireProgress, QuestionnaireState, QuestionnaireStateError, Step};
pub use transcript::{Speaker, Transcript, TranscriptEntry};
