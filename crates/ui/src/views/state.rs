use dioxus::prelude::*;
use services::{LlmError, QuestionnaireError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    ModelUnavailable,
    ModelFailed,
    ProfileUnreadable,
    IncompleteForm,
    NotFound,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Algo salió mal. Inténtalo de nuevo.",
            Self::ModelUnavailable => {
                "No hay modelo configurado. Define GROQ_API_KEY y reinicia la aplicación."
            }
            Self::ModelFailed => "El modelo no respondió. Inténtalo de nuevo.",
            Self::ProfileUnreadable => {
                "No se pudieron leer las puntuaciones del perfil. Inténtalo de nuevo."
            }
            Self::IncompleteForm => "Responde a las preguntas 2.1 y 2.2 antes de enviar.",
            Self::NotFound => "No se encontró el envío.",
        }
    }

    /// Whether the Retry button can help.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Unknown | Self::ModelFailed | Self::ProfileUnreadable)
    }

    #[must_use]
    pub fn from_questionnaire(err: &QuestionnaireError) -> Self {
        match err {
            QuestionnaireError::Llm(LlmError::Disabled) => Self::ModelUnavailable,
            QuestionnaireError::Llm(_) | QuestionnaireError::EmptyFollowUp => Self::ModelFailed,
            QuestionnaireError::Profile(_) => Self::ProfileUnreadable,
            QuestionnaireError::Form(_) => Self::IncompleteForm,
            QuestionnaireError::Storage(storage::repository::StorageError::NotFound) => {
                Self::NotFound
            }
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_core::model::{FormError, ProfileAxis, ProfileParseError};

    #[test]
    fn service_errors_map_to_view_errors() {
        let disabled = QuestionnaireError::Llm(LlmError::Disabled);
        assert_eq!(ViewError::from_questionnaire(&disabled), ViewError::ModelUnavailable);
        assert!(!ViewError::ModelUnavailable.is_retryable());

        let empty = QuestionnaireError::Llm(LlmError::EmptyResponse);
        assert_eq!(ViewError::from_questionnaire(&empty), ViewError::ModelFailed);

        let parse = QuestionnaireError::Profile(ProfileParseError::MissingScore {
            axis: ProfileAxis::Risk,
        });
        assert_eq!(ViewError::from_questionnaire(&parse), ViewError::ProfileUnreadable);
        assert!(ViewError::ProfileUnreadable.is_retryable());

        let form = QuestionnaireError::Form(FormError::MissingHorizon);
        assert_eq!(ViewError::from_questionnaire(&form), ViewError::IncompleteForm);
    }
}
