use reqwest::StatusCode;
use thiserror::Error;

use crate::models::submission_models::FormField;

pub const MSG_MISSING_IMAGE: &str = "Por favor, envie uma imagem.";
pub const MSG_MISSING_SCENARIO: &str = "Por favor, escolha um cenário.";
pub const MSG_MISSING_FIELDS: &str = "Por favor, preencha seu e-mail e sua altura.";
pub const MSG_SUCCESS: &str = "Imagem enviada com sucesso! Verifique seu e-mail em breve.";
pub const MSG_SEND_FAILED: &str = "Erro no envio. Tente novamente.";
pub const MSG_PROCESSING_FAILED: &str = "Erro ao processar a solicitação.";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("No image selected")]
    MissingImage,
    #[error("No scenario selected")]
    MissingScenario,
    #[error("Required field is empty: {0}")]
    MissingField(FormField),
    #[error("Failed to encode image: {0}")]
    Encoding(String),
    #[error("Failed to read form data: {0}")]
    FormRead(String),
    #[error("Webhook request failed: {0}")]
    Transport(String),
    #[error("Webhook rejected submission with status {0}")]
    Rejected(StatusCode),
}

impl SubmissionError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::MissingImage => MSG_MISSING_IMAGE,
            SubmissionError::MissingScenario => MSG_MISSING_SCENARIO,
            SubmissionError::MissingField(_) => MSG_MISSING_FIELDS,
            SubmissionError::Rejected(_) => MSG_SEND_FAILED,
            SubmissionError::Encoding(_)
            | SubmissionError::FormRead(_)
            | SubmissionError::Transport(_) => MSG_PROCESSING_FAILED,
        }
    }

    /// Validation failures are caught before anything leaves the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmissionError::MissingImage
                | SubmissionError::MissingScenario
                | SubmissionError::MissingField(_)
        )
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        SubmissionError::Transport(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid WEBHOOK_URL: {0}")]
    InvalidWebhookUrl(String),
    #[error("Invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_collapse_into_static_messages() {
        assert_eq!(SubmissionError::MissingImage.user_message(), MSG_MISSING_IMAGE);
        assert_eq!(
            SubmissionError::Rejected(StatusCode::INTERNAL_SERVER_ERROR).user_message(),
            MSG_SEND_FAILED
        );
        assert_eq!(
            SubmissionError::Transport("connection reset".to_string()).user_message(),
            MSG_PROCESSING_FAILED
        );
        assert_eq!(
            SubmissionError::Encoding("task panicked".to_string()).user_message(),
            MSG_PROCESSING_FAILED
        );
    }

    #[test]
    fn only_precondition_failures_are_validation() {
        assert!(SubmissionError::MissingScenario.is_validation());
        assert!(SubmissionError::MissingField(FormField::Height).is_validation());
        assert!(!SubmissionError::Rejected(StatusCode::BAD_REQUEST).is_validation());
    }
}
