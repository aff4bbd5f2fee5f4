use serde::Serialize;
use thiserror::Error;

use crate::llm_client::recovery::RecoveryError;
use crate::llm_client::LlmError;

const INCOMPLETE_REPORT_MESSAGE: &str =
    "The AI was unable to generate a complete audit report. Please check your inputs and try again.";

/// Why an audit produced no report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("AI service call failed: {0}")]
    Service(#[from] LlmError),

    #[error("malformed report: {0}")]
    Malformed(#[from] RecoveryError),

    /// The model answered with JSON but without an overall score.
    #[error("incomplete report")]
    Incomplete { summary: Option<String> },
}

impl AuditError {
    pub fn code(&self) -> &'static str {
        match self {
            AuditError::Service(_) => "LLM_ERROR",
            AuditError::Malformed(_) => "MALFORMED_REPORT",
            AuditError::Incomplete { .. } => "INCOMPLETE_REPORT",
        }
    }

    /// Message safe to show the person who submitted the form.
    pub fn user_message(&self) -> String {
        match self {
            AuditError::Service(_) => "Failed to generate the audit report due to an issue \
                with the AI service. Please try again later."
                .to_string(),
            AuditError::Malformed(RecoveryError::NoJson) => {
                "The AI returned an invalid response format.".to_string()
            }
            AuditError::Malformed(RecoveryError::Incomplete) => {
                "The AI returned an incomplete JSON response.".to_string()
            }
            AuditError::Malformed(RecoveryError::Parse(_)) => {
                "The AI generated a malformed report that could not be read. Please try again."
                    .to_string()
            }
            AuditError::Incomplete { summary } => summary
                .clone()
                .unwrap_or_else(|| INCOMPLETE_REPORT_MESSAGE.to_string()),
        }
    }

    pub fn to_failure(&self) -> AuditFailure {
        AuditFailure {
            code: self.code(),
            message: self.user_message(),
        }
    }
}

/// Serializable record of a failed audit, kept in the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditFailure {
    pub code: &'static str,
    pub message: String,
}
