//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document format error: {0}")]
    DocumentFormat(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Artifact loading error: {0}")]
    ArtifactLoad(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl ResumeMatcherError {
    /// Message that is safe to show to whoever submitted the request.
    ///
    /// Scoring and internal failures are reported generically; the detailed
    /// error should only go to the log.
    pub fn public_message(&self) -> String {
        match self {
            ResumeMatcherError::Scoring(_) | ResumeMatcherError::Internal(_) => {
                "Internal error while scoring the resume".to_string()
            }
            ResumeMatcherError::DocumentFormat(_) => {
                "The uploaded document could not be read as a PDF".to_string()
            }
            other => other.to_string(),
        }
    }

    /// True for failures that must stop the process before it serves anything.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ResumeMatcherError::ArtifactLoad(_) | ResumeMatcherError::Configuration(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_details_are_hidden() {
        let err = ResumeMatcherError::Scoring("coef has 12 columns, features have 9".to_string());
        let message = err.public_message();

        assert!(!message.contains("coef"));
        assert!(!message.contains("12"));
    }

    #[test]
    fn test_unsupported_format_is_shown_verbatim() {
        let err = ResumeMatcherError::UnsupportedFormat("Only PDF files are supported".to_string());
        assert!(err.public_message().contains("Only PDF files are supported"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(ResumeMatcherError::ArtifactLoad("missing".into()).is_fatal());
        assert!(!ResumeMatcherError::DocumentFormat("corrupt".into()).is_fatal());
    }
}
