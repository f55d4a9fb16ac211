use strum::Display;

use crate::models::filter::FilterResponse;

/// Lifecycle of the current filter submission.
///
/// Exactly one variant holds at a time. `Validating` is not represented: the
/// precondition checks run synchronously inside `AppState::begin_submit`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(FilterResponse),
    Failed(FilterError),
}

impl SubmissionStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded(_) | SubmissionStatus::Failed(_))
    }

    pub fn response(&self) -> Option<&FilterResponse> {
        match self {
            SubmissionStatus::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FilterError> {
        match self {
            SubmissionStatus::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Problems caught on the client before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocalValidationError {
    #[error("Please upload at least one resume PDF file.")]
    NoFiles,

    #[error("Please enter a job description.")]
    NoDescription,

    #[error("{name} is not a PDF file. Only PDF files are allowed.")]
    NotPdf { name: String },
}

/// Terminal failure of a submission. The `Display` output is the message
/// shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error(transparent)]
    LocalValidation(#[from] LocalValidationError),

    #[error("Request timeout. Please try again.")]
    Timeout,

    #[error("Network error. Please check your connection and try again.")]
    Network { detail: String },

    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("The scoring service returned a response that could not be read. Please try again.")]
    Decode { detail: String },
}

impl FilterError {
    pub fn kind(&self) -> FilterErrorKind {
        match self {
            FilterError::LocalValidation(_) => FilterErrorKind::LocalValidation,
            FilterError::Timeout => FilterErrorKind::Timeout,
            FilterError::Network { .. } => FilterErrorKind::Network,
            FilterError::Remote { .. } => FilterErrorKind::Remote,
            FilterError::Decode { .. } => FilterErrorKind::Decode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FilterErrorKind {
    LocalValidation,
    Timeout,
    Network,
    Remote,
    Decode,
}

/// A submit attempt refused without touching the current status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A filter request is already in progress")]
    InFlight,
}

/// Section of the session currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum View {
    #[default]
    Upload,
    JobDescription,
}
