use std::path::Path;

use serde_json::json;

use crate::models::resume::ResumeCandidate;
use crate::models::submission::LocalValidationError;
use crate::services::logger::Logger;
use crate::services::validation::{self, PDF_MIME_TYPE};

/// PDF files start with this marker regardless of their name.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Notification produced while taking in a batch of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeNotice {
    Rejected(LocalValidationError),
    Accepted { count: usize },
}

impl std::fmt::Display for IntakeNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeNotice::Rejected(err) => write!(f, "{}", err),
            IntakeNotice::Accepted { count } => write!(
                f,
                "{} file{} uploaded successfully.",
                count,
                if *count > 1 { "s" } else { "" }
            ),
        }
    }
}

/// Result of validating a batch at the boundary.
#[derive(Debug, Default)]
pub struct IntakeOutcome {
    pub accepted: Vec<ResumeCandidate>,
    pub notices: Vec<IntakeNotice>,
}

impl IntakeOutcome {
    pub fn rejected(&self) -> impl Iterator<Item = &LocalValidationError> {
        self.notices.iter().filter_map(|n| match n {
            IntakeNotice::Rejected(err) => Some(err),
            IntakeNotice::Accepted { .. } => None,
        })
    }
}

/// Split raw candidates into accepted PDFs and per-file rejection notices.
pub fn intake(candidates: Vec<ResumeCandidate>, logger: &dyn Logger) -> IntakeOutcome {
    let mut outcome = IntakeOutcome::default();

    for candidate in candidates {
        if let Some(err) = validation::validate_pdf(&candidate) {
            logger.warn(
                "Invalid file type attempted",
                json!({ "fileName": candidate.name, "fileType": candidate.content_type }),
            );
            outcome.notices.push(IntakeNotice::Rejected(err));
            continue;
        }

        if validation::exceeds_size_limit(&candidate) {
            logger.warn(
                "File exceeds size limit",
                json!({ "fileName": candidate.name, "size": candidate.size() }),
            );
        }

        outcome.accepted.push(candidate);
    }

    if !outcome.accepted.is_empty() {
        let count = outcome.accepted.len();
        logger.info("Files uploaded successfully", json!({ "count": count }));
        outcome.notices.push(IntakeNotice::Accepted { count });
    }

    outcome
}

/// Read a file from disk, declaring its media type from content first and
/// the extension second.
pub async fn read_candidate(path: &Path) -> Result<ResumeCandidate, IntakeError> {
    let payload = tokio::fs::read(path).await.map_err(|source| IntakeError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content_type = if payload.starts_with(PDF_MAGIC) {
        PDF_MIME_TYPE.to_string()
    } else {
        mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    };

    Ok(ResumeCandidate::new(name, content_type, payload))
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Failed to read {path}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
