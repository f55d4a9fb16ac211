use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A raw file observed at the intake boundary, before PDF validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeCandidate {
    pub name: String,
    /// Declared media type (may be empty when nothing was declared).
    pub content_type: String,
    pub payload: Bytes,
}

impl ResumeCandidate {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            payload: payload.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}

/// A resume accepted into the upload store.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub payload: Bytes,
    pub added_at: DateTime<Utc>,
}

impl UploadedFile {
    /// Wrap a candidate with a freshly generated id.
    pub fn from_candidate(candidate: ResumeCandidate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: candidate.name,
            payload: candidate.payload,
            added_at: Utc::now(),
        }
    }

    pub fn size(&self) -> usize {
        self.payload.len()
    }
}
