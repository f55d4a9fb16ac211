use crate::models::resume::ResumeCandidate;
use crate::models::submission::LocalValidationError;

/// Media type that marks a resume as PDF.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File extension that marks a resume as PDF (compared case-insensitively).
pub const PDF_EXTENSION: &str = ".pdf";

/// Advisory per-file size limit (10 MB), matching the scoring service.
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Accept a candidate if either its declared type or its name says PDF.
pub fn is_pdf(candidate: &ResumeCandidate) -> bool {
    candidate.content_type == PDF_MIME_TYPE
        || candidate.name.to_lowercase().ends_with(PDF_EXTENSION)
}

/// Keep only the PDF candidates, preserving their relative order.
pub fn filter_pdfs<'a, I>(candidates: I) -> Vec<ResumeCandidate>
where
    I: IntoIterator<Item = &'a ResumeCandidate>,
{
    candidates
        .into_iter()
        .filter(|c| is_pdf(c))
        .cloned()
        .collect()
}

/// `None` for an accepted file, otherwise a rejection naming the file.
pub fn validate_pdf(candidate: &ResumeCandidate) -> Option<LocalValidationError> {
    if is_pdf(candidate) {
        None
    } else {
        Some(LocalValidationError::NotPdf {
            name: candidate.name.clone(),
        })
    }
}

pub fn exceeds_size_limit(candidate: &ResumeCandidate) -> bool {
    candidate.size() > MAX_FILE_SIZE_BYTES
}
