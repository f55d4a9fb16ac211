//! Test fixtures for submission tests

use resume_filter_client::models::filter::{FilterResponse, ScoredResume};
use resume_filter_client::models::resume::ResumeCandidate;

/// Smallest byte sequence the scoring service treats as a PDF.
pub const MINIMAL_PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\ntrailer << /Root 1 0 R >>\n%%EOF\n";

pub const JOB_DESCRIPTION: &str =
    "Senior backend engineer with Rust, PostgreSQL and distributed systems experience.";

/// Successful response body from a 5-resume run with a 70% threshold.
pub const SUCCESS_BODY: &str = r#"{
    "total_resumes": 5,
    "processed_resumes": 5,
    "filtered_resumes": 2,
    "threshold": 70,
    "resumes": [
        {"filename": "a.pdf", "similarity_score": 91.2},
        {"filename": "b.pdf", "similarity_score": 74.0}
    ]
}"#;

pub fn success_response() -> FilterResponse {
    FilterResponse {
        total_resumes: Some(5),
        processed_resumes: Some(5),
        filtered_resumes: Some(2),
        threshold: Some(70.0),
        resumes: vec![
            ScoredResume {
                filename: "a.pdf".to_string(),
                similarity_score: Some(91.2),
            },
            ScoredResume {
                filename: "b.pdf".to_string(),
                similarity_score: Some(74.0),
            },
        ],
    }
}

pub fn pdf(name: &str) -> ResumeCandidate {
    ResumeCandidate::new(name, "application/pdf", MINIMAL_PDF.to_vec())
}

pub fn doc(name: &str) -> ResumeCandidate {
    ResumeCandidate::new(name, "application/msword", b"\xD0\xCF\x11\xE0".to_vec())
}
