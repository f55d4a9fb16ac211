use serde::{Deserialize, Serialize};
use strum::Display;

/// Threshold shown when the service does not report one.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Body returned by `POST /api/filter-resumes` on success.
///
/// Fields are kept exactly as received. Missing numbers are defaulted only
/// when rendering, through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_resumes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_resumes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_resumes: Option<u64>,
    /// Similarity cutoff as a percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub resumes: Vec<ScoredResume>,
}

impl FilterResponse {
    pub fn total(&self) -> u64 {
        self.total_resumes.unwrap_or(0)
    }

    pub fn processed(&self) -> u64 {
        self.processed_resumes.unwrap_or(0)
    }

    pub fn shortlisted(&self) -> u64 {
        self.filtered_resumes.unwrap_or(0)
    }

    /// Threshold for display; an absent or zero value falls back to 70%.
    pub fn display_threshold(&self) -> f64 {
        match self.threshold {
            Some(t) if t != 0.0 => t,
            _ => DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResume {
    #[serde(default)]
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl ScoredResume {
    pub fn score(&self) -> f64 {
        self.similarity_score.unwrap_or(0.0)
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score())
    }
}

/// Coarse grouping of a similarity score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 85.0 {
            ScoreBand::High
        } else if score >= 75.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Error body the scoring service sends with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
