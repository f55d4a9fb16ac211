use std::sync::Arc;

use crate::models::filter::FilterResponse;
use crate::models::resume::{ResumeCandidate, UploadedFile};
use crate::models::submission::{
    FilterError, LocalValidationError, SubmissionStatus, SubmitRejected, View,
};
use crate::services::intake::{self, IntakeOutcome};
use crate::services::logger::{Logger, TracingLogger};
use crate::services::scoring::ScoringClient;
use crate::services::uploads::UploadStore;

/// Workflow controller: owns the uploads, the job description, the active
/// view and the submission status. Every mutation goes through `&mut self`.
pub struct AppState {
    pub uploads: UploadStore,
    job_description: String,
    view: View,
    status: SubmissionStatus,
    attempt: u64,
    logger: Arc<dyn Logger>,
}

/// Snapshot of a submission that passed its preconditions.
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    pub attempt: u64,
    pub files: Vec<UploadedFile>,
    /// Sent exactly as typed, without trimming.
    pub job_description: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TracingLogger))
    }
}

impl AppState {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            uploads: UploadStore::new(),
            job_description: String::new(),
            view: View::Upload,
            status: SubmissionStatus::Idle,
            attempt: 0,
            logger,
        }
    }

    // ── Uploads ──────────────────────────────────────────────────────

    /// Validate raw candidates, store the PDFs and reset the picker.
    pub fn upload(&mut self, candidates: Vec<ResumeCandidate>) -> IntakeOutcome {
        let outcome = intake::intake(candidates, self.logger.as_ref());
        self.uploads.add(outcome.accepted.iter().cloned());
        self.uploads.reset_input();
        outcome
    }

    // ── Job description ─────────────────────────────────────────────

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn push_job_description(&mut self, text: &str) {
        self.job_description.push_str(text);
    }

    // ── Views ───────────────────────────────────────────────────────

    pub fn view(&self) -> View {
        self.view
    }

    pub fn show_job_description(&mut self) {
        self.view = View::JobDescription;
    }

    pub fn show_uploads(&mut self) {
        self.view = View::Upload;
    }

    // ── Submission ──────────────────────────────────────────────────

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn current_attempt(&self) -> u64 {
        self.attempt
    }

    /// Clear the previous outcome, check preconditions and move to
    /// `InFlight`.
    ///
    /// Returns `Ok(None)` when a precondition failed; the status then holds
    /// the local validation error and nothing should be sent. A call made
    /// while a request is in flight is refused and changes nothing.
    pub fn begin_submit(&mut self) -> Result<Option<PreparedSubmission>, SubmitRejected> {
        if self.status.is_in_flight() {
            self.logger.warn(
                "Submit ignored while a request is in flight",
                serde_json::json!({ "attempt": self.attempt }),
            );
            return Err(SubmitRejected::InFlight);
        }

        self.status = SubmissionStatus::Idle;

        if self.uploads.is_empty() {
            self.status = SubmissionStatus::Failed(LocalValidationError::NoFiles.into());
            return Ok(None);
        }

        if self.job_description.trim().is_empty() {
            self.status = SubmissionStatus::Failed(LocalValidationError::NoDescription.into());
            return Ok(None);
        }

        self.attempt += 1;
        self.status = SubmissionStatus::InFlight;

        Ok(Some(PreparedSubmission {
            attempt: self.attempt,
            files: self.uploads.files().to_vec(),
            job_description: self.job_description.clone(),
        }))
    }

    /// Record the outcome of `attempt`. Outcomes for any attempt other than
    /// the one currently in flight are dropped and `false` is returned.
    pub fn complete_submit(
        &mut self,
        attempt: u64,
        outcome: Result<FilterResponse, FilterError>,
    ) -> bool {
        if !self.status.is_in_flight() || attempt != self.attempt {
            self.logger.debug(
                "Discarding stale submission outcome",
                serde_json::json!({ "attempt": attempt, "current": self.attempt }),
            );
            return false;
        }

        self.status = match outcome {
            Ok(response) => SubmissionStatus::Succeeded(response),
            Err(error) => SubmissionStatus::Failed(error),
        };
        true
    }

    /// Run one complete submit: preconditions, one request, outcome.
    pub async fn submit(
        &mut self,
        client: &ScoringClient,
    ) -> Result<&SubmissionStatus, SubmitRejected> {
        if let Some(prepared) = self.begin_submit()? {
            let outcome = client
                .filter_resumes(&prepared.files, &prepared.job_description)
                .await;
            self.complete_submit(prepared.attempt, outcome);
        }
        Ok(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::logger::NoopLogger;

    fn state() -> AppState {
        AppState::new(Arc::new(NoopLogger))
    }

    fn pdf(name: &str) -> ResumeCandidate {
        ResumeCandidate::new(name, "application/pdf", b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_no_files_fails_locally() {
        let mut app = state();
        app.set_job_description("Rust engineer");
        assert!(app.begin_submit().unwrap().is_none());
        assert_eq!(
            app.status(),
            &SubmissionStatus::Failed(LocalValidationError::NoFiles.into())
        );
    }

    #[test]
    fn test_files_checked_before_description() {
        let mut app = state();
        assert!(app.begin_submit().unwrap().is_none());
        assert_eq!(
            app.status().error(),
            Some(&FilterError::LocalValidation(LocalValidationError::NoFiles))
        );
    }

    #[test]
    fn test_blank_description_fails_locally() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf")]);
        app.set_job_description(" \n\t ");
        assert!(app.begin_submit().unwrap().is_none());
        assert_eq!(
            app.status(),
            &SubmissionStatus::Failed(LocalValidationError::NoDescription.into())
        );
        assert_eq!(app.current_attempt(), 0);
    }

    #[test]
    fn test_prepared_submission_keeps_untrimmed_text() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf"), pdf("b.pdf")]);
        app.set_job_description("  Senior Rust engineer\n");
        let prepared = app.begin_submit().unwrap().unwrap();
        assert_eq!(prepared.job_description, "  Senior Rust engineer\n");
        assert_eq!(prepared.files.len(), 2);
        assert_eq!(prepared.attempt, 1);
        assert!(app.status().is_in_flight());
    }

    #[test]
    fn test_second_begin_while_in_flight_rejected() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf")]);
        app.set_job_description("Backend developer");
        app.begin_submit().unwrap().unwrap();
        assert_eq!(app.begin_submit().unwrap_err(), SubmitRejected::InFlight);
        assert!(app.status().is_in_flight());
        assert_eq!(app.current_attempt(), 1);
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf")]);
        app.set_job_description("Backend developer");
        let first = app.begin_submit().unwrap().unwrap();
        assert!(app.complete_submit(first.attempt, Err(FilterError::Timeout)));

        let second = app.begin_submit().unwrap().unwrap();
        assert!(!app.complete_submit(first.attempt, Ok(FilterResponse::default())));
        assert!(app.status().is_in_flight());

        assert!(app.complete_submit(second.attempt, Ok(FilterResponse::default())));
        assert!(!app.complete_submit(second.attempt, Err(FilterError::Timeout)));
        assert!(app.status().response().is_some());
    }

    #[test]
    fn test_new_attempt_clears_previous_result() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf")]);
        app.set_job_description("Data engineer");
        let prepared = app.begin_submit().unwrap().unwrap();
        app.complete_submit(prepared.attempt, Ok(FilterResponse::default()));
        assert!(app.status().response().is_some());

        app.uploads.clear();
        app.begin_submit().unwrap();
        assert!(app.status().response().is_none());
        assert_eq!(
            app.status().error(),
            Some(&FilterError::LocalValidation(LocalValidationError::NoFiles))
        );
    }

    #[test]
    fn test_view_toggle_keeps_state() {
        let mut app = state();
        app.upload(vec![pdf("a.pdf")]);
        app.show_job_description();
        app.push_job_description("Platform ");
        app.push_job_description("engineer");
        app.show_uploads();
        assert_eq!(app.view(), View::Upload);
        assert_eq!(app.uploads.len(), 1);
        app.show_job_description();
        assert_eq!(app.job_description(), "Platform engineer");
    }

    #[test]
    fn test_upload_rejects_non_pdf_and_resets_picker() {
        let mut app = state();
        app.uploads.picker_mut().select([std::path::Path::new("/tmp/a.pdf")]);
        let outcome = app.upload(vec![
            pdf("a.pdf"),
            ResumeCandidate::new("notes.txt", "text/plain", b"hi".to_vec()),
        ]);
        assert_eq!(outcome.rejected().count(), 1);
        assert_eq!(app.uploads.len(), 1);
        assert!(app.uploads.picker().is_empty());
    }
}
