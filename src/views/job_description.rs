use crate::app_state::AppState;
use crate::models::submission::SubmissionStatus;

/// Label of the submit control; disabled while a request is in flight.
pub fn submit_label(status: &SubmissionStatus) -> &'static str {
    if status.is_in_flight() {
        "[Filtering...] (disabled)"
    } else {
        "[Filter]"
    }
}

pub fn render(state: &AppState) -> String {
    let text = state.job_description();
    let mut lines = vec!["Job Description".to_string()];

    if text.is_empty() {
        lines.push("Enter job description here...".to_string());
    } else {
        lines.push(text.to_string());
        lines.push(format!("Character count: {}", text.chars().count()));
    }

    match state.status() {
        SubmissionStatus::Failed(error) => lines.push(format!("Error: {}", error)),
        SubmissionStatus::Succeeded(_) => lines.push("Filter completed successfully!".to_string()),
        SubmissionStatus::Idle | SubmissionStatus::InFlight => {}
    }

    lines.push(submit_label(state.status()).to_string());
    super::join_lines(lines)
}
