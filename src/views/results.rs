use crate::app_state::AppState;
use crate::models::filter::FilterResponse;

/// Shortlist view; `None` unless the last submission succeeded.
pub fn render(state: &AppState) -> Option<String> {
    state.status().response().map(render_response)
}

pub fn render_response(response: &FilterResponse) -> String {
    let threshold = response.display_threshold();
    let mut lines = vec![
        format!("Shortlisted Resumes (threshold: {}%)", threshold),
        format!(
            "Total Uploaded: {}  Processed: {}  Shortlisted: {}",
            response.total(),
            response.processed(),
            response.shortlisted()
        ),
    ];

    if response.resumes.is_empty() {
        lines.push(format!("No resumes met the {}% similarity threshold.", threshold));
        return super::join_lines(lines);
    }

    lines.push(format!("Resumes with similarity >= {}%", threshold));
    lines.extend(response.resumes.iter().enumerate().map(|(index, resume)| {
        format!(
            "  #{:<3} {:<40} {:>7.2}%  {}",
            index + 1,
            resume.filename,
            resume.score(),
            resume.band()
        )
    }));
    super::join_lines(lines)
}
