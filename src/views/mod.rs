//! Text rendering of the session.
//!
//! Every function here is a pure projection of [`AppState`]; nothing in this
//! module fetches or mutates.

pub mod job_description;
pub mod results;
pub mod upload;

use crate::app_state::AppState;
use crate::models::submission::View;

/// Render whichever section is active, followed by results when present.
pub fn render(state: &AppState) -> String {
    let mut out = match state.view() {
        View::Upload => upload::render(state),
        View::JobDescription => job_description::render(state),
    };
    if let Some(results) = results::render(state) {
        out.push('\n');
        out.push_str(&results);
    }
    out
}

/// One line per entry, each newline-terminated.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
