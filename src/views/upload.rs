use crate::app_state::AppState;

pub fn render(state: &AppState) -> String {
    let files = state.uploads.files();
    let mut lines = vec![
        "Upload Resumes".to_string(),
        "Only PDF files are allowed".to_string(),
    ];

    if files.is_empty() {
        lines.push("No files uploaded yet.".to_string());
        return super::join_lines(lines);
    }

    lines.push(format!("Uploaded files ({}):", files.len()));
    lines.extend(files.iter().enumerate().map(|(index, file)| {
        format!(
            "  {}. {} ({} KB, added {})",
            index + 1,
            file.name,
            file.size().div_ceil(1024),
            file.added_at.format("%H:%M:%S UTC")
        )
    }));
    super::join_lines(lines)
}
