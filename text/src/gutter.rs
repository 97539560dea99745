//! Line-number gutter shown beside the overlay

use std::fmt::Write;

/// Number of lines in `text`. An empty buffer and a trailing newline each
/// count as a line, matching what a text area displays.
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// One `<div class="line-number">` per line, numbered from 1.
pub fn render_gutter(text: &str) -> String {
    let mut out = String::new();
    for number in 1..=line_count(text) {
        let _ = write!(out, r#"<div class="line-number">{number}</div>"#);
    }
    out
}
