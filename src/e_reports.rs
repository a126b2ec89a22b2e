use serde::Serialize;

use crate::e_position::{Diagnostics, Position};

#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    position: &'a Position,
    message: &'a str,
}

/// `file:line: message`, one per line, in position order.
pub fn render_text(diagnostics: &Diagnostics) -> String {
    diagnostics
        .iter()
        .map(|(position, message)| format!("{}: {}\n", position, message))
        .collect()
}

/// A JSON array of `{filename, line, message}` objects in position order.
pub fn render_json(diagnostics: &Diagnostics) -> serde_json::Result<String> {
    let entries: Vec<Entry<'_>> = diagnostics
        .iter()
        .map(|(position, message)| Entry { position, message })
        .collect();
    serde_json::to_string_pretty(&entries)
}
