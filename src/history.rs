// history.rs

use itertools::Itertools;

pub const HISTORY_HEADER: &str = "All operations performed so far:";
pub const EMPTY_HISTORY: &str = "No operations performed yet.";

/// Append-only log of the feedback lines of successful calculations.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn append(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    /// Header plus one tab-indented line per entry, or the empty-state message.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_HISTORY.to_string();
        }
        let body = self.entries.iter().map(|e| format!("\t{}", e)).join("\n");
        format!("{}\n{}", HISTORY_HEADER, body)
    }
}
