use serde::{Deserialize, Serialize};

/// One parsed feed item. Built once by the normalizer and never mutated
/// afterwards; the entry store holds these for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub title: Option<String>,
    /// Body content, already converted from HTML to plain text.
    pub summary: String,
    /// Publish timestamp rendered to text at parse time.
    pub date: Option<String>,
}

impl Entry {
    pub fn new(title: Option<String>, summary: String, date: Option<String>) -> Self {
        Self {
            title,
            summary,
            date,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled)")
    }

    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}
