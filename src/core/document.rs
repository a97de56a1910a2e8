//! Document model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Document identifier: creation time in milliseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A short text document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Assigned once at creation, never reassigned
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    /// Toggled only by explicit user action
    #[serde(default)]
    pub completed: bool,
}

/// The two states a document can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState {
    Active,
    Completed,
}

impl Document {
    /// Create a new active document
    pub fn new(id: DocumentId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            completed: false,
        }
    }

    /// Current state of the document
    pub fn state(&self) -> DocumentState {
        if self.completed {
            DocumentState::Completed
        } else {
            DocumentState::Active
        }
    }

    /// Flip between active and completed
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Whether the title matches an already lowercased search term
    pub(crate) fn title_contains_lowercase(&self, term: &str) -> bool {
        term.is_empty() || self.title.to_lowercase().contains(term)
    }
}
