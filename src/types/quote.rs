//! Quote types
//!
//! Defines the quote record shared by the fetcher, the liked list and the view.

use serde::{Deserialize, Serialize};

/// A single quote as shown to the user and stored in the liked list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Identifier assigned by the remote source, always in string form
    pub id: String,
    /// The quote text
    pub content: String,
    /// Author name, empty when unknown
    #[serde(default)]
    pub author: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(id: impl Into<String>, content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Whether `other` refers to the same quote. Only ids are compared.
    pub fn same_as(&self, other: &Quote) -> bool {
        self.id == other.id
    }

    /// Text used when copying a quote out of the app
    pub fn display_text(&self) -> String {
        let author = self.author.trim();
        if author.is_empty() {
            format!("\"{}\"", self.content)
        } else {
            format!("\"{}\" — {}", self.content, author)
        }
    }
}
