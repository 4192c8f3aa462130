//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record stored by the collection.
//! - Provide the `{title, author}` projection returned by id lookup.
//!
//! # Invariants
//! - `id` is generated once and never reassigned to another book.
//! - `title` and `author` are stored verbatim; no trimming or case folding.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for one book.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// Canonical book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Generated when the record is created.
    pub id: BookId,
    /// Unique across live records (exact match).
    pub title: String,
    /// Free-form; several books may share an author.
    pub author: String,
}

/// Lookup projection of a book without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub author: String,
}

impl Book {
    /// Creates a new book with a freshly generated random id.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, author)
    }

    /// Creates a book with a caller-provided id.
    ///
    /// Used by tests and embedders that already own an identity. The
    /// repository still rejects an id that is already live.
    pub fn with_id(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Returns the `{title, author}` projection of this book.
    pub fn info(&self) -> BookInfo {
        BookInfo {
            title: self.title.clone(),
            author: self.author.clone(),
        }
    }

    /// Returns whether this book holds exactly `title`.
    pub fn has_title(&self, title: &str) -> bool {
        self.title == title
    }
}

impl From<Book> for BookInfo {
    fn from(value: Book) -> Self {
        Self {
            title: value.title,
            author: value.author,
        }
    }
}
