//! Book repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insert/remove/get/list/count over live book records.
//! - Preserve insertion order for enumeration.
//!
//! # Invariants
//! - At most one live record per exact title.
//! - At most one live record per id.
//! - `count_books()` always equals `list_books().len()`.

use crate::model::book::{Book, BookId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A live record already holds this exact title.
    DuplicateTitle(String),
    /// A live record already holds this id.
    DuplicateId(BookId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateTitle(title) => write!(f, "book title already exists: `{title}`"),
            Self::DuplicateId(id) => write!(f, "book id already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for book storage.
pub trait BookRepository {
    /// Appends `book` after all live records and returns its id.
    ///
    /// # Errors
    /// - `DuplicateTitle` when a live record has exactly the same title.
    /// - `DuplicateId` when a live record already uses `book.id`.
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId>;
    /// Removes the live record with `id`. Returns `false` when none existed.
    fn remove_book(&mut self, id: BookId) -> bool;
    fn get_book(&self, id: BookId) -> Option<&Book>;
    fn find_by_title(&self, title: &str) -> Option<&Book>;
    /// Returns an owned snapshot of live records in insertion order.
    fn list_books(&self) -> Vec<Book>;
    fn count_books(&self) -> usize;
}

/// Vec-backed repository; every scan is linear in the live record count.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn insert_book(&mut self, book: Book) -> RepoResult<BookId> {
        if self.find_by_title(book.title.as_str()).is_some() {
            return Err(RepoError::DuplicateTitle(book.title));
        }
        if self.get_book(book.id).is_some() {
            return Err(RepoError::DuplicateId(book.id));
        }

        let id = book.id;
        self.books.push(book);
        Ok(id)
    }

    fn remove_book(&mut self, id: BookId) -> bool {
        match self.books.iter().position(|book| book.id == id) {
            Some(index) => {
                // Vec::remove keeps the relative order of the remaining records.
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    fn get_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.has_title(title))
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn count_books(&self) -> usize {
        self.books.len()
    }
}
