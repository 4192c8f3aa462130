//! Library collection service.
//!
//! # Responsibility
//! - Provide the add/remove/lookup/enumerate/count entry points.
//! - Emit metadata-only diagnostic events for mutations.
//!
//! # Invariants
//! - Add either fully succeeds or leaves the collection untouched.
//! - Remove and lookup never fail for unknown ids.
//! - Titles and authors are user content and never reach the log.

use crate::model::book::{Book, BookId, BookInfo};
use crate::repo::book_repo::{BookRepository, InMemoryBookRepository, RepoError, RepoResult};
use log::{debug, info, warn};

/// Ordered collection of books with unique titles.
///
/// Mutations take `&mut self`; share across threads only behind an external
/// lock such as `Mutex<LibraryCollection>`.
#[derive(Debug, Clone)]
pub struct LibraryCollection<R: BookRepository = InMemoryBookRepository> {
    repo: R,
}

impl LibraryCollection<InMemoryBookRepository> {
    /// Creates an empty in-memory collection.
    pub fn new() -> Self {
        Self::with_repository(InMemoryBookRepository::new())
    }
}

impl Default for LibraryCollection<InMemoryBookRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BookRepository> LibraryCollection<R> {
    /// Creates a collection over the provided repository implementation.
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a book and returns its generated id.
    ///
    /// # Contract
    /// - No length or character-set checks on `title` or `author`.
    /// - Title comparison is exact; `"Dune"` and `"dune"` are distinct.
    ///
    /// # Errors
    /// - `RepoError::DuplicateTitle` when a live book has the same title.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> RepoResult<BookId> {
        let book = Book::new(title, author);
        let id = book.id;
        match self.repo.insert_book(book) {
            Ok(id) => {
                info!(
                    "event=book_add module=library status=ok book_id={} count={}",
                    id,
                    self.repo.count_books()
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=book_add module=library status=rejected reason={} book_id={}",
                    rejection_reason(&err),
                    id
                );
                Err(err)
            }
        }
    }

    /// Removes a book by id. Unknown ids are a silent no-op.
    pub fn remove_book(&mut self, id: BookId) {
        let removed = self.repo.remove_book(id);
        debug!(
            "event=book_remove module=library status=ok book_id={} removed={} count={}",
            id,
            removed,
            self.repo.count_books()
        );
    }

    /// Returns `{title, author}` for a live book, or `None`.
    pub fn get_book_info(&self, id: BookId) -> Option<BookInfo> {
        self.repo.get_book(id).map(Book::info)
    }

    /// Returns a snapshot of all live books in insertion order.
    pub fn get_all_books(&self) -> Vec<Book> {
        self.repo.list_books()
    }

    pub fn get_books_count(&self) -> usize {
        self.repo.count_books()
    }

    pub fn is_empty(&self) -> bool {
        self.get_books_count() == 0
    }
}

fn rejection_reason(err: &RepoError) -> &'static str {
    match err {
        RepoError::DuplicateTitle(_) => "duplicate_title",
        RepoError::DuplicateId(_) => "duplicate_id",
    }
}
