//! In-memory book collection keyed by generated ids with unique titles.
//! This crate is the single source of truth for collection invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::book::{Book, BookId, BookInfo};
pub use repo::book_repo::{BookRepository, InMemoryBookRepository, RepoError, RepoResult};
pub use service::library_service::LibraryCollection;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
