//! Domain model for the book collection.
//!
//! # Responsibility
//! - Define the book record and its lookup projection.
//!
//! # Invariants
//! - Every book is identified by a generated `BookId` that is never reused.
//! - Removal is a hard delete; there are no tombstones.

pub mod book;
