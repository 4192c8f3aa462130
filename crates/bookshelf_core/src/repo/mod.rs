//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract used by the collection service.
//! - Keep record layout details out of service orchestration.
//!
//! # Invariants
//! - Repository inserts enforce title uniqueness themselves; callers cannot
//!   bypass the check by going straight to storage.
//! - Lookups and removals of unknown ids are not errors.

pub mod book_repo;
