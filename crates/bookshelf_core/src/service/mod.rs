//! Core use-case services.
//!
//! # Responsibility
//! - Expose the collection operations on top of a repository.
//! - Keep callers decoupled from storage details.

pub mod library_service;
