//! Repository trait definitions for the domain layer.
//!
//! Traits define how raw inputs are obtained; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`SourceRepository`] - Guest directory, enrichment and intelligence batches

pub mod source_repository;

pub use source_repository::SourceRepository;

#[cfg(test)]
pub use source_repository::MockSourceRepository;
