//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and owns all
//! filesystem access.
//!
//! # Modules
//!
//! - [`persistence`] - Source repository implementations
//! - [`output`] - Result writers

pub mod output;
pub mod persistence;
