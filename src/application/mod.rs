//! Application layer services.
//!
//! This layer orchestrates domain operations: it pulls raw inputs through
//! repository traits, hands them to the pure domain layer, and decides which
//! failures stop a run.
//!
//! # Available Services
//!
//! - [`services::unification_service::UnificationService`] - Load, index, join and report

pub mod services;
