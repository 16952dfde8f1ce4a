//! Business logic services for the application layer.

pub mod unification_service;

pub use unification_service::UnificationService;
