//! Repository trait for loading the three raw input sources.

use crate::domain::entities::{EnrichmentBatch, IdentityRecord, IntelligenceBatch};
use crate::error::UnifyError;

/// Loads raw inputs for a unification run.
///
/// Implementations only read and parse; indexing and joining happen in the
/// domain layer. Batches are returned in the order that defines "later" for
/// last-write-wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonSourceRepository`] - JSON files on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SourceRepository: Send + Sync {
    /// Loads the guest directory.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::MissingInput`] if the collection does not exist.
    /// Returns [`UnifyError::Io`] or [`UnifyError::Json`] if it cannot be read.
    fn load_identities(&self) -> Result<Vec<IdentityRecord>, UnifyError>;

    /// Loads all enrichment batches, oldest first.
    ///
    /// An absent source yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::Io`] if the source exists but cannot be listed.
    fn load_enrichment_batches(&self) -> Result<Vec<EnrichmentBatch>, UnifyError>;

    /// Loads all intelligence batches, oldest first.
    ///
    /// An absent source yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::Io`] if the source exists but cannot be listed.
    fn load_intelligence_batches(&self) -> Result<Vec<IntelligenceBatch>, UnifyError>;
}
