//! Unification run orchestration.

use std::sync::Arc;

use crate::domain::engine::{Unification, UnificationEngine};
use crate::domain::index::SourceIndex;
use crate::domain::repositories::SourceRepository;
use crate::error::UnifyError;

/// Service that loads the sources, builds the indices and runs the engine.
///
/// Only the guest directory is mandatory. Enrichment or intelligence that
/// cannot be loaded is logged and treated as empty, so the run still yields
/// one record per guest.
pub struct UnificationService<R: SourceRepository> {
    repository: Arc<R>,
    progress_interval: usize,
}

impl<R: SourceRepository> UnificationService<R> {
    /// Creates a new unification service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            progress_interval: 50,
        }
    }

    /// Sets how often (in guests) the engine logs progress.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Runs one full unification.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::MissingInput`] if the guest directory is absent
    /// or empty, and any read error from loading it. No partial output is
    /// produced in that case.
    pub fn run(&self) -> Result<Unification, UnifyError> {
        let identities = self.repository.load_identities()?;
        if identities.is_empty() {
            return Err(UnifyError::missing_input(
                "identities",
                "guest directory contains no records",
            ));
        }
        tracing::info!(count = identities.len(), "Loaded guest profiles");

        let enrichment = self
            .repository
            .load_enrichment_batches()
            .unwrap_or_else(|e| {
                tracing::warn!("Enrichment unavailable, continuing without it: {}", e);
                Vec::new()
            });
        let intelligence = self
            .repository
            .load_intelligence_batches()
            .unwrap_or_else(|e| {
                tracing::warn!("Intelligence unavailable, continuing without it: {}", e);
                Vec::new()
            });

        let index = SourceIndex::build(enrichment, intelligence);
        let unification = UnificationEngine::new(&index)
            .with_progress_interval(self.progress_interval)
            .run(&identities);

        Ok(unification)
    }
}
