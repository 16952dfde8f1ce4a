//! Lookup indices over the two secondary sources.
//!
//! # Duplicate Keys
//!
//! Both indices follow **last write wins**: batches are applied in the order
//! given, and a later envelope replaces an earlier one with the same key. The
//! number of replaced keys is reported in [`IndexSummary`].

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::entities::{
    EnrichmentBatch, EnrichmentEnvelope, IntelligenceBatch, IntelligenceEnvelope,
};
use crate::utils::domain_normalizer::{CanonicalDomain, canonical_domain};

/// Counters describing what index construction kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    /// Distinct usernames in the enrichment index.
    pub enrichment_indexed: usize,
    pub enrichment_without_username: usize,
    /// Usernames replaced by a later envelope.
    pub enrichment_overwritten: usize,
    pub intelligence_seen: usize,
    /// Distinct domains in the intelligence index.
    pub intelligence_indexed: usize,
    pub intelligence_not_completed: usize,
    pub intelligence_invalid_url: usize,
    /// Domains replaced by a later envelope.
    pub intelligence_overwritten: usize,
}

/// Enrichment by username and intelligence by canonical domain.
#[derive(Debug, Clone, Default)]
pub struct SourceIndex {
    enrichment_by_username: HashMap<String, EnrichmentEnvelope>,
    intelligence_by_domain: HashMap<CanonicalDomain, IntelligenceEnvelope>,
    summary: IndexSummary,
}

impl SourceIndex {
    /// Builds both indices from already-loaded batches.
    pub fn build(
        enrichment: impl IntoIterator<Item = EnrichmentBatch>,
        intelligence: impl IntoIterator<Item = IntelligenceBatch>,
    ) -> Self {
        let mut summary = IndexSummary::default();
        let enrichment_by_username = index_enrichment(enrichment, &mut summary);
        let intelligence_by_domain = index_intelligence(intelligence, &mut summary);

        tracing::info!(
            enrichment = summary.enrichment_indexed,
            intelligence = summary.intelligence_indexed,
            intelligence_skipped = summary.intelligence_not_completed + summary.intelligence_invalid_url,
            "Source indices built"
        );

        Self {
            enrichment_by_username,
            intelligence_by_domain,
            summary,
        }
    }

    pub fn enrichment_for(&self, username: &str) -> Option<&EnrichmentEnvelope> {
        self.enrichment_by_username.get(username)
    }

    pub fn intelligence_for(&self, domain: &CanonicalDomain) -> Option<&IntelligenceEnvelope> {
        self.intelligence_by_domain.get(domain)
    }

    pub fn summary(&self) -> IndexSummary {
        self.summary
    }
}

fn index_enrichment(
    batches: impl IntoIterator<Item = EnrichmentBatch>,
    summary: &mut IndexSummary,
) -> HashMap<String, EnrichmentEnvelope> {
    let mut by_username = HashMap::new();

    for envelope in batches.into_iter().flat_map(|batch| batch.datas) {
        let Some(username) = envelope.username().map(str::to_owned) else {
            summary.enrichment_without_username += 1;
            continue;
        };

        if by_username.insert(username.clone(), envelope).is_some() {
            tracing::debug!(%username, "Enrichment replaced by later batch");
            summary.enrichment_overwritten += 1;
        }
    }

    summary.enrichment_indexed = by_username.len();
    by_username
}

fn index_intelligence(
    batches: impl IntoIterator<Item = IntelligenceBatch>,
    summary: &mut IndexSummary,
) -> HashMap<CanonicalDomain, IntelligenceEnvelope> {
    let mut by_domain = HashMap::new();

    for envelope in batches.into_iter().flat_map(|batch| batch.results) {
        summary.intelligence_seen += 1;

        if !envelope.is_completed() {
            summary.intelligence_not_completed += 1;
            continue;
        }

        let Some(domain) = envelope.url.as_deref().and_then(canonical_domain) else {
            tracing::debug!(url = ?envelope.url, "Intelligence skipped: URL is not a domain");
            summary.intelligence_invalid_url += 1;
            continue;
        };

        if by_domain.insert(domain.clone(), envelope).is_some() {
            tracing::warn!(%domain, "Intelligence replaced by later batch");
            summary.intelligence_overwritten += 1;
        }
    }

    summary.intelligence_indexed = by_domain.len();
    by_domain
}
