//! Picks the single domain used to join a guest with company intelligence.

use serde::Serialize;

use crate::domain::entities::EnrichmentEnvelope;
use crate::utils::domain_normalizer::{CanonicalDomain, canonical_domain};

/// Field a resolved domain came from, in trust order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSource {
    CompanyDomain,
    CompanyWebsite,
    ContactDomain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDomain {
    pub domain: CanonicalDomain,
    pub source: DomainSource,
}

/// Resolves the join domain for an enrichment record.
///
/// Candidates are tried in fixed order and the first one that normalizes
/// wins:
///
/// 1. company `domain`
/// 2. company `website`
/// 3. contact `domain` (usually the email domain)
///
/// Structured company data outranks the derived email domain; the order must
/// not change.
pub fn resolve_domain(enrichment: Option<&EnrichmentEnvelope>) -> Option<ResolvedDomain> {
    let enrichment = enrichment?;
    let company = enrichment.company();

    [
        (company.domain.as_deref(), DomainSource::CompanyDomain),
        (company.website.as_deref(), DomainSource::CompanyWebsite),
        (enrichment.contact.domain.as_deref(), DomainSource::ContactDomain),
    ]
    .into_iter()
    .find_map(|(candidate, source)| {
        candidate
            .and_then(canonical_domain)
            .map(|domain| ResolvedDomain { domain, source })
    })
}
