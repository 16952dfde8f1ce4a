//! Flat domain-list operations: extract, clean and split.
//!
//! These back the `domains` binary, which prepares domain lists for the
//! intelligence crawler. All canonicalization goes through
//! [`CanonicalDomain`], so a list cleaned here joins the same way the
//! unifier does.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use serde_json::Value;

use crate::domain::entities::{EnrichmentBatch, EnrichmentEnvelope};
use crate::utils::domain_normalizer::{CanonicalDomain, canonical_domain};

/// How [`split_domains`] distributes lines across parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SplitStrategy {
    /// Contiguous runs of `ceil(len / parts)` lines. Keeps sorted ranges together.
    #[default]
    Chunked,
    /// Line `i` goes to part `i % parts`.
    RoundRobin,
}

/// Outcome of [`clean_domains`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Valid, deduplicated, sorted domains.
    pub domains: Vec<CanonicalDomain>,
    /// Non-blank input lines.
    pub original: usize,
    /// Valid lines whose canonical form differs from the input.
    pub modified: usize,
    /// `(input, canonical)` for valid lines that carried a query string.
    pub query_stripped: Vec<(String, String)>,
    /// Input lines that failed normalization.
    pub invalid: Vec<String>,
    pub duplicates: usize,
}

impl CleanReport {
    /// Lines dropped overall, invalid and duplicate alike.
    pub fn reduction(&self) -> usize {
        self.original - self.domains.len()
    }
}

/// Outcome of [`extract_domains`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Valid, deduplicated, sorted domains.
    pub domains: Vec<CanonicalDomain>,
    /// Non-empty candidate values seen across all envelopes.
    pub candidates: usize,
    /// Candidates that failed normalization.
    pub rejected: usize,
}

/// Normalizes every non-blank line, dropping invalid ones and duplicates.
pub fn clean_domains<'a, I>(lines: I) -> CleanReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = CleanReport::default();
    let mut seen = BTreeSet::new();

    for line in lines.into_iter().map(str::trim).filter(|l| !l.is_empty()) {
        report.original += 1;

        let domain = match CanonicalDomain::parse(line) {
            Ok(domain) => domain,
            Err(reason) => {
                tracing::debug!(line, %reason, "Dropping invalid domain");
                report.invalid.push(line.to_string());
                continue;
            }
        };

        if domain.as_str() != line {
            report.modified += 1;
            if line.contains('?') {
                report
                    .query_stripped
                    .push((line.to_string(), domain.to_string()));
            }
        }

        if !seen.insert(domain) {
            report.duplicates += 1;
        }
    }

    report.domains = seen.into_iter().collect();
    report
}

/// Collects every join-relevant domain mentioned in enrichment batches.
///
/// Candidates per envelope: company domain, company website, contact domain,
/// and the domain part of the probable email and of each listed email.
pub fn extract_domains<'a, I>(batches: I) -> ExtractReport
where
    I: IntoIterator<Item = &'a EnrichmentBatch>,
{
    let mut report = ExtractReport::default();
    let mut seen = BTreeSet::new();

    for envelope in batches.into_iter().flat_map(|batch| &batch.datas) {
        for candidate in envelope_candidates(envelope) {
            report.candidates += 1;
            match canonical_domain(&candidate) {
                Some(domain) => {
                    seen.insert(domain);
                }
                None => report.rejected += 1,
            }
        }
    }

    report.domains = seen.into_iter().collect();
    report
}

fn envelope_candidates(envelope: &EnrichmentEnvelope) -> Vec<String> {
    let company = envelope.company();
    let contact = &envelope.contact;

    let direct = [&company.domain, &company.website, &contact.domain]
        .into_iter()
        .flatten()
        .cloned();

    let probable_email = contact.most_probable_email.as_deref().into_iter();
    let listed_emails = contact.emails.iter().filter_map(email_address);
    let email_domains = probable_email
        .chain(listed_emails)
        .filter_map(email_domain)
        .map(str::to_string);

    direct
        .chain(email_domains)
        .filter(|candidate| !candidate.trim().is_empty())
        .collect()
}

/// Provider email entries are either bare strings or `{ "email": ... }` objects.
fn email_address(entry: &Value) -> Option<&str> {
    match entry {
        Value::String(address) => Some(address),
        Value::Object(fields) => fields.get("email").and_then(Value::as_str),
        _ => None,
    }
}

fn email_domain(address: &str) -> Option<&str> {
    address
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim())
        .filter(|domain| !domain.is_empty())
}

/// Distributes `domains` into exactly `parts` lists, preserving input order
/// within each list. Parts beyond the available lines are empty.
pub fn split_domains<T: Clone>(
    domains: &[T],
    parts: NonZeroUsize,
    strategy: SplitStrategy,
) -> Vec<Vec<T>> {
    let parts = parts.get();
    let mut out: Vec<Vec<T>> = vec![Vec::new(); parts];

    match strategy {
        SplitStrategy::Chunked => {
            let chunk_size = domains.len().div_ceil(parts).max(1);
            for (slot, chunk) in out.iter_mut().zip(domains.chunks(chunk_size)) {
                slot.extend_from_slice(chunk);
            }
        }
        SplitStrategy::RoundRobin => {
            for (i, domain) in domains.iter().enumerate() {
                out[i % parts].push(domain.clone());
            }
        }
    }

    out
}
