//! The unification pass: one unified record per guest, in input order.

use crate::domain::entities::{IdentityRecord, UnifiedRecord};
use crate::domain::index::SourceIndex;
use crate::domain::merger::merge_record;
use crate::domain::report::{DomainOutcome, ReportBuilder, UnificationReport};
use crate::domain::resolver::resolve_domain;

const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Output of a unification run.
#[derive(Debug, Clone)]
pub struct Unification {
    /// One record per guest, in the order the guests were given.
    pub records: Vec<UnifiedRecord>,
    pub report: UnificationReport,
}

impl Unification {
    /// Records that joined company intelligence, order preserved.
    pub fn with_intelligence(&self) -> impl Iterator<Item = &UnifiedRecord> {
        self.records
            .iter()
            .filter(|record| record.data_completeness.has_intelligence)
    }
}

/// Joins guests against a [`SourceIndex`].
///
/// # Flow
///
/// For each guest:
///
/// 1. Look up enrichment by username
/// 2. Resolve the join domain from that enrichment
/// 3. Look up intelligence by domain; a resolved but unknown domain is
///    recorded as a mismatch
/// 4. Merge into a [`UnifiedRecord`]
/// 5. Fold flags and join outcome into the report
///
/// A single linear pass. Nothing in a guest's data can fail the run.
pub struct UnificationEngine<'a> {
    index: &'a SourceIndex,
    progress_interval: usize,
}

impl<'a> UnificationEngine<'a> {
    pub fn new(index: &'a SourceIndex) -> Self {
        Self {
            index,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Sets how often (in guests) progress is logged. Zero disables it.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn run(&self, identities: &[IdentityRecord]) -> Unification {
        let total = identities.len();
        let mut report = ReportBuilder::new();
        let mut records = Vec::with_capacity(total);

        for (position, identity) in identities.iter().enumerate() {
            let (record, outcome) = self.unify_one(identity);
            report.record(&record.username, &record.data_completeness, outcome);
            records.push(record);

            let processed = position + 1;
            if self.progress_interval > 0 && processed % self.progress_interval == 0 {
                tracing::info!("Processing: {processed}/{total} guests");
            }
        }

        tracing::info!(unified = records.len(), "Unification pass finished");

        Unification {
            records,
            report: report.finish(self.index.summary()),
        }
    }

    fn unify_one(&self, identity: &IdentityRecord) -> (UnifiedRecord, DomainOutcome) {
        let enrichment = self.index.enrichment_for(&identity.username);
        let resolved = resolve_domain(enrichment);

        let (intelligence, outcome) = match &resolved {
            None => (None, DomainOutcome::NoDomain),
            Some(resolved) => match self.index.intelligence_for(&resolved.domain) {
                Some(found) => (Some(found), DomainOutcome::Matched(resolved.domain.clone())),
                None => {
                    tracing::debug!(
                        username = %identity.username,
                        domain = %resolved.domain,
                        source = ?resolved.source,
                        "No intelligence for resolved domain"
                    );
                    (None, DomainOutcome::Unmatched(resolved.domain.clone()))
                }
            },
        };

        let record = UnifiedRecord {
            resolved_domain: resolved.map(|r| r.domain),
            ..merge_record(identity, enrichment, intelligence)
        };

        (record, outcome)
    }
}
