//! Run statistics, accumulated during the engine's single pass.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::CompletenessFlags;
use crate::domain::index::IndexSummary;
use crate::utils::domain_normalizer::CanonicalDomain;

/// Outcome of the domain join for one guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainOutcome {
    /// No enrichment, or no enrichment field normalized to a domain.
    NoDomain,
    Matched(CanonicalDomain),
    /// A domain resolved but no intelligence record carries it.
    Unmatched(CanonicalDomain),
}

/// A resolved domain with no intelligence counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedDomain {
    pub username: String,
    pub domain: CanonicalDomain,
}

/// Share of guests covered by each source, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub profile_link: f64,
    pub enrichment: f64,
    pub intelligence: f64,
    pub email: f64,
    pub company: f64,
}

/// Final statistics for one unification run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnificationReport {
    pub generated_at: DateTime<Utc>,
    pub total_guests: usize,
    pub with_profile_link: usize,
    pub with_enrichment: usize,
    pub with_intelligence: usize,
    pub with_email: usize,
    pub with_company: usize,
    pub with_resolved_domain: usize,
    pub domain_matches: usize,
    pub domain_mismatches: usize,
    pub coverage: CoverageSummary,
    pub unmatched_domains: Vec<UnmatchedDomain>,
    pub index: IndexSummary,
}

impl UnificationReport {
    /// Percentage of all guests that `count` represents. 0 when there are no guests.
    pub fn coverage_of(&self, count: usize) -> f64 {
        percentage(count, self.total_guests)
    }

    pub fn without_enrichment(&self) -> usize {
        self.total_guests - self.with_enrichment
    }

    /// First `limit` unmatched domains and how many were left out.
    pub fn unmatched_sample(&self, limit: usize) -> (&[UnmatchedDomain], usize) {
        let shown = limit.min(self.unmatched_domains.len());
        (
            &self.unmatched_domains[..shown],
            self.unmatched_domains.len() - shown,
        )
    }
}

/// Running counters fed once per guest by the engine.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    total_guests: usize,
    with_profile_link: usize,
    with_enrichment: usize,
    with_intelligence: usize,
    with_email: usize,
    with_company: usize,
    domain_matches: usize,
    domain_mismatches: usize,
    unmatched_domains: Vec<UnmatchedDomain>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one guest's flags and join outcome into the counters.
    pub fn record(&mut self, username: &str, flags: &CompletenessFlags, outcome: DomainOutcome) {
        self.total_guests += 1;
        self.with_profile_link += usize::from(flags.has_profile_link);
        self.with_enrichment += usize::from(flags.has_enrichment);
        self.with_intelligence += usize::from(flags.has_intelligence);
        self.with_email += usize::from(flags.has_email);
        self.with_company += usize::from(flags.has_company);

        match outcome {
            DomainOutcome::NoDomain => {}
            DomainOutcome::Matched(_) => self.domain_matches += 1,
            DomainOutcome::Unmatched(domain) => {
                self.domain_mismatches += 1;
                self.unmatched_domains.push(UnmatchedDomain {
                    username: username.to_string(),
                    domain,
                });
            }
        }
    }

    pub fn total_guests(&self) -> usize {
        self.total_guests
    }

    /// Computes percentages and produces the report.
    pub fn finish(self, index: IndexSummary) -> UnificationReport {
        let total = self.total_guests;
        let coverage = CoverageSummary {
            profile_link: percentage(self.with_profile_link, total),
            enrichment: percentage(self.with_enrichment, total),
            intelligence: percentage(self.with_intelligence, total),
            email: percentage(self.with_email, total),
            company: percentage(self.with_company, total),
        };

        UnificationReport {
            generated_at: Utc::now(),
            total_guests: total,
            with_profile_link: self.with_profile_link,
            with_enrichment: self.with_enrichment,
            with_intelligence: self.with_intelligence,
            with_email: self.with_email,
            with_company: self.with_company,
            with_resolved_domain: self.domain_matches + self.domain_mismatches,
            domain_matches: self.domain_matches,
            domain_mismatches: self.domain_mismatches,
            coverage,
            unmatched_domains: self.unmatched_domains,
            index,
        }
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(raw: &str) -> CanonicalDomain {
        CanonicalDomain::parse(raw).unwrap()
    }

    fn flags(enrichment: bool, intelligence: bool) -> CompletenessFlags {
        CompletenessFlags {
            has_enrichment: enrichment,
            has_intelligence: intelligence,
            ..CompletenessFlags::default()
        }
    }

    #[test]
    fn test_empty_run_has_zero_coverage() {
        let report = ReportBuilder::new().finish(IndexSummary::default());

        assert_eq!(report.total_guests, 0);
        assert_eq!(report.coverage, CoverageSummary::default());
        assert_eq!(report.coverage_of(0), 0.0);
    }

    #[test]
    fn test_counts_and_percentages() {
        let mut builder = ReportBuilder::new();
        builder.record("alice", &flags(true, true), DomainOutcome::Matched(domain("a.com")));
        builder.record("bob", &flags(true, false), DomainOutcome::Unmatched(domain("b.com")));
        builder.record("carol", &flags(true, false), DomainOutcome::NoDomain);
        builder.record("dave", &flags(false, false), DomainOutcome::NoDomain);

        let report = builder.finish(IndexSummary::default());

        assert_eq!(report.total_guests, 4);
        assert_eq!(report.with_enrichment, 3);
        assert_eq!(report.without_enrichment(), 1);
        assert_eq!(report.with_intelligence, 1);
        assert_eq!(report.domain_matches, 1);
        assert_eq!(report.domain_mismatches, 1);
        assert_eq!(report.with_resolved_domain, 2);
        assert_eq!(report.coverage.enrichment, 75.0);
        assert_eq!(report.coverage.intelligence, 25.0);
        assert_eq!(
            report.unmatched_domains,
            vec![UnmatchedDomain {
                username: "bob".to_string(),
                domain: domain("b.com"),
            }]
        );
    }

    #[test]
    fn test_unmatched_sample_is_bounded() {
        let mut builder = ReportBuilder::new();
        for i in 0..15 {
            builder.record(
                &format!("guest{i}"),
                &flags(true, false),
                DomainOutcome::Unmatched(domain(&format!("site{i}.com"))),
            );
        }
        let report = builder.finish(IndexSummary::default());

        let (shown, remaining) = report.unmatched_sample(10);
        assert_eq!(shown.len(), 10);
        assert_eq!(remaining, 5);
        assert_eq!(shown[0].username, "guest0");

        let (shown, remaining) = report.unmatched_sample(100);
        assert_eq!(shown.len(), 15);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_report_serializes_counters() {
        let mut builder = ReportBuilder::new();
        builder.record("alice", &flags(true, false), DomainOutcome::Unmatched(domain("a.com")));
        let value = serde_json::to_value(builder.finish(IndexSummary::default())).unwrap();

        assert_eq!(value["total_guests"], 1);
        assert_eq!(value["domain_mismatches"], 1);
        assert_eq!(value["unmatched_domains"][0]["domain"], "a.com");
        assert_eq!(value["index"]["intelligence_not_completed"], 0);
        assert!(value["generated_at"].is_string());
    }
}
