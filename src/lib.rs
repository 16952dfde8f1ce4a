//! # Guest Unifier
//!
//! Joins a guest directory with person/company enrichment and per-company
//! intelligence into one unified record per guest, plus a coverage report.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, indices, domain resolution, merging and reporting
//! - **Application Layer** ([`application`]) - Run orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON sources on disk and result writers
//! - **Utilities** ([`utils`]) - Domain normalization and domain-list tooling
//!
//! ## Join Model
//!
//! - Guests drive the join; every guest yields exactly one record, in input order
//! - Enrichment joins on username
//! - Intelligence joins on the canonical company domain resolved from enrichment
//! - Missing or malformed data never fails a run; it shows up as `false` flags
//!
//! ## Quick Start
//!
//! ```bash
//! export UNIFY_IDENTITIES_FILE="data/guest_profiles_enriched.json"
//! export UNIFY_ENRICHMENT_DIR="data/enrichment"
//! export UNIFY_INTELLIGENCE_DIR="data/intelligence"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Run configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use error::UnifyError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UnificationService;
    pub use crate::domain::engine::{Unification, UnificationEngine};
    pub use crate::domain::entities::{
        CompletenessFlags, EnrichmentBatch, EnrichmentEnvelope, IdentityRecord, IntelligenceBatch,
        IntelligenceEnvelope, UnifiedRecord,
    };
    pub use crate::domain::index::SourceIndex;
    pub use crate::domain::report::UnificationReport;
    pub use crate::domain::repositories::SourceRepository;
    pub use crate::error::UnifyError;
    pub use crate::infrastructure::output::JsonOutputWriter;
    pub use crate::infrastructure::persistence::JsonSourceRepository;
    pub use crate::utils::domain_normalizer::{CanonicalDomain, normalize_domain};
}
