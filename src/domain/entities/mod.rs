//! Data model for the three input sources and the unified output.
//!
//! # Entity Types
//!
//! - [`IdentityRecord`] - A guest from the directory export (join driver)
//! - [`EnrichmentEnvelope`] - Person/company detail keyed by username
//! - [`IntelligenceEnvelope`] - Company narrative keyed by canonical domain
//! - [`UnifiedRecord`] - One merged guest with completeness flags
//!
//! Input types only implement `Deserialize` and tolerate missing, `null` and
//! wrong-typed fields. Output types only implement `Serialize`.

pub mod enrichment;
pub mod identity;
pub mod intelligence;
pub mod unified;

pub use enrichment::{
    Company, Contact, EnrichmentBatch, EnrichmentEnvelope, EnrichmentTag, Headquarters, Position,
    Profile,
};
pub use identity::IdentityRecord;
pub use intelligence::{GtmIntelligence, IntelligenceBatch, IntelligenceEnvelope, STATUS_COMPLETED};
pub use unified::{
    CompanySection, CompletenessFlags, ContactSection, DirectorySection, HeadquartersSection,
    IntelligenceSection, PositionSection, ProfileSection, UnifiedRecord,
};
