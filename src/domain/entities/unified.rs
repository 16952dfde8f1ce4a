//! Unified guest record: the output of a unification run.
//!
//! Every section is always serialized. A section with no source data
//! serializes as an empty object, so consumers see a stable schema.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::utils::domain_normalizer::CanonicalDomain;

/// One merged guest. Built once by the merger and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnifiedRecord {
    pub username: String,
    pub directory: DirectorySection,
    pub profile: ProfileSection,
    pub contact: ContactSection,
    pub position: PositionSection,
    pub company: CompanySection,
    pub intelligence: IntelligenceSection,
    /// Domain used for the intelligence join, when one resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_domain: Option<CanonicalDomain>,
    pub data_completeness: CompletenessFlags,
}

/// Which sources contributed to a record. Always derived, never supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessFlags {
    pub has_profile_link: bool,
    pub has_enrichment: bool,
    pub has_intelligence: bool,
    pub has_email: bool,
    pub has_company: bool,
}

/// Fields copied from the directory export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectorySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub metadata: Map<String, Value>,
}

/// Professional-network profile: the guest's own link plus enrichment detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_account: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_emails: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_medias: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headquarters: Option<HeadquartersSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadquartersSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Company intelligence joined by domain.
///
/// `enriched` is always present; everything else only when a record joined.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntelligenceSection {
    pub enriched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context_tags: Vec<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub business_model: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub company_profile: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products_services: Vec<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub technology_profile: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub market_evidence: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub contact_information: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub company_intelligence: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub recognition_credibility: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intelligence_gaps: Vec<Value>,
}
