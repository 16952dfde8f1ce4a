//! Enrichment entities: person and company detail keyed by username.
//!
//! Mirrors the enrichment provider's batch export. Nested sections default to
//! empty and every leaf is optional, so a record with holes still joins.

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};

/// One enrichment batch file: `{ "datas": [envelope, ...] }`.
///
/// An element that is not an envelope at all becomes an empty envelope and is
/// later skipped for lacking a username.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnrichmentBatch {
    #[serde_as(as = "Vec<DefaultOnError>")]
    pub datas: Vec<EnrichmentEnvelope>,
}

/// A single enrichment result tagged with the username it was requested for.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnrichmentEnvelope {
    #[serde_as(as = "DefaultOnError")]
    pub custom: EnrichmentTag,
    #[serde_as(as = "DefaultOnError")]
    pub contact: Contact,
}

impl EnrichmentEnvelope {
    /// Returns the tagged username when present and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.custom
            .username
            .as_deref()
            .filter(|username| !username.is_empty())
    }

    pub fn company(&self) -> &Company {
        &self.contact.profile.position.company
    }
}

/// Caller-supplied tags echoed back by the provider.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnrichmentTag {
    #[serde_as(as = "DefaultOnError")]
    pub username: Option<String>,
}

/// Contact payload: reachability plus the nested profile.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde_as(as = "DefaultOnError")]
    pub most_probable_email: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub most_probable_email_status: Option<String>,
    /// Usually the domain of the most probable email.
    #[serde_as(as = "DefaultOnError")]
    pub domain: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub emails: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub phones: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub social_medias: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub profile: Profile,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub linkedin_id: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub linkedin_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub linkedin_handle: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub firstname: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub lastname: Option<String>,
    /// Free text or a structured object depending on the provider version.
    pub location: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub headline: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub summary: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub premium_account: Option<bool>,
    #[serde_as(as = "DefaultOnError")]
    pub position: Position,
}

/// Current position. Dates are passed through untouched.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde_as(as = "DefaultOnError")]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub description: Option<String>,
    pub start_at: Option<Value>,
    pub end_at: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub company: Company,
}

/// Employer descriptor. `domain` and `website` feed domain resolution.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub domain: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub website: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub linkedin_url: Option<String>,
    pub linkedin_id: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub industry: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub description: Option<String>,
    pub headcount: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub headcount_range: Option<String>,
    pub year_founded: Option<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub headquarters: Headquarters,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Headquarters {
    #[serde_as(as = "DefaultOnError")]
    pub city: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub region: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub country: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub country_code: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub address_line_1: Option<String>,
}
