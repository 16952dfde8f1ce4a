//! Company-intelligence entities keyed by the company's canonical domain.

use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{DefaultOnError, serde_as};

/// Status value marking an analysis as usable.
pub const STATUS_COMPLETED: &str = "completed";

/// One intelligence batch file: `{ "results": [envelope, ...] }`.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IntelligenceBatch {
    #[serde_as(as = "Vec<DefaultOnError>")]
    pub results: Vec<IntelligenceEnvelope>,
}

/// A single company analysis. Only completed analyses are joined.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntelligenceEnvelope {
    #[serde_as(as = "DefaultOnError")]
    pub status: Option<String>,
    /// The URL that was analyzed; normalized to build the index key.
    #[serde_as(as = "DefaultOnError")]
    pub url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub company_name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub analyzed_at: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub gtm_intelligence: GtmIntelligence,
}

impl IntelligenceEnvelope {
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_COMPLETED)
    }
}

/// Go-to-market narrative. Sub-objects are opaque and passed through.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GtmIntelligence {
    #[serde_as(as = "DefaultOnError")]
    pub tldr: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub context_tags: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub business_model: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub company_profile: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub products_services: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    pub technology_profile: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub market_evidence: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub contact_information: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub company_intelligence: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub recognition_credibility: Map<String, Value>,
    #[serde_as(as = "DefaultOnError")]
    pub intelligence_gaps: Vec<Value>,
}
