//! Identity entity: one guest from the directory export.

use serde::Deserialize;
use serde_json::{Map, Value};
use serde_with::{DefaultOnError, serde_as};

/// A guest from the directory export.
///
/// `username` is the primary key that drives the whole join. Every other field
/// is optional; a wrong-typed value is read as absent.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IdentityRecord {
    #[serde_as(as = "DefaultOnError")]
    pub username: String,
    /// Directory profile page.
    #[serde_as(as = "DefaultOnError")]
    pub url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub avatar: Option<String>,
    /// Professional-network profile link supplied by the guest.
    #[serde(rename = "linkedIn", alias = "profile_link")]
    #[serde_as(as = "DefaultOnError")]
    pub profile_link: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    pub metadata: Map<String, Value>,
}

impl IdentityRecord {
    /// Creates an identity with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }
}
