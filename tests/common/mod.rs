#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use guest_unifier::domain::entities::{EnrichmentBatch, IdentityRecord, IntelligenceBatch};
use guest_unifier::infrastructure::persistence::JsonSourceRepository;

pub fn identity_json(username: &str) -> Value {
    json!({
        "username": username,
        "url": format!("https://directory.example/{}", username),
        "name": format!("Guest {}", username),
        "metadata": {}
    })
}

pub fn identity(username: &str) -> IdentityRecord {
    serde_json::from_value(identity_json(username)).unwrap()
}

/// Enrichment envelope with a contact domain and probable email only.
pub fn enrichment_json(username: &str, contact_domain: &str) -> Value {
    json!({
        "custom": { "username": username },
        "contact": {
            "most_probable_email": format!("{}@{}", username, contact_domain.to_lowercase()),
            "most_probable_email_status": "VALID",
            "domain": contact_domain
        }
    })
}

/// Enrichment envelope with a full company block.
pub fn enrichment_with_company_json(
    username: &str,
    company_name: &str,
    company_domain: Option<&str>,
    website: Option<&str>,
) -> Value {
    json!({
        "custom": { "username": username },
        "contact": {
            "profile": {
                "firstname": "Test",
                "lastname": username,
                "position": {
                    "title": "Founder",
                    "company": {
                        "name": company_name,
                        "domain": company_domain,
                        "website": website
                    }
                }
            }
        }
    })
}

pub fn intelligence_json(url: &str, company_name: &str) -> Value {
    json!({
        "status": "completed",
        "url": url,
        "company_name": company_name,
        "analyzed_at": "2025-01-01T00:00:00Z",
        "gtm_intelligence": {
            "tldr": format!("{} builds things", company_name),
            "context_tags": ["b2b"],
            "business_model": { "type": "SaaS" }
        }
    })
}

pub fn failed_intelligence_json(url: &str) -> Value {
    json!({ "status": "failed", "url": url })
}

pub fn enrichment_batch(envelopes: Vec<Value>) -> EnrichmentBatch {
    serde_json::from_value(json!({ "datas": envelopes })).unwrap()
}

pub fn intelligence_batch(envelopes: Vec<Value>) -> IntelligenceBatch {
    serde_json::from_value(json!({ "results": envelopes })).unwrap()
}

/// A temporary data directory laid out the way the repository expects.
pub struct DataDir {
    root: TempDir,
}

impl DataDir {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("enrichment")).unwrap();
        fs::create_dir_all(root.path().join("intelligence")).unwrap();
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn identities_file(&self) -> PathBuf {
        self.path().join("guests.json")
    }

    pub fn enrichment_dir(&self) -> PathBuf {
        self.path().join("enrichment")
    }

    pub fn intelligence_dir(&self) -> PathBuf {
        self.path().join("intelligence")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    pub fn write_identities(&self, identities: Vec<Value>) {
        write_json(&self.identities_file(), &Value::Array(identities));
    }

    pub fn write_enrichment_batch(&self, number: usize, envelopes: Vec<Value>) {
        let path = self
            .enrichment_dir()
            .join(format!("batch_{}_results.json", number));
        write_json(&path, &json!({ "datas": envelopes }));
    }

    pub fn write_intelligence_batch(&self, name: &str, envelopes: Vec<Value>) {
        let path = self.intelligence_dir().join(name);
        write_json(&path, &json!({ "results": envelopes }));
    }

    pub fn write_raw(&self, relative: &str, contents: &str) {
        fs::write(self.path().join(relative), contents).unwrap();
    }

    pub fn repository(&self) -> JsonSourceRepository {
        JsonSourceRepository::new(
            self.identities_file(),
            self.enrichment_dir(),
            self.intelligence_dir(),
        )
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}
