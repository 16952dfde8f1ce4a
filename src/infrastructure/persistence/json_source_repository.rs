//! Filesystem implementation of the source repository.
//!
//! # Layout
//!
//! - identities: one JSON file holding an array of guests
//! - enrichment: a directory of `batch_*_results.json` files, each `{ "datas": [...] }`
//! - intelligence: a directory of `*.json` files, each `{ "results": [...] }`
//!
//! Batch files are read in lexicographic file-name order, which is the order
//! that decides last-write-wins in the indices.

use serde::de::DeserializeOwned;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::{EnrichmentBatch, IdentityRecord, IntelligenceBatch};
use crate::domain::repositories::SourceRepository;
use crate::error::UnifyError;

/// Reads the three sources from JSON files on disk.
#[derive(Debug, Clone)]
pub struct JsonSourceRepository {
    identities_file: PathBuf,
    enrichment_dir: PathBuf,
    intelligence_dir: PathBuf,
}

impl JsonSourceRepository {
    pub fn new(
        identities_file: impl Into<PathBuf>,
        enrichment_dir: impl Into<PathBuf>,
        intelligence_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            identities_file: identities_file.into(),
            enrichment_dir: enrichment_dir.into(),
            intelligence_dir: intelligence_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.identities_file,
            &config.enrichment_dir,
            &config.intelligence_dir,
        )
    }
}

impl SourceRepository for JsonSourceRepository {
    fn load_identities(&self) -> Result<Vec<IdentityRecord>, UnifyError> {
        if !self.identities_file.is_file() {
            return Err(UnifyError::missing_input(
                "identities",
                format!("file not found: {}", self.identities_file.display()),
            ));
        }

        read_json(&self.identities_file)
    }

    fn load_enrichment_batches(&self) -> Result<Vec<EnrichmentBatch>, UnifyError> {
        read_enrichment_dir(&self.enrichment_dir)
    }

    fn load_intelligence_batches(&self) -> Result<Vec<IntelligenceBatch>, UnifyError> {
        let batches: Vec<IntelligenceBatch> =
            read_batches(&self.intelligence_dir, is_intelligence_file)?;

        for batch in &batches {
            let completed = batch.results.iter().filter(|r| r.is_completed()).count();
            tracing::debug!(
                companies = batch.results.len(),
                completed,
                "Intelligence batch loaded"
            );
        }

        Ok(batches)
    }
}

/// Reads every enrichment batch in `dir`, oldest first.
///
/// Shared with the domain-list tooling, which extracts domains from the same
/// batches.
///
/// # Errors
///
/// Returns [`UnifyError::Io`] if `dir` exists but cannot be listed.
pub fn read_enrichment_dir(dir: &Path) -> Result<Vec<EnrichmentBatch>, UnifyError> {
    read_batches(dir, is_enrichment_file)
}

fn is_enrichment_file(name: &str) -> bool {
    name.starts_with("batch_") && name.ends_with("_results.json")
}

fn is_intelligence_file(name: &str) -> bool {
    name.ends_with(".json")
}

/// Lists matching files in `dir`, sorted by name, and parses each one.
///
/// A missing directory or an unparseable file is logged and skipped.
fn read_batches<T: DeserializeOwned>(
    dir: &Path,
    matches: fn(&str) -> bool,
) -> Result<Vec<T>, UnifyError> {
    if !dir.is_dir() {
        tracing::warn!("Batch directory not found: {}", dir.display());
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| UnifyError::io(dir, e))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(matches)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        tracing::warn!("No batch files found in {}", dir.display());
    }

    let mut batches = Vec::with_capacity(files.len());
    for file in files {
        match read_json(&file) {
            Ok(batch) => {
                tracing::info!("Loaded batch {}", file.display());
                batches.push(batch);
            }
            Err(e) => tracing::warn!("Skipping batch: {}", e),
        }
    }

    Ok(batches)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, UnifyError> {
    let file = fs::File::open(path).map_err(|e| UnifyError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| UnifyError::json(path, e))
}
