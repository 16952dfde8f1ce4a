//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before any input is read.
//!
//! ## Example
//!
//! ```bash
//! export UNIFY_IDENTITIES_FILE="data/guest_profiles_enriched.json"
//! export UNIFY_ENRICHMENT_DIR="data/enrichment"
//! export UNIFY_INTELLIGENCE_DIR="data/intelligence"
//! export UNIFY_OUTPUT_DIR="data"
//! ```
//!
//! ## Optional Variables
//!
//! - `UNIFY_IDENTITIES_FILE` - Guest directory JSON (default: `data/guest_profiles_enriched.json`)
//! - `UNIFY_ENRICHMENT_DIR` - Enrichment batch directory (default: `data/enrichment`)
//! - `UNIFY_INTELLIGENCE_DIR` - Intelligence batch directory (default: `data/intelligence`)
//! - `UNIFY_OUTPUT_DIR` - Where outputs are written (default: `data`)
//! - `UNMATCHED_SAMPLE_LIMIT` - Unmatched domains shown in the console report (default: 10, max: 1000)
//! - `PROGRESS_INTERVAL` - Log progress every N guests (default: 50, min: 1)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Run configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub identities_file: PathBuf,
    pub enrichment_dir: PathBuf,
    pub intelligence_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// How many unmatched domains the console report lists.
    /// The JSON report always contains all of them.
    pub unmatched_sample_limit: usize,
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identities_file: PathBuf::from("data/guest_profiles_enriched.json"),
            enrichment_dir: PathBuf::from("data/enrichment"),
            intelligence_dir: PathBuf::from("data/intelligence"),
            output_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            unmatched_sample_limit: 10,
            progress_interval: 50,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` so required variables can be
    /// added without changing callers.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let identities_file = env_path("UNIFY_IDENTITIES_FILE").unwrap_or(defaults.identities_file);
        let enrichment_dir = env_path("UNIFY_ENRICHMENT_DIR").unwrap_or(defaults.enrichment_dir);
        let intelligence_dir =
            env_path("UNIFY_INTELLIGENCE_DIR").unwrap_or(defaults.intelligence_dir);
        let output_dir = env_path("UNIFY_OUTPUT_DIR").unwrap_or(defaults.output_dir);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let unmatched_sample_limit = env::var("UNMATCHED_SAMPLE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.unmatched_sample_limit);

        let progress_interval = env::var("PROGRESS_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.progress_interval);

        Ok(Self {
            identities_file,
            enrichment_dir,
            intelligence_dir,
            output_dir,
            log_level,
            log_format,
            unmatched_sample_limit,
            progress_interval,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any input or output path is empty
    /// - `log_format` is not `text` or `json`
    /// - `unmatched_sample_limit` is above 1000
    /// - `progress_interval` is 0
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("UNIFY_IDENTITIES_FILE", &self.identities_file),
            ("UNIFY_ENRICHMENT_DIR", &self.enrichment_dir),
            ("UNIFY_INTELLIGENCE_DIR", &self.intelligence_dir),
            ("UNIFY_OUTPUT_DIR", &self.output_dir),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.unmatched_sample_limit > 1000 {
            anyhow::bail!(
                "UNMATCHED_SAMPLE_LIMIT is too large (max: 1000), got {}",
                self.unmatched_sample_limit
            );
        }

        if self.progress_interval == 0 {
            anyhow::bail!("PROGRESS_INTERVAL must be at least 1");
        }

        Ok(())
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Guest profiles: {}", self.identities_file.display());
        tracing::info!("  Enrichment data: {}", self.enrichment_dir.display());
        tracing::info!("  Intelligence data: {}", self.intelligence_dir.display());
        tracing::info!("  Output directory: {}", self.output_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
