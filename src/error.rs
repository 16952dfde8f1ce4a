//! Error types surfaced by the unification library.
//!
//! Only conditions that stop a run live here. Malformed fields, rejected
//! domains and unmatched domains are absorbed into the statistics instead.

use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum UnifyError {
    /// A required input collection is absent or empty. Fatal for the run.
    #[error("Missing input `{input}`: {reason}")]
    MissingInput { input: &'static str, reason: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl UnifyError {
    pub fn missing_input(input: &'static str, reason: impl Into<String>) -> Self {
        Self::MissingInput {
            input,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn output(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Output {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true for errors that mean "there is nothing to unify".
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}
