//! JSON file output for a unification run.

use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::engine::Unification;
use crate::domain::entities::UnifiedRecord;
use crate::error::UnifyError;

pub const ALL_RECORDS_FILE: &str = "unified_guests_all.json";
pub const INTELLIGENCE_RECORDS_FILE: &str = "unified_guests_intelligence.json";
pub const REPORT_FILE: &str = "unification_report.json";

/// Paths of the files written for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutputs {
    pub all_records: PathBuf,
    pub intelligence_records: PathBuf,
    pub report: PathBuf,
    pub all_count: usize,
    pub intelligence_count: usize,
}

/// Writes the full record set, the intelligence subset and the report.
#[derive(Debug, Clone)]
pub struct JsonOutputWriter {
    output_dir: PathBuf,
}

impl JsonOutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes all three outputs, creating the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`UnifyError::Output`] if a file cannot be created or written.
    pub fn write(&self, unification: &Unification) -> Result<WrittenOutputs, UnifyError> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| UnifyError::output(&self.output_dir, e))?;

        let all_records = self.output_dir.join(ALL_RECORDS_FILE);
        write_pretty(&all_records, &unification.records)?;
        tracing::info!(
            "Saved all {} profiles: {}",
            unification.records.len(),
            all_records.display()
        );

        let joined: Vec<&UnifiedRecord> = unification.with_intelligence().collect();
        let intelligence_records = self.output_dir.join(INTELLIGENCE_RECORDS_FILE);
        write_pretty(&intelligence_records, &joined)?;
        tracing::info!(
            "Saved {} profiles with intelligence: {}",
            joined.len(),
            intelligence_records.display()
        );

        let report = self.output_dir.join(REPORT_FILE);
        write_pretty(&report, &unification.report)?;
        tracing::info!("Saved statistics report: {}", report.display());

        Ok(WrittenOutputs {
            all_records,
            intelligence_records,
            report,
            all_count: unification.records.len(),
            intelligence_count: joined.len(),
        })
    }
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), UnifyError> {
    let file = fs::File::create(path).map_err(|e| UnifyError::output(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| UnifyError::output(path, e.into()))?;
    writer.flush().map_err(|e| UnifyError::output(path, e))
}
