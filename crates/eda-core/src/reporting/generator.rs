use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EdaError, Result, ResultExt};
use crate::types::{ColumnKind, EdaReport};

// ============================================================================
// Analysis Report Types
// ============================================================================

/// An [`EdaReport`] together with the metadata of the run that produced it.
///
/// Used both for JSON output on stdout (`--json`) and for the report file
/// (`--emit-report`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// RFC 3339 timestamp of report creation, local time
    pub generated_at: String,
    /// Path of the analyzed file, if the table came from one
    pub input_file: Option<String>,
    /// Profiling time in milliseconds
    pub duration_ms: u64,
    /// Column counts by kind
    pub overview: ReportOverview,
    /// The profiling artifacts
    pub report: EdaReport,
}

/// Headline numbers for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOverview {
    pub numeric_columns: usize,
    pub categorical_columns: usize,
    pub missing_percentage: f64,
}

impl ReportOverview {
    fn from_report(report: &EdaReport) -> Self {
        let numeric_columns = report
            .summary
            .iter()
            .filter(|record| record.kind == ColumnKind::Numeric)
            .count();

        Self {
            numeric_columns,
            categorical_columns: report.summary.len() - numeric_columns,
            missing_percentage: report.missing.missing_percentage,
        }
    }
}

// ============================================================================
// Report Generator
// ============================================================================

/// Builds [`AnalysisReport`]s and writes them to an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
        }
    }
}

impl ReportGenerator {
    /// Create a generator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Wrap `report` with the run metadata.
    pub fn build_report(
        input_file: Option<&Path>,
        duration: Duration,
        report: EdaReport,
    ) -> AnalysisReport {
        AnalysisReport {
            generated_at: Local::now().to_rfc3339(),
            input_file: input_file.map(|path| path.display().to_string()),
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            overview: ReportOverview::from_report(&report),
            report,
        }
    }

    /// Serialize `report` as pretty JSON.
    pub fn to_json(report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Write `report` to `<output_dir>/<report_base_name>_report.json`.
    pub fn write_report_to_file(
        &self,
        report: &AnalysisReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        if report_base_name.trim().is_empty() {
            return Err(EdaError::ReportGenerationFailed(
                "report name must not be empty".to_string(),
            ));
        }

        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create output directory '{}'",
            self.output_dir.display()
        ))?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let json = Self::to_json(report)?;
        debug!("Report is {} bytes", json.len());

        let mut file = File::create(&report_path)
            .context(format!("Failed to create '{}'", report_path.display()))?;
        file.write_all(json.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
