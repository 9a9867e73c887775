//! Configuration types for the analysis engines.
//!
//! The defaults reproduce the fixed behavior of the engines: ten histogram
//! bins, the ten most frequent categories and two decimals in bin labels.
//! Use [`AnalysisConfig::builder()`] to deviate from them.

use serde::{Deserialize, Serialize};

/// Default number of histogram bins for numeric distributions.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Default number of categories kept in a categorical frequency table.
pub const DEFAULT_TOP_CATEGORIES: usize = 10;

/// Default number of decimals used in numeric bin labels.
pub const DEFAULT_LABEL_PRECISION: usize = 2;

/// Largest accepted label precision.
pub const MAX_LABEL_PRECISION: usize = 10;

/// Configuration for an analysis run.
///
/// # Example
///
/// ```rust
/// use eda_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .histogram_bins(20)
///     .top_categories(5)
///     .build()
///     .unwrap();
/// assert_eq!(config.histogram_bins, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of equal-width bins for numeric histograms.
    /// Default: 10
    pub histogram_bins: usize,

    /// Maximum number of entries in a categorical frequency table.
    /// Default: 10
    pub top_categories: usize,

    /// Decimals used when formatting numeric bin labels.
    /// Default: 2
    pub label_precision: usize,

    /// Number of rows shown by table previews.
    /// Default: 5
    pub preview_rows: usize,

    /// Number of column pairs listed as strongest correlations in reports.
    /// Default: 10
    pub strong_correlation_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            top_categories: DEFAULT_TOP_CATEGORIES,
            label_precision: DEFAULT_LABEL_PRECISION,
            preview_rows: 5,
            strong_correlation_limit: 10,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidHistogramBins(
                self.histogram_bins,
            ));
        }

        if self.top_categories == 0 {
            return Err(ConfigValidationError::InvalidTopCategories(
                self.top_categories,
            ));
        }

        if self.label_precision > MAX_LABEL_PRECISION {
            return Err(ConfigValidationError::InvalidLabelPrecision(
                self.label_precision,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid histogram bin count: {0} (must be at least 1)")]
    InvalidHistogramBins(usize),

    #[error("Invalid category limit: {0} (must be at least 1)")]
    InvalidTopCategories(usize),

    #[error("Invalid label precision: {0} (must be at most {MAX_LABEL_PRECISION})")]
    InvalidLabelPrecision(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    histogram_bins: Option<usize>,
    top_categories: Option<usize>,
    label_precision: Option<usize>,
    preview_rows: Option<usize>,
    strong_correlation_limit: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the number of histogram bins for numeric columns.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set how many categories a frequency table keeps.
    pub fn top_categories(mut self, limit: usize) -> Self {
        self.top_categories = Some(limit);
        self
    }

    /// Set the number of decimals in numeric bin labels.
    pub fn label_precision(mut self, decimals: usize) -> Self {
        self.label_precision = Some(decimals);
        self
    }

    /// Set the number of rows shown by previews.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set how many column pairs are listed as strongest correlations.
    pub fn strong_correlation_limit(mut self, limit: usize) -> Self {
        self.strong_correlation_limit = Some(limit);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `AnalysisConfig` or an error if validation fails.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            top_categories: self.top_categories.unwrap_or(defaults.top_categories),
            label_precision: self.label_precision.unwrap_or(defaults.label_precision),
            preview_rows: self.preview_rows.unwrap_or(defaults.preview_rows),
            strong_correlation_limit: self
                .strong_correlation_limit
                .unwrap_or(defaults.strong_correlation_limit),
        };

        config.validate()?;
        Ok(config)
    }
}
