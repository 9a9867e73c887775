//! CLI entry point for exploratory data analysis of CSV files.

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, anyhow};
use clap::Parser;
use eda_core::{
    AnalysisConfig, AnalysisReport, ColumnKind, DataProfiler, DistributionBin, ReportGenerator,
    Table, load_csv,
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for CSV files",
    long_about = "Profiles every column of a CSV file: missing values, summary statistics,\n\
                  distributions and a Pearson correlation matrix over numeric columns.\n\n\
                  EXAMPLES:\n  \
                  # Human-readable overview\n  \
                  eda-core -i data.csv\n\n  \
                  # Distribution of one column with 20 bins\n  \
                  eda-core -i data.csv --column age --bins 20\n\n  \
                  # Machine-readable output\n  \
                  eda-core -i data.csv --json | jq .report.correlation"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Output directory for reports
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Only show the distribution of this column
    #[arg(long)]
    column: Option<String>,

    /// Number of histogram bins for numeric columns
    #[arg(long, default_value = "10")]
    bins: usize,

    /// Number of categories kept in frequency tables
    #[arg(long, default_value = "10")]
    top: usize,

    /// Decimal places in histogram bin labels
    #[arg(long, default_value = "2")]
    precision: usize,

    /// Number of rows shown in the data preview
    #[arg(long)]
    preview: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of human-readable summary
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let input = Path::new(&args.input);
    if !input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = build_config(&args)?;
    debug!("Analysis config: {:?}", config);

    let table = load_csv(input)?;
    info!(
        "Dataset loaded: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );

    if let Some(ref column) = args.column {
        table.require_column(column)?;
    }

    let start = Instant::now();
    let mut profile = DataProfiler::profile_table_with_config(&table, &config);
    if let Some(ref column) = args.column {
        profile.distributions.retain(|dist| &dist.column == column);
    }
    let report = ReportGenerator::build_report(Some(input), start.elapsed(), profile);

    if args.json {
        println!("{}", ReportGenerator::to_json(&report)?);
    } else {
        print_human_readable_summary(&args, &table, &config, &report);
    }

    if args.emit_report {
        let generator = ReportGenerator::new(&args.output);
        let path = generator.write_report_to_file(&report, &extract_file_stem(&args.input))?;
        if !args.json {
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<AnalysisConfig> {
    let mut builder = AnalysisConfig::builder()
        .histogram_bins(args.bins)
        .top_categories(args.top)
        .label_precision(args.precision);

    if let Some(rows) = args.preview {
        builder = builder.preview_rows(rows);
    }

    Ok(builder.build()?)
}

/// Extract the file stem from a path (e.g., "data/cities.csv" -> "cities")
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

/// Print the analysis for a terminal.
///
/// Uses `println!` rather than logging: this is the primary output and must
/// be visible regardless of log level.
fn print_human_readable_summary(
    args: &Args,
    table: &Table,
    config: &AnalysisConfig,
    analysis: &AnalysisReport,
) {
    let report = &analysis.report;

    println!();
    println!("{}", "=".repeat(80));
    println!("EXPLORATORY DATA ANALYSIS");
    println!("{}", "=".repeat(80));
    println!();

    println!("DATASET OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  File: {}", args.input);
    println!("  Rows: {}", report.row_count);
    println!(
        "  Columns: {} ({} numeric, {} categorical)",
        report.column_count,
        analysis.overview.numeric_columns,
        analysis.overview.categorical_columns
    );
    println!(
        "  Missing cells: {} of {} ({:.1}%)",
        report.missing.total_missing,
        report.missing.total_cells,
        report.missing.missing_percentage
    );
    println!("  Duration: {}ms", analysis.duration_ms);
    println!();

    if config.preview_rows > 0 && !table.is_empty() {
        println!("DATA PREVIEW (first {} rows)", config.preview_rows);
        println!("{}", "-".repeat(40));
        let header: Vec<String> = table.columns().iter().map(|c| truncate_str(c, 14)).collect();
        println!(
            "  {}",
            header.iter().map(|c| format!("{:<15}", c)).collect::<String>()
        );
        for row in table.head(config.preview_rows) {
            let line: String = row
                .iter()
                .map(|value| format!("{:<15}", truncate_str(value, 14)))
                .collect();
            println!("  {}", line);
        }
        println!();
    }

    println!("COLUMN SUMMARY");
    println!("{}", "-".repeat(40));
    println!(
        "{:<20} {:<12} {:<9} {:<8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Kind", "Missing", "Unique", "Min", "Max", "Mean", "Median", "Std"
    );
    println!("{}", "-".repeat(105));
    for (record, missing) in report.summary.iter().zip(&report.missing.per_column) {
        let stats = record.numeric;
        println!(
            "{:<20} {:<12} {:<9} {:<8} {:>10} {:>10} {:>10} {:>10} {:>10}",
            truncate_str(&record.name, 19),
            record.kind,
            format!("{:.1}%", missing.percentage),
            record.unique_count,
            format_optional(stats.map(|s| s.min)),
            format_optional(stats.map(|s| s.max)),
            format_optional(stats.map(|s| s.mean)),
            format_optional(stats.map(|s| s.median)),
            format_optional(stats.map(|s| s.std_dev)),
        );
    }
    println!();

    println!("DISTRIBUTIONS");
    println!("{}", "-".repeat(40));
    for dist in &report.distributions {
        let kind = report
            .summary
            .iter()
            .find(|record| record.name == dist.column)
            .map_or(ColumnKind::Categorical, |record| record.kind);
        println!("  {} ({})", dist.column, kind);

        if dist.bins.is_empty() {
            println!("    (no values)");
            continue;
        }

        let max_count = dist.bins.iter().map(DistributionBin::count).max().unwrap_or(0);
        for bin in &dist.bins {
            let width = if max_count == 0 {
                0
            } else {
                bin.count() * 30 / max_count
            };
            println!(
                "    {:<24} {:>6} {}",
                truncate_str(bin.label(), 24),
                bin.count(),
                "#".repeat(width)
            );
        }
    }
    println!();

    println!("CORRELATION MATRIX");
    println!("{}", "-".repeat(40));
    let matrix = &report.correlation;
    if matrix.len() < 2 {
        println!("  Fewer than two numeric columns; nothing to correlate");
    } else {
        let header: String = matrix
            .columns
            .iter()
            .map(|c| format!("{:>10}", truncate_str(c, 9)))
            .collect();
        println!("  {:<12}{}", "", header);
        for (name, row) in matrix.columns.iter().zip(&matrix.values) {
            let cells: String = row
                .iter()
                .map(|value| format!("{:>10}", format_optional(*value)))
                .collect();
            println!("  {:<12}{}", truncate_str(name, 11), cells);
        }
    }
    println!();

    if !report.strongest_correlations.is_empty() {
        println!("STRONGEST CORRELATIONS");
        println!("{}", "-".repeat(40));
        for pair in &report.strongest_correlations {
            println!(
                "  {} ~ {}: {:+.3}",
                pair.column_x, pair.column_y, pair.coefficient
            );
        }
        println!();
    }

    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save detailed JSON report");
    println!("{}", "=".repeat(80));
}
