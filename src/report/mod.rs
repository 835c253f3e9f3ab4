//! Report generation
//!
//! Writes the outputs built from the monthly summary: the spreadsheet CSV
//! files, the chart options and the HTML report.

mod chart;
mod format;
mod html;
mod spreadsheet;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

pub use chart::monthly_chart;
pub use format::{format_amount, format_currency};
pub use html::render_html_report;
pub use spreadsheet::{write_business_data, write_monthly_summary};

use crate::{
    Error,
    config::ReportConfig,
    record::{RawTransactionRecord, validate_records},
    summary::{MonthlySummary, summarize_records},
};

/// What [generate_reports] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub summary: MonthlySummary,
    /// The files that were written, in the order they were written.
    pub files: Vec<PathBuf>,
}

/// Builds the monthly summary from `records` and writes every report.
///
/// Nothing is written when there are no records.
///
/// # Errors
/// Returns [Error::MalformedRecord] if a record is missing a required field,
/// or an I/O or serialization error if a report cannot be written.
pub fn generate_reports(
    records: &[RawTransactionRecord],
    config: &ReportConfig,
) -> Result<ReportOutcome, Error> {
    let records = validate_records(records)?;

    if records.is_empty() {
        tracing::warn!("No data found, no reports were written.");
        return Ok(ReportOutcome {
            summary: MonthlySummary::default(),
            files: Vec::new(),
        });
    }

    let summary = summarize_records(&records);

    std::fs::create_dir_all(&config.output_dir)
        .map_err(|error| io_error(&config.output_dir, error))?;

    let mut files = Vec::new();

    let path = config.business_data_path();
    write_file(&path, |file| write_business_data(file, &records))?;
    files.push(path);

    let path = config.monthly_summary_path();
    write_file(&path, |file| write_monthly_summary(file, &summary.rows))?;
    files.push(path);

    let chart = monthly_chart(&summary.monthly_totals(), &config.company_name);

    if let Some(chart) = &chart {
        let path = config.chart_path();
        write_text(&path, &chart.to_string())?;
        files.push(path);
    }

    let path = config.html_path();
    let markup = render_html_report(config, chart.as_ref(), &summary.rows);
    write_text(&path, &markup.into_string())?;
    files.push(path);

    Ok(ReportOutcome { summary, files })
}

/// Creates `path` and writes to it with `write`.
fn write_file<F>(path: &Path, write: F) -> Result<(), Error>
where
    F: FnOnce(File) -> Result<(), Error>,
{
    let file = File::create(path).map_err(|error| io_error(path, error))?;

    write(file)?;
    tracing::info!("Wrote {}", path.display());

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<(), Error> {
    write_file(path, |mut file| {
        file.write_all(text.as_bytes())
            .map_err(|error| io_error(path, error))
    })
}

fn io_error(path: &Path, error: std::io::Error) -> Error {
    Error::Io(path.display().to_string(), error.to_string())
}
