//! Settings for where reports are written and how they are titled.

use std::path::{Path, PathBuf};

/// The settings used when generating reports.
///
/// This is passed to [crate::generate_reports] explicitly, nothing reads it
/// from global state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// The directory that all report files are written to.
    pub output_dir: PathBuf,
    /// The file name, without extension, shared by the spreadsheet CSV files.
    pub spreadsheet_stem: String,
    /// The file name for the chart options.
    pub chart_file: String,
    /// The file name for the HTML report.
    pub html_file: String,
    /// The title shown at the top of the report.
    pub title: String,
    /// The company shown under the title.
    pub company_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            spreadsheet_stem: "fintrack_report".to_owned(),
            chart_file: "fintrack_chart.json".to_owned(),
            html_file: "fintrack_report.html".to_owned(),
            title: "Business Monthly Financial Report".to_owned(),
            company_name: "My Company Inc.".to_owned(),
        }
    }
}

impl ReportConfig {
    /// Use `output_dir` for the report files, keeping the other defaults.
    pub fn with_output_dir(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Path of the CSV file holding every input record.
    pub fn business_data_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_business_data.csv", self.spreadsheet_stem))
    }

    /// Path of the CSV file holding the monthly summary by category.
    pub fn monthly_summary_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_monthly_summary.csv", self.spreadsheet_stem))
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_file)
    }
}
