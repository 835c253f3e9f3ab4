//! FinTrack turns business transaction records into monthly financial reports.
//!
//! The heart of the library is [summarize], which builds a grid of income and
//! expense totals with one row for every calendar month and category, even
//! when a category had no transactions that month. Around it sit the
//! [RecordSource] implementations that read records from CSV or SQLite, and
//! [generate_reports] which writes the summary as CSV files, a chart and an
//! HTML report.

mod config;
mod error;
mod logging;
mod month;
mod record;
mod report;
mod source;
mod summary;

pub use config::ReportConfig;
pub use error::Error;
pub use logging::setup_logging;
pub use month::{CanonicalMonth, RawMonth, normalize_month};
pub use record::{
    RawTransactionRecord, RecordDetails, TransactionKind, TransactionRecord, validate_records,
};
pub use report::{
    ReportOutcome, format_amount, format_currency, generate_reports, monthly_chart,
    render_html_report, write_business_data, write_monthly_summary,
};
pub use source::{
    CsvRecordSource, RecordSource, SqliteRecordSource, create_business_table, insert_record,
    parse_csv,
};
pub use summary::{
    DropReport, MonthlySummary, MonthlyTotal, SummaryRow, aggregate_by_month, summarize,
    summarize_records,
};
