//! Reads transaction records from a CSV export of the business table.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, month::RawMonth, record::RawTransactionRecord, source::RecordSource};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// One line of the CSV file, with the business table's column names.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: Option<String>,
    month: Option<String>,
    transaction_type: Option<String>,
    category: Option<String>,
    description: Option<String>,
    vendor_client: Option<String>,
    amount_cad: Option<f64>,
    tax_rate: Option<f64>,
    tax_amount_cad: Option<f64>,
    total_cad: Option<f64>,
}

/// Reads records from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for CsvRecordSource {
    fn fetch_records(&self) -> Result<Vec<RawTransactionRecord>, Error> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|error| Error::Io(self.path.display().to_string(), error.to_string()))?;

        let records = parse_csv(&text)?;
        tracing::info!("Read {} records from {:?}", records.len(), self.path);

        Ok(records)
    }
}

/// Parses CSV text exported from the business table.
///
/// Expects a header row naming the columns `date`, `month`,
/// `transaction_type`, `category`, `description`, `vendor_client`,
/// `amount_cad`, `tax_rate`, `tax_amount_cad` and `total_cad`. Columns may be
/// in any order and any of them may be absent or empty, checking for the
/// required ones is left to [RawTransactionRecord::validate].
///
/// Returns `Error::InvalidCsv` if a line cannot be read, a number cannot be
/// parsed or a date is not in the format `YYYY-MM-DD`.
pub fn parse_csv(text: &str) -> Result<Vec<RawTransactionRecord>, Error> {
    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();

    for (line_number, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row?;

        let date = match row.date {
            Some(date_string) => Some(Date::parse(&date_string, &DATE_FORMAT).map_err(|error| {
                Error::InvalidCsv(format!(
                    "could not parse '{date_string}' as a date on row {}: {error}",
                    line_number + 1
                ))
            })?),
            None => None,
        };

        records.push(RawTransactionRecord {
            date,
            month: row.month.map(RawMonth::Text),
            transaction_type: row.transaction_type,
            category: row.category,
            description: row.description,
            counterparty: row.vendor_client,
            net_amount: row.amount_cad,
            tax_rate: row.tax_rate,
            tax_amount: row.tax_amount_cad,
            amount: row.total_cad,
        });
    }

    Ok(records)
}
