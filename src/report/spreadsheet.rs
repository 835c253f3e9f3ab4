//! Writes the business data and the monthly summary as CSV files.

use std::io::Write;

use serde::Serialize;

use crate::{
    Error,
    month::normalize_month,
    record::TransactionRecord,
    report::format::format_amount,
    summary::SummaryRow,
};

/// A row of the business data file, using the business table's column names.
#[derive(Debug, Serialize)]
struct BusinessDataRow {
    date: Option<String>,
    month: String,
    transaction_type: String,
    category: String,
    description: Option<String>,
    vendor_client: Option<String>,
    amount_cad: Option<String>,
    tax_rate: Option<f64>,
    tax_amount_cad: Option<String>,
    total_cad: String,
}

impl From<&TransactionRecord> for BusinessDataRow {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            date: record.details.date.map(|date| date.to_string()),
            month: normalize_month(&record.month),
            transaction_type: record.kind.label().to_owned(),
            category: record.category.clone(),
            description: record.details.description.clone(),
            vendor_client: record.details.counterparty.clone(),
            amount_cad: record.details.net_amount.map(format_amount),
            tax_rate: record.details.tax_rate,
            tax_amount_cad: record.details.tax_amount.map(format_amount),
            total_cad: format_amount(record.amount),
        }
    }
}

/// A row of the monthly summary file.
#[derive(Debug, Serialize)]
struct MonthlySummaryRow<'a> {
    month: &'static str,
    category: &'a str,
    #[serde(rename = "Income")]
    income: String,
    #[serde(rename = "Expense")]
    expense: String,
}

impl<'a> From<&'a SummaryRow> for MonthlySummaryRow<'a> {
    fn from(row: &'a SummaryRow) -> Self {
        Self {
            month: row.month.name(),
            category: &row.category,
            income: format_amount(row.income),
            expense: format_amount(row.expense),
        }
    }
}

/// Writes every record, one per line, in the order given.
///
/// The month column holds the normalized month, e.g. "January" for `1`, and
/// every other column is written as read.
///
/// # Errors
/// Returns [Error::InvalidCsv] if a row cannot be written.
pub fn write_business_data<W: Write>(writer: W, records: &[TransactionRecord]) -> Result<(), Error> {
    let mut writer = ::csv::Writer::from_writer(writer);

    for record in records {
        writer.serialize(BusinessDataRow::from(record))?;
    }

    writer
        .flush()
        .map_err(|error| Error::InvalidCsv(error.to_string()))
}

/// Writes the summary rows with the header `month,category,Income,Expense`.
///
/// # Errors
/// Returns [Error::InvalidCsv] if a row cannot be written.
pub fn write_monthly_summary<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), Error> {
    let mut writer = ::csv::Writer::from_writer(writer);

    if rows.is_empty() {
        // serde only writes the header along with the first row.
        writer.write_record(["month", "category", "Income", "Expense"])?;
    }

    for row in rows {
        writer.serialize(MonthlySummaryRow::from(row))?;
    }

    writer
        .flush()
        .map_err(|error| Error::InvalidCsv(error.to_string()))
}
