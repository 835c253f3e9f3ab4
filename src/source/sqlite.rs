//! Reads transaction records from the `business` table of a SQLite database.

use std::path::{Path, PathBuf};

use rusqlite::{
    Connection, OpenFlags, Row, ToSql,
    types::{ToSqlOutput, ValueRef},
};

use crate::{Error, month::RawMonth, record::RawTransactionRecord, source::RecordSource};

/// Reads records from a SQLite database file.
///
/// The database is opened read-only for each fetch and closed afterwards.
#[derive(Debug, Clone)]
pub struct SqliteRecordSource {
    path: PathBuf,
}

impl SqliteRecordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSource for SqliteRecordSource {
    fn fetch_records(&self) -> Result<Vec<RawTransactionRecord>, Error> {
        let connection = Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let records = get_business_records(&connection)?;
        tracing::info!("Read {} records from {:?}", records.len(), self.path);

        Ok(records)
    }
}

/// Create the `business` table.
///
/// The `month` column has no declared type because data sources store it
/// either as a number or as a month name.
///
/// # Errors
/// Returns an error if the table already exists or if there is an SQL error.
pub fn create_business_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE business (
            id INTEGER PRIMARY KEY,
            date TEXT,
            month,
            transaction_type TEXT,
            category TEXT,
            description TEXT,
            vendor_client TEXT,
            amount_cad REAL,
            tax_rate REAL,
            tax_amount_cad REAL,
            total_cad REAL
        )",
        (),
    )?;

    Ok(())
}

impl ToSql for RawMonth {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            RawMonth::Number(number) => number.to_sql(),
            RawMonth::Text(text) => text.to_sql(),
        }
    }
}

/// Insert a record into the `business` table.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn insert_record(
    record: &RawTransactionRecord,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute(
        "INSERT INTO business (date, month, transaction_type, category, description, \
            vendor_client, amount_cad, tax_rate, tax_amount_cad, total_cad) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        (
            record.date,
            &record.month,
            &record.transaction_type,
            &record.category,
            &record.description,
            &record.counterparty,
            record.net_amount,
            record.tax_rate,
            record.tax_amount,
            record.amount,
        ),
    )?;

    Ok(())
}

fn get_business_records(connection: &Connection) -> Result<Vec<RawTransactionRecord>, Error> {
    let mut stmt = connection.prepare(
        "SELECT date, month, transaction_type, category, description, vendor_client, \
            amount_cad, tax_rate, tax_amount_cad, total_cad \
        FROM business \
        ORDER BY date",
    )?;

    stmt.query_map([], map_business_row)?
        .collect::<Result<Vec<_>, rusqlite::Error>>()
        .map_err(|error| error.into())
}

fn map_business_row(row: &Row) -> Result<RawTransactionRecord, rusqlite::Error> {
    Ok(RawTransactionRecord {
        date: row.get(0)?,
        month: map_month(row.get_ref(1)?),
        transaction_type: row.get(2)?,
        category: row.get(3)?,
        description: row.get(4)?,
        counterparty: row.get(5)?,
        net_amount: row.get(6)?,
        tax_rate: row.get(7)?,
        tax_amount: row.get(8)?,
        amount: row.get(9)?,
    })
}

/// Reads the untyped `month` column.
///
/// REAL values keep their decimal point, so `3.0` becomes `"3.0"` and is not
/// taken for March.
fn map_month(value: ValueRef) -> Option<RawMonth> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(number) => Some(RawMonth::Number(number)),
        ValueRef::Real(number) => Some(RawMonth::Text(format!("{number:?}"))),
        ValueRef::Text(text) | ValueRef::Blob(text) => {
            Some(RawMonth::Text(String::from_utf8_lossy(text).into_owned()))
        }
    }
}
