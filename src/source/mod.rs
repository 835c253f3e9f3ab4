//! Data sources that supply transaction records.
//!
//! The summary only needs records, it does not care where they come from.
//! Each source implements [RecordSource] and is picked by the caller.

mod csv;
mod sqlite;

pub use csv::{CsvRecordSource, parse_csv};
pub use sqlite::{SqliteRecordSource, create_business_table, insert_record};

use crate::{Error, record::RawTransactionRecord};

/// Something that can produce the transaction records for a report.
pub trait RecordSource {
    /// Fetch every record, ordered by date where the source knows the date.
    ///
    /// # Errors
    /// Returns an error if the underlying data could not be read.
    fn fetch_records(&self) -> Result<Vec<RawTransactionRecord>, Error>;
}

