//! Defines the crate level error type.

/// The errors that may occur while building or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record from the data source is missing one of the fields the
    /// summary needs.
    ///
    /// `index` is the zero-based position of the record in the input and
    /// `field` names the first missing field.
    #[error("record {index} is missing the required field \"{field}\"")]
    MalformedRecord {
        /// Position of the offending record in the input.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The CSV had issues that prevented it from being parsed.
    #[error("could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Reading or writing a file failed.
    ///
    /// Callers should pass in the path along with the underlying error as a
    /// string.
    #[error("could not access \"{0}\": {1}")]
    Io(String, String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::InvalidCsv(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JsonSerialization(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn malformed_record_names_index_and_field() {
        let error = Error::MalformedRecord {
            index: 3,
            field: "category",
        };

        assert_eq!(
            error.to_string(),
            "record 3 is missing the required field \"category\""
        );
    }

    #[test]
    fn sql_errors_are_wrapped() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert!(matches!(error, Error::SqlError(_)));
    }
}
