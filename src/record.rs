//! Transaction records as delivered by a data source and after validation.

use std::fmt::Display;

use time::Date;

use crate::{Error, month::RawMonth};

/// The kind of a transaction, decided when a record is ingested.
///
/// Only `"income"` and `"expense"` (exact, lowercase) are recognised, every
/// other label is kept as [TransactionKind::Other] so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Any other label, e.g. "transfer".
    Other(String),
}

impl TransactionKind {
    /// Classify a transaction type label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "income" => TransactionKind::Income,
            "expense" => TransactionKind::Expense,
            other => TransactionKind::Other(other.to_owned()),
        }
    }

    /// The label as it appears in the data source.
    pub fn label(&self) -> &str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Other(label) => label,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A transaction record exactly as read from a data source.
///
/// Every field is optional here, [RawTransactionRecord::validate] checks
/// that the fields the summary needs are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTransactionRecord {
    pub date: Option<Date>,
    pub month: Option<RawMonth>,
    pub transaction_type: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub counterparty: Option<String>,
    /// The amount before tax.
    pub net_amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
    /// The amount including tax, this is the value that gets summarised.
    pub amount: Option<f64>,
}

impl RawTransactionRecord {
    /// Check the required fields and convert into a [TransactionRecord].
    ///
    /// `index` is the position of the record in its batch and is only used
    /// for the error message.
    ///
    /// # Errors
    /// Returns [Error::MalformedRecord] naming the first missing field out of
    /// `month`, `transaction_type`, `category` and `amount`.
    pub fn validate(&self, index: usize) -> Result<TransactionRecord, Error> {
        let missing = |field| Error::MalformedRecord { index, field };

        let month = self.month.clone().ok_or_else(|| missing("month"))?;
        let kind = self
            .transaction_type
            .as_deref()
            .map(TransactionKind::from_label)
            .ok_or_else(|| missing("transaction_type"))?;
        let category = self.category.clone().ok_or_else(|| missing("category"))?;
        let amount = self.amount.ok_or_else(|| missing("amount"))?;

        Ok(TransactionRecord {
            details: RecordDetails {
                date: self.date,
                description: self.description.clone(),
                counterparty: self.counterparty.clone(),
                net_amount: self.net_amount,
                tax_rate: self.tax_rate,
                tax_amount: self.tax_amount,
            },
            ..TransactionRecord::new(month, kind, category, amount)
        })
    }
}

/// Fields carried along with a record that the summary does not use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDetails {
    pub date: Option<Date>,
    pub description: Option<String>,
    pub counterparty: Option<String>,
    pub net_amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
}

/// A validated transaction record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The month as stored by the data source, see [crate::normalize_month].
    pub month: RawMonth,
    pub kind: TransactionKind,
    pub category: String,
    /// The total attributable to this record.
    pub amount: f64,
    pub details: RecordDetails,
}

impl TransactionRecord {
    /// Create a record with no extra details.
    pub fn new(
        month: RawMonth,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            month,
            kind,
            category: category.into(),
            amount,
            details: RecordDetails::default(),
        }
    }
}

/// Validate a batch of raw records.
///
/// # Errors
/// Stops at the first record that is missing a required field and returns
/// [Error::MalformedRecord] for it. No partial result is returned.
pub fn validate_records(records: &[RawTransactionRecord]) -> Result<Vec<TransactionRecord>, Error> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}
