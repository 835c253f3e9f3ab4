//! Monthly summary module
//!
//! Turns a batch of transaction records into a dense grid of income and
//! expense totals with one row for every month and category pair, sorted by
//! calendar month and then category.
//!
//! The stages run in this order:
//! 1. normalize the month of each record
//! 2. collect the categories and sum the records by month, category and kind
//! 3. fill in the missing pairs with zero
//! 4. sort the rows
//!
//! Records whose month is not recognised, or whose type is neither income nor
//! expense, do not contribute to any total. They are counted in a
//! [DropReport] so the caller can tell that something was left out.

mod categories;
mod grid;
mod monthly;
mod pivot;

use std::collections::BTreeSet;

pub use grid::SummaryRow;
pub use monthly::{MonthlyTotal, aggregate_by_month};

use crate::{
    Error,
    month::CanonicalMonth,
    record::{RawTransactionRecord, TransactionKind, TransactionRecord, validate_records},
    summary::{
        categories::collect_categories,
        grid::{complete_grid, sort_by_calendar},
        pivot::{NormalizedRecord, normalize_records, pivot},
    },
};

/// Counts of the records that were left out of the summary totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropReport {
    /// Number of records whose month did not normalize to a month name.
    pub unrecognized_month: usize,
    /// The distinct month values behind `unrecognized_month`.
    pub unrecognized_month_values: BTreeSet<String>,
    /// Number of records whose type was neither "income" nor "expense".
    pub unrecognized_type: usize,
    /// The distinct type labels behind `unrecognized_type`.
    pub unrecognized_type_labels: BTreeSet<String>,
}

impl DropReport {
    fn from_records(records: &[NormalizedRecord]) -> Self {
        let mut report = DropReport::default();

        for record in records {
            if CanonicalMonth::from_normalized(&record.month).is_none() {
                report.unrecognized_month += 1;
                report.unrecognized_month_values.insert(record.month.clone());
            }

            if let TransactionKind::Other(label) = record.kind {
                report.unrecognized_type += 1;
                report.unrecognized_type_labels.insert(label.clone());
            }
        }

        report
    }

    /// Whether every record contributed to the totals.
    pub fn is_empty(&self) -> bool {
        self.unrecognized_month == 0 && self.unrecognized_type == 0
    }

    fn log(&self) {
        if self.unrecognized_month > 0 {
            tracing::warn!(
                "{} record(s) have a month that is not recognised and were left out of the summary: {:?}",
                self.unrecognized_month,
                self.unrecognized_month_values
            );
        }

        if self.unrecognized_type > 0 {
            tracing::warn!(
                "{} record(s) are neither income nor expense and were left out of the totals: {:?}",
                self.unrecognized_type,
                self.unrecognized_type_labels
            );
        }
    }
}

/// The completed summary grid along with what was left out of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    /// One row per month and category, in calendar then category order.
    pub rows: Vec<SummaryRow>,
    pub drops: DropReport,
}

impl MonthlySummary {
    /// The summary rows summed across categories, one per month.
    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        aggregate_by_month(&self.rows)
    }
}

/// Validates raw records and builds the monthly summary from them.
///
/// # Errors
/// Returns [Error::MalformedRecord] if any record is missing a month,
/// transaction type, category or amount.
pub fn summarize(records: &[RawTransactionRecord]) -> Result<MonthlySummary, Error> {
    let records = validate_records(records)?;

    Ok(summarize_records(&records))
}

/// Builds the monthly summary from validated records.
///
/// Running this twice on the same records gives the same summary.
pub fn summarize_records(records: &[TransactionRecord]) -> MonthlySummary {
    let normalized = normalize_records(records);
    let categories = collect_categories(records);
    let table = pivot(&normalized);

    tracing::debug!(
        "aggregated {} records into {} groups across {} categories",
        records.len(),
        table.len(),
        categories.len()
    );

    let rows = sort_by_calendar(complete_grid(&table, &categories));
    let drops = DropReport::from_records(&normalized);
    drops.log();

    MonthlySummary { rows, drops }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{
        Error,
        month::{CanonicalMonth, RawMonth},
        record::{RawTransactionRecord, TransactionKind, TransactionRecord},
    };

    use super::{summarize, summarize_records};

    fn record(month: &str, category: &str, kind: &str, amount: f64) -> TransactionRecord {
        TransactionRecord::new(
            RawMonth::Text(month.to_owned()),
            TransactionKind::from_label(kind),
            category,
            amount,
        )
    }

    fn sample_records() -> Vec<TransactionRecord> {
        vec![
            record("1", "Groceries", "expense", 100.0),
            record("January", "Salary", "income", 2000.0),
            record("2", "Groceries", "expense", 50.0),
        ]
    }

    #[test]
    fn builds_the_complete_grid() {
        let summary = summarize_records(&sample_records());
        let rows = &summary.rows;

        assert_eq!(rows.len(), 24);

        let values = |index: usize| {
            (
                rows[index].month,
                rows[index].category.as_str(),
                rows[index].income,
                rows[index].expense,
            )
        };
        assert_eq!(
            values(0),
            (CanonicalMonth::January, "Groceries", 0.0, 100.0)
        );
        assert_eq!(values(1), (CanonicalMonth::January, "Salary", 2000.0, 0.0));
        assert_eq!(
            values(2),
            (CanonicalMonth::February, "Groceries", 0.0, 50.0)
        );
        assert_eq!(values(3), (CanonicalMonth::February, "Salary", 0.0, 0.0));
        assert_eq!(values(4), (CanonicalMonth::March, "Groceries", 0.0, 0.0));
        assert_eq!(values(5), (CanonicalMonth::March, "Salary", 0.0, 0.0));

        for row in &rows[4..] {
            assert_eq!((row.income, row.expense), (0.0, 0.0), "{row:?}");
        }
        assert!(summary.drops.is_empty());
    }

    #[test]
    fn row_order_does_not_depend_on_input_order() {
        let mut reversed = sample_records();
        reversed.reverse();

        assert_eq!(
            summarize_records(&sample_records()),
            summarize_records(&reversed)
        );
    }

    #[test]
    fn running_twice_gives_the_same_summary() {
        let records = sample_records();
        let before = records.clone();

        let first = summarize_records(&records);
        let second = summarize_records(&records);

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn totals_match_the_sum_of_matching_records() {
        let records = vec![
            record("3", "Sales", "income", 120.25),
            record("March", "Sales", "income", 79.75),
            record("3", "Sales", "expense", 10.5),
            record("4", "Sales", "income", 1.0),
            record("3", "Office", "expense", 42.0),
        ];

        let summary = summarize_records(&records);

        for row in &summary.rows {
            let sum = |kind: TransactionKind| -> f64 {
                records
                    .iter()
                    .filter(|record| {
                        crate::normalize_month(&record.month) == row.month.name()
                            && record.category == row.category
                            && record.kind == kind
                    })
                    .map(|record| record.amount)
                    .sum()
            };

            assert_eq!(row.income, sum(TransactionKind::Income), "{row:?}");
            assert_eq!(row.expense, sum(TransactionKind::Expense), "{row:?}");
        }
    }

    #[test]
    fn transfers_are_excluded_and_counted() {
        let records = vec![
            record("5", "Savings", "transfer", 500.0),
            record("5", "Savings", "expense", 20.0),
        ];

        let summary = summarize_records(&records);

        let may = summary
            .rows
            .iter()
            .find(|row| row.month == CanonicalMonth::May)
            .unwrap();
        assert_eq!((may.income, may.expense), (0.0, 20.0));
        assert_eq!(summary.drops.unrecognized_type, 1);
        assert_eq!(
            summary.drops.unrecognized_type_labels,
            BTreeSet::from(["transfer".to_owned()])
        );
    }

    #[test]
    fn unrecognised_months_are_excluded_and_counted() {
        let records = vec![
            record("01", "Sales", "income", 10.0),
            record("Jan", "Sales", "income", 20.0),
            record("Jan", "Rent", "expense", 30.0),
        ];

        let summary = summarize_records(&records);

        // The categories still make it into the grid, with nothing in them.
        assert_eq!(summary.rows.len(), 24);
        assert!(
            summary
                .rows
                .iter()
                .all(|row| row.income == 0.0 && row.expense == 0.0)
        );
        assert_eq!(summary.drops.unrecognized_month, 3);
        assert_eq!(
            summary.drops.unrecognized_month_values,
            BTreeSet::from(["01".to_owned(), "Jan".to_owned()])
        );
    }

    #[test]
    fn empty_input_gives_no_rows() {
        let summary = summarize(&[]).unwrap();

        assert!(summary.rows.is_empty());
        assert!(summary.drops.is_empty());
        assert!(summary.monthly_totals().iter().all(|total| total.is_zero()));
    }

    #[test]
    fn summarize_rejects_malformed_records() {
        let records = vec![RawTransactionRecord {
            month: Some(RawMonth::Number(1)),
            transaction_type: Some("income".to_owned()),
            category: Some("Sales".to_owned()),
            amount: None,
            ..Default::default()
        }];

        let result = summarize(&records);

        assert!(matches!(
            result,
            Err(Error::MalformedRecord {
                index: 0,
                field: "amount"
            })
        ));
    }

    #[test]
    fn monthly_totals_follow_the_grid() {
        let summary = summarize_records(&sample_records());

        let totals = summary.monthly_totals();

        assert_eq!(totals.len(), 12);
        assert_eq!((totals[0].income, totals[0].expense), (2000.0, 100.0));
        assert_eq!((totals[1].income, totals[1].expense), (0.0, 50.0));
        assert!(totals[2..].iter().all(|total| total.is_zero()));
    }
}
