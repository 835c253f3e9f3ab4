//! Grouping of records by month and category.

use std::collections::BTreeMap;

use crate::{
    month::normalize_month,
    record::{TransactionKind, TransactionRecord},
};

/// Income and expense totals for one group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// A record with its month normalized, borrowing everything else.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NormalizedRecord<'a> {
    pub month: String,
    pub kind: &'a TransactionKind,
    pub category: &'a str,
    pub amount: f64,
}

/// Normalizes the month of every record, leaving the records untouched.
pub(crate) fn normalize_records(records: &[TransactionRecord]) -> Vec<NormalizedRecord<'_>> {
    records
        .iter()
        .map(|record| NormalizedRecord {
            month: normalize_month(&record.month),
            kind: &record.kind,
            category: &record.category,
            amount: record.amount,
        })
        .collect()
}

/// Totals keyed by `(normalized month, category)`.
///
/// Only groups with at least one record are present. The month is the
/// normalized string, which may not be a real month name.
pub(crate) type SparseTable = BTreeMap<(String, String), Totals>;

/// Sums amounts by month, category and transaction kind.
///
/// Records of kind [TransactionKind::Other] still create their group but add
/// nothing to either total.
pub(crate) fn pivot(records: &[NormalizedRecord]) -> SparseTable {
    let mut table = SparseTable::new();

    for record in records {
        let totals = table
            .entry((record.month.clone(), record.category.to_owned()))
            .or_default();

        match record.kind {
            TransactionKind::Income => totals.income += record.amount,
            TransactionKind::Expense => totals.expense += record.amount,
            TransactionKind::Other(_) => {}
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use crate::{
        month::RawMonth,
        record::{TransactionKind, TransactionRecord},
    };

    use super::{Totals, normalize_records, pivot};

    fn record(month: i64, kind: TransactionKind, category: &str, amount: f64) -> TransactionRecord {
        TransactionRecord::new(RawMonth::Number(month), kind, category, amount)
    }

    #[test]
    fn normalize_records_does_not_touch_input() {
        let records = vec![record(3, TransactionKind::Income, "Sales", 1.0)];
        let before = records.clone();

        let normalized = normalize_records(&records);

        assert_eq!(normalized[0].month, "March");
        assert_eq!(records, before);
    }

    #[test]
    fn sums_income_and_expense_separately() {
        let records = vec![
            record(1, TransactionKind::Income, "Sales", 100.0),
            record(1, TransactionKind::Income, "Sales", 50.0),
            record(1, TransactionKind::Expense, "Sales", 25.0),
            record(2, TransactionKind::Expense, "Rent", 800.0),
        ];

        let table = pivot(&normalize_records(&records));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table[&("January".to_owned(), "Sales".to_owned())],
            Totals {
                income: 150.0,
                expense: 25.0
            }
        );
        assert_eq!(
            table[&("February".to_owned(), "Rent".to_owned())],
            Totals {
                income: 0.0,
                expense: 800.0
            }
        );
    }

    #[test]
    fn other_kinds_add_nothing() {
        let records = vec![
            record(4, TransactionKind::Other("transfer".to_owned()), "Savings", 500.0),
            record(4, TransactionKind::Income, "Sales", 20.0),
            record(4, TransactionKind::Other("transfer".to_owned()), "Sales", 7.0),
        ];

        let table = pivot(&normalize_records(&records));

        assert_eq!(
            table[&("April".to_owned(), "Savings".to_owned())],
            Totals::default()
        );
        assert_eq!(
            table[&("April".to_owned(), "Sales".to_owned())],
            Totals {
                income: 20.0,
                expense: 0.0
            }
        );
    }

    #[test]
    fn negative_amounts_are_summed_as_is() {
        let records = vec![
            record(5, TransactionKind::Expense, "Refunds", 40.0),
            record(5, TransactionKind::Expense, "Refunds", -15.0),
        ];

        let table = pivot(&normalize_records(&records));

        assert_eq!(
            table[&("May".to_owned(), "Refunds".to_owned())].expense,
            25.0
        );
    }

    #[test]
    fn unrecognised_months_keep_their_own_group() {
        let records = vec![TransactionRecord::new(
            RawMonth::Text("13".to_owned()),
            TransactionKind::Income,
            "Sales",
            1.0,
        )];

        let table = pivot(&normalize_records(&records));

        assert!(table.contains_key(&("13".to_owned(), "Sales".to_owned())));
    }
}
