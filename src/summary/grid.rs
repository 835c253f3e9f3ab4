//! Completion of the sparse table into a dense month by category grid.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    month::CanonicalMonth,
    summary::pivot::{SparseTable, Totals},
};

/// The income and expense totals for one category in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub month: CanonicalMonth,
    pub category: String,
    pub income: f64,
    pub expense: f64,
}

/// Builds one row for every month and category pair.
///
/// Pairs that are missing from `table` get zero totals. Entries in `table`
/// whose month is not a month name have no place in the grid and are left
/// out. The returned rows are not in any particular order.
pub(crate) fn complete_grid(table: &SparseTable, categories: &HashSet<String>) -> Vec<SummaryRow> {
    let mut rows = Vec::with_capacity(CanonicalMonth::ALL.len() * categories.len());

    for month in CanonicalMonth::ALL {
        for category in categories {
            let totals = table
                .get(&(month.name().to_owned(), category.clone()))
                .copied()
                .unwrap_or_default();

            rows.push(row(month, category, totals));
        }
    }

    rows
}

fn row(month: CanonicalMonth, category: &str, totals: Totals) -> SummaryRow {
    SummaryRow {
        month,
        category: category.to_owned(),
        income: totals.income,
        expense: totals.expense,
    }
}

/// Sorts rows by calendar month, then by category name.
pub(crate) fn sort_by_calendar(mut rows: Vec<SummaryRow>) -> Vec<SummaryRow> {
    rows.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then_with(|| a.category.cmp(&b.category))
    });

    rows
}
