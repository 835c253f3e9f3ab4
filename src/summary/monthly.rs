//! Collapses the summary grid into one row per month for charting.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{month::CanonicalMonth, summary::grid::SummaryRow};

/// Income and expense totals for a whole month across all categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: CanonicalMonth,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotal {
    /// Whether the month had neither income nor expenses.
    pub fn is_zero(&self) -> bool {
        self.income == 0.0 && self.expense == 0.0
    }
}

/// Sums the summary rows by month.
///
/// # Returns
/// Twelve totals in calendar order. Months without rows have zero totals,
/// callers decide whether to show them.
pub fn aggregate_by_month(rows: &[SummaryRow]) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<CanonicalMonth, (f64, f64)> = CanonicalMonth::ALL
        .into_iter()
        .map(|month| (month, (0.0, 0.0)))
        .collect();

    for row in rows {
        let (income, expense) = totals.entry(row.month).or_default();
        *income += row.income;
        *expense += row.expense;
    }

    totals
        .into_iter()
        .map(|(month, (income, expense))| MonthlyTotal {
            month,
            income,
            expense,
        })
        .collect()
}
