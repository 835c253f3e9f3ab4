//! Discovery of the categories that appear in a batch of records.

use std::collections::HashSet;

use crate::record::TransactionRecord;

/// Collects the distinct category labels across all records.
///
/// The set has no meaningful order, the summary rows are sorted later.
/// Every record counts, even one whose month or type is not recognised.
pub(crate) fn collect_categories(records: &[TransactionRecord]) -> HashSet<String> {
    records
        .iter()
        .map(|record| record.category.clone())
        .collect()
}
