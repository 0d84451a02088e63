//! Filter application over the enriched dataset.

use crate::models::filter::FilterSpec;
use crate::models::record::SalesRecord;

pub struct FilterEngine;

impl FilterEngine {
    /// Records satisfying every constraint in the spec, in original order.
    ///
    /// The input is never mutated; an all-unset spec returns the dataset
    /// unchanged.
    pub fn apply(records: &[SalesRecord], spec: &FilterSpec) -> Vec<SalesRecord> {
        records
            .iter()
            .filter(|record| Self::matches(record, spec))
            .cloned()
            .collect()
    }

    /// Whether a single record satisfies the spec.
    pub fn matches(record: &SalesRecord, spec: &FilterSpec) -> bool {
        let machine_ok = spec
            .machine
            .as_deref()
            .map_or(true, |machine| record.machine == machine);
        let category_ok = spec
            .category
            .as_deref()
            .map_or(true, |category| record.category == category);
        let month_ok = spec
            .month
            .as_deref()
            .map_or(true, |month| month_matches(month, record.month));
        machine_ok && category_ok && month_ok
    }
}

/// Value-equality comparison between a month selector string and a record's
/// numeric month. The selector widget hands back strings, so `"2"` must match
/// month `2`; a value that does not parse matches nothing.
pub fn month_matches(selected: &str, month: u8) -> bool {
    selected
        .trim()
        .parse::<u8>()
        .map_or(false, |selected_month| selected_month == month)
}
