//! Distinct selector values for populating the filter widgets.

use std::collections::HashSet;

use chrono::Month;

use crate::models::record::SalesRecord;

/// A month option: the raw selector value plus its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    pub value: u8,
    pub name: String,
}

/// Distinct values found in the dataset, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    pub machines: Vec<String>,
    pub categories: Vec<String>,
    pub months: Vec<MonthOption>,
}

impl SelectorOptions {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let mut options = SelectorOptions::default();
        let mut seen_machines = HashSet::new();
        let mut seen_categories = HashSet::new();
        let mut seen_months = HashSet::new();

        for record in records {
            if seen_machines.insert(record.machine.clone()) {
                options.machines.push(record.machine.clone());
            }
            if seen_categories.insert(record.category.clone()) {
                options.categories.push(record.category.clone());
            }
            if seen_months.insert(record.month) {
                options.months.push(MonthOption {
                    value: record.month,
                    // Enrichment already rejected out-of-range months.
                    name: month_name(record.month).unwrap_or_default(),
                });
            }
        }

        options
    }
}

/// Long English name for a 1-based month, as the month selector displays it.
pub fn month_name(month: u8) -> Option<String> {
    Month::try_from(month)
        .ok()
        .map(|month| month.name().to_string())
}
