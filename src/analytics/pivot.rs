//! Single-pass pivot aggregation by dimension.

use std::collections::HashMap;

use crate::analytics::error::AnalyticsError;
use crate::analytics::parser::parse_currency;
use crate::models::pivot::PivotResult;
use crate::models::record::SalesRecord;

/// Record field used to group a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Month,
    Quarter,
    Category,
    Location,
    Payment,
}

impl Dimension {
    /// The record's label under this dimension.
    pub fn label_of(&self, record: &SalesRecord) -> String {
        match self {
            Dimension::Month => record.month.to_string(),
            Dimension::Quarter => record.quarter.to_string(),
            Dimension::Category => record.category.clone(),
            Dimension::Location => record.location.clone(),
            Dimension::Payment => record.payment.clone(),
        }
    }
}

pub struct PivotAggregator;

impl PivotAggregator {
    /// Group records by dimension, summing quantity and currency per label.
    ///
    /// Labels keep first-seen order. Both measures accumulate in one pass
    /// over the subset, so the cost stays linear regardless of how many
    /// distinct labels turn up.
    pub fn pivot(
        records: &[SalesRecord],
        dimension: Dimension,
    ) -> Result<PivotResult, AnalyticsError> {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut result = PivotResult::default();

        for record in records {
            let label = dimension.label_of(record);
            let amount = parse_currency(&record.linetotal)?;
            let slot = match slots.get(&label) {
                Some(&slot) => slot,
                None => {
                    let slot = result.labels.len();
                    slots.insert(label.clone(), slot);
                    result.labels.push(label);
                    result.quantity_sums.push(0);
                    result.currency_sums.push(0.0);
                    slot
                }
            };
            result.quantity_sums[slot] += record.rqty;
            result.currency_sums[slot] += amount;
        }

        Ok(result)
    }
}
