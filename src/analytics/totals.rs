//! Dataset-wide summary figures.

use std::collections::HashSet;

use crate::analytics::error::AnalyticsError;
use crate::analytics::parser::parse_currency;
use crate::models::pivot::Totals;
use crate::models::record::SalesRecord;

pub struct TotalsCalculator;

impl TotalsCalculator {
    /// Total currency, total quantity and distinct product count for a
    /// subset.
    ///
    /// Shares the currency parser with the pivot path, so for any subset the
    /// pivot's per-label sums add up to exactly these figures.
    pub fn totals(records: &[SalesRecord]) -> Result<Totals, AnalyticsError> {
        let mut totals = Totals::default();
        let mut products: HashSet<&str> = HashSet::new();

        for record in records {
            totals.total_currency += parse_currency(&record.linetotal)?;
            totals.total_quantity += record.rqty;
            products.insert(record.product.as_str());
        }

        totals.distinct_products = products.len();
        Ok(totals)
    }
}
