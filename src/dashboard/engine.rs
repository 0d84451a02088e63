//! Recompute cascade from the filtered subset to chart-ready aggregates.

use crate::analytics::error::AnalyticsError;
use crate::analytics::filter::FilterEngine;
use crate::analytics::pivot::{Dimension, PivotAggregator};
use crate::analytics::totals::TotalsCalculator;
use crate::models::filter::FilterSpec;
use crate::models::pivot::{PivotResult, Totals};
use crate::models::record::SalesRecord;

/// Everything the display layer needs for one filter state.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub totals: Totals,
    pub monthly: PivotResult,
    pub quarterly: PivotResult,
    pub category: PivotResult,
    pub location: PivotResult,
    pub payment: PivotResult,
}

pub struct DashboardEngine;

impl DashboardEngine {
    /// Filter the dataset and recompute totals plus all five pivots.
    ///
    /// Runs synchronously to completion; every structure in the snapshot is
    /// freshly allocated, never aliased back into the source dataset.
    pub fn recompute(
        records: &[SalesRecord],
        spec: &FilterSpec,
    ) -> Result<DashboardSnapshot, AnalyticsError> {
        let subset = FilterEngine::apply(records, spec);
        Ok(DashboardSnapshot {
            totals: TotalsCalculator::totals(&subset)?,
            monthly: PivotAggregator::pivot(&subset, Dimension::Month)?,
            quarterly: PivotAggregator::pivot(&subset, Dimension::Quarter)?,
            category: PivotAggregator::pivot(&subset, Dimension::Category)?,
            location: PivotAggregator::pivot(&subset, Dimension::Location)?,
            payment: PivotAggregator::pivot(&subset, Dimension::Payment)?,
        })
    }
}
