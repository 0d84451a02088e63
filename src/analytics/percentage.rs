//! Percentage-of-total computation for proportion-style charts.

use crate::analytics::error::AnalyticsError;

pub struct PercentageComputer;

impl PercentageComputer {
    /// Each measure's share of the total, rounded to two decimals.
    ///
    /// A zero total has no defined shares and yields `EmptyMeasureSet`.
    pub fn percentages(measures: &[f64]) -> Result<Vec<f64>, AnalyticsError> {
        let total: f64 = measures.iter().sum();
        if total <= 0.0 {
            return Err(AnalyticsError::EmptyMeasureSet);
        }
        Ok(measures
            .iter()
            .map(|measure| (measure / total * 10_000.0).round() / 100.0)
            .collect())
    }

    /// Annotate each label with its share of the total, `"label (12.34%)"`.
    ///
    /// When the total is zero every label is annotated `(0.00%)` so a chart
    /// never receives non-numeric output.
    pub fn percentage_labels(labels: &[String], measures: &[f64]) -> Vec<String> {
        debug_assert_eq!(labels.len(), measures.len());
        match Self::percentages(measures) {
            Ok(shares) => labels
                .iter()
                .zip(shares)
                .map(|(label, share)| format!("{} ({:.2}%)", label, share))
                .collect(),
            Err(_) => labels
                .iter()
                .map(|label| format!("{} (0.00%)", label))
                .collect(),
        }
    }
}
