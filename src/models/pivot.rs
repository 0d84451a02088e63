use serde::{Deserialize, Serialize};

/// Per-dimension grouping result: parallel label and measure vectors.
///
/// Label order is first appearance in the aggregated subset. The three
/// vectors always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotResult {
    pub labels: Vec<String>,
    pub quantity_sums: Vec<u64>,
    pub currency_sums: Vec<f64>,
}

impl PivotResult {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Dataset-wide summary figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_currency: f64,
    pub total_quantity: u64,
    pub distinct_products: usize,
}
