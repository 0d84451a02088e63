//! Recording chart adapter for tests and dry runs.

use crate::charts::adapter::{ChartAdapter, ChartHandle, ChartKind};

/// A captured `create` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedChart {
    pub handle: ChartHandle,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series_a: Vec<f64>,
    pub series_b: Option<Vec<f64>>,
    pub name_a: String,
    pub name_b: String,
}

/// A captured `update` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartUpdate {
    pub handle: ChartHandle,
    pub labels: Vec<String>,
    pub series_a: Vec<f64>,
    pub series_b: Option<Vec<f64>>,
}

/// Adapter that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub created: Vec<CreatedChart>,
    pub updates: Vec<ChartUpdate>,
}

impl RecordingAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received by one handle, in arrival order.
    pub fn updates_for(&self, handle: ChartHandle) -> Vec<&ChartUpdate> {
        self.updates
            .iter()
            .filter(|update| update.handle == handle)
            .collect()
    }
}

impl ChartAdapter for RecordingAdapter {
    fn create(
        &mut self,
        kind: ChartKind,
        labels: Vec<String>,
        series_a: Vec<f64>,
        series_b: Option<Vec<f64>>,
        name_a: &str,
        name_b: &str,
    ) -> ChartHandle {
        let handle = ChartHandle(self.created.len() as u32);
        self.created.push(CreatedChart {
            handle,
            kind,
            labels,
            series_a,
            series_b,
            name_a: name_a.to_string(),
            name_b: name_b.to_string(),
        });
        handle
    }

    fn update(
        &mut self,
        handle: ChartHandle,
        labels: Vec<String>,
        series_a: Vec<f64>,
        series_b: Option<Vec<f64>>,
    ) {
        self.updates.push(ChartUpdate {
            handle,
            labels,
            series_a,
            series_b,
        });
    }
}
