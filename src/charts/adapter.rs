//! Chart rendering boundary.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Widget shape understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    BarHorizontal,
    Pie,
}

/// Opaque identifier for a created chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u32);

/// Two-operation rendering contract.
///
/// The engine only creates charts once and then pushes full label/series
/// replacements at their handles; it never reads chart state back. Pie charts
/// carry a single series, so `series_b` is optional on both operations.
pub trait ChartAdapter {
    fn create(
        &mut self,
        kind: ChartKind,
        labels: Vec<String>,
        series_a: Vec<f64>,
        series_b: Option<Vec<f64>>,
        name_a: &str,
        name_b: &str,
    ) -> ChartHandle;

    /// Replace a chart's labels and series and trigger a redraw.
    fn update(
        &mut self,
        handle: ChartHandle,
        labels: Vec<String>,
        series_a: Vec<f64>,
        series_b: Option<Vec<f64>>,
    );
}

/// Adapter that logs chart traffic instead of drawing, standing in for a real
/// rendering layer in headless runs.
#[derive(Debug, Default)]
pub struct LogAdapter {
    next_handle: u32,
}

impl LogAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartAdapter for LogAdapter {
    fn create(
        &mut self,
        kind: ChartKind,
        labels: Vec<String>,
        _series_a: Vec<f64>,
        _series_b: Option<Vec<f64>>,
        name_a: &str,
        _name_b: &str,
    ) -> ChartHandle {
        let handle = ChartHandle(self.next_handle);
        self.next_handle += 1;
        info!(?kind, series = name_a, points = labels.len(), "chart created");
        handle
    }

    fn update(
        &mut self,
        handle: ChartHandle,
        labels: Vec<String>,
        _series_a: Vec<f64>,
        _series_b: Option<Vec<f64>>,
    ) {
        debug!(handle = handle.0, points = labels.len(), "chart updated");
    }
}
