//! Sales-analytics pivot engine: quarter enrichment, tri-state filtering,
//! per-dimension aggregation and totals behind a chart-agnostic adapter
//! boundary.

pub mod analytics;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod models;
pub mod services;
