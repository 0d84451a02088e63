//! Aggregation pipeline: enrichment, filtering, pivoting and totals.

pub mod enrich;
pub mod error;
pub mod filter;
pub mod parser;
pub mod percentage;
pub mod pivot;
pub mod totals;

pub use enrich::{enrich, enrich_record};
pub use error::AnalyticsError;
pub use filter::FilterEngine;
pub use parser::{format_currency, parse_currency};
pub use percentage::PercentageComputer;
pub use pivot::{Dimension, PivotAggregator};
pub use totals::TotalsCalculator;
