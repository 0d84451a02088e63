//! Error types for the aggregation pipeline.

use std::fmt;

/// Data-quality failures surfaced by the aggregation pipeline.
///
/// Per-record defects abort the computation that saw them instead of leaking
/// a default or a NaN into a running sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A record's month is outside 1-12, so no quarter can be derived.
    InvalidMonth(u8),
    /// A record's line total could not be parsed as a currency amount.
    InvalidCurrencyFormat(String),
    /// A percentage was requested over measures that sum to zero.
    EmptyMeasureSet,
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::InvalidMonth(month) => {
                write!(f, "month {} is outside the 1-12 range", month)
            }
            AnalyticsError::InvalidCurrencyFormat(raw) => {
                write!(f, "unparsable line total {:?}", raw)
            }
            AnalyticsError::EmptyMeasureSet => write!(f, "measures sum to zero"),
        }
    }
}

impl std::error::Error for AnalyticsError {}
