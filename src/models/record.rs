use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar quarter derived from a record's month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Quarter for a 1-based month. Months outside 1-12 have no quarter.
    pub fn from_month(month: u8) -> Option<Quarter> {
        match month {
            1..=3 => Some(Quarter::Q1),
            4..=6 => Some(Quarter::Q2),
            7..=9 => Some(Quarter::Q3),
            10..=12 => Some(Quarter::Q4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-of-sale transaction as it appears in the input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub machine: String,
    pub category: String,
    pub month: u8,
    pub location: String,
    #[serde(rename = "type")]
    pub payment: String,
    pub product: String,
    pub rqty: u64,
    pub linetotal: String,
}

/// An enriched transaction carrying its derived quarter.
///
/// The quarter is always computed from `month` at enrichment time and never
/// stored independently of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    pub machine: String,
    pub category: String,
    pub month: u8,
    pub location: String,
    #[serde(rename = "type")]
    pub payment: String,
    pub product: String,
    pub rqty: u64,
    pub linetotal: String,
    pub quarter: Quarter,
}
