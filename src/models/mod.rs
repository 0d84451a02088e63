//! Shared data models spanning the engine layers.

pub mod filter;
pub mod pivot;
pub mod record;

pub use filter::FilterSpec;
pub use pivot::{PivotResult, Totals};
pub use record::{Quarter, RawRecord, SalesRecord};
