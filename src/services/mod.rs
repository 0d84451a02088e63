//! External data sources.

pub mod dataset;

pub use dataset::{load_records, DatasetError};
