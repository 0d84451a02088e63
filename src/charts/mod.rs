//! Chart adapter boundary and its built-in implementations.

pub mod adapter;
pub mod recording;

pub use adapter::{ChartAdapter, ChartHandle, ChartKind, LogAdapter};
pub use recording::{ChartUpdate, CreatedChart, RecordingAdapter};
