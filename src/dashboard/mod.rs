//! Dashboard state and orchestration.

pub mod controller;
pub mod engine;
pub mod options;
pub mod state;

pub use controller::{Dashboard, SummaryFigures};
pub use engine::{DashboardEngine, DashboardSnapshot};
pub use options::{month_name, MonthOption, SelectorOptions};
pub use state::{FilterState, Selector};
