//! Tri-state filter specification narrowing the dataset.

use serde::{Deserialize, Serialize};

/// Conjunctive equality constraints over machine, category and month.
///
/// Each slot is independent; `None` matches every record. The month slot
/// keeps the raw selector string and is compared with value equality at the
/// filter boundary, so a string-typed UI value (`"2"`) matches a numeric
/// record month (`2`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub machine: Option<String>,
    pub category: Option<String>,
    pub month: Option<String>,
}

impl FilterSpec {
    /// Spec with no constraints; matches the full dataset.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.machine.is_none() && self.category.is_none() && self.month.is_none()
    }

    pub fn with_machine(mut self, machine: &str) -> Self {
        self.machine = Some(machine.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_month(mut self, month: &str) -> Self {
        self.month = Some(month.to_string());
        self
    }
}
