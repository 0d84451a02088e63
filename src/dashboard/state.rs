//! Filter selector slots and their transition rules.

use crate::models::filter::FilterSpec;

/// Identity of one of the three filter selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Machine,
    Category,
    Month,
}

/// The three selector slots backing the active filter.
///
/// Choosing the unconstrained ("all") option on any selector clears every
/// slot, mirroring the dashboard's shared reset control.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    machine: Option<String>,
    category: Option<String>,
    month: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a selector change. An empty value is the "all" option and resets
    /// all three slots.
    pub fn select(&mut self, selector: Selector, value: &str) {
        if value.is_empty() {
            self.reset();
            return;
        }
        let value = Some(value.to_string());
        match selector {
            Selector::Machine => self.machine = value,
            Selector::Category => self.category = value,
            Selector::Month => self.month = value,
        }
    }

    /// Clear all three slots.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the current slots into a spec.
    pub fn spec(&self) -> FilterSpec {
        FilterSpec {
            machine: self.machine.clone(),
            category: self.category.clone(),
            month: self.month.clone(),
        }
    }
}
