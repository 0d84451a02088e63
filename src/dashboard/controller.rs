//! Dashboard orchestration: owns the dataset, the filter slots and the chart
//! handles, and runs the recompute cascade on every selector change.

use tracing::debug;

use crate::analytics::error::AnalyticsError;
use crate::analytics::parser::format_currency;
use crate::analytics::percentage::PercentageComputer;
use crate::charts::adapter::{ChartAdapter, ChartHandle, ChartKind};
use crate::dashboard::engine::{DashboardEngine, DashboardSnapshot};
use crate::dashboard::options::SelectorOptions;
use crate::dashboard::state::{FilterState, Selector};
use crate::models::filter::FilterSpec;
use crate::models::pivot::{PivotResult, Totals};
use crate::models::record::SalesRecord;

const TOTAL_SALES_SERIES: &str = "Total Sales";
const ITEM_SALES_SERIES: &str = "Item Sales";

/// The three text figures next to the charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFigures {
    /// Total sales formatted as currency, e.g. `"$13.00"`.
    pub total_sales: String,
    pub quantity_sold: u64,
    pub total_products: usize,
}

impl From<&Totals> for SummaryFigures {
    fn from(totals: &Totals) -> Self {
        Self {
            total_sales: format_currency(totals.total_currency),
            quantity_sold: totals.total_quantity,
            total_products: totals.distinct_products,
        }
    }
}

/// Handles of the five chart widgets, created once at startup.
#[derive(Debug, Clone, Copy)]
struct ChartHandles {
    monthly: ChartHandle,
    quarterly: ChartHandle,
    category: ChartHandle,
    location: ChartHandle,
    payment: ChartHandle,
}

/// The dashboard's stateful core.
///
/// Holds the immutable dataset, the current filter slots and the chart
/// handles. Selector changes run the whole cascade synchronously before
/// returning, so two recomputes can never interleave.
pub struct Dashboard<A: ChartAdapter> {
    records: Vec<SalesRecord>,
    state: FilterState,
    adapter: A,
    handles: ChartHandles,
    summary: SummaryFigures,
}

impl<A: ChartAdapter> Dashboard<A> {
    /// Compute the unfiltered snapshot and create the five charts.
    ///
    /// Handles are created exactly once here; afterwards they are only ever
    /// updated.
    pub fn new(records: Vec<SalesRecord>, mut adapter: A) -> Result<Self, AnalyticsError> {
        let snapshot = DashboardEngine::recompute(&records, &FilterSpec::unconstrained())?;
        let handles = ChartHandles {
            monthly: Self::create_chart(&mut adapter, ChartKind::Line, &snapshot.monthly),
            quarterly: Self::create_chart(&mut adapter, ChartKind::BarHorizontal, &snapshot.quarterly),
            category: Self::create_chart(&mut adapter, ChartKind::Bar, &snapshot.category),
            location: Self::create_chart(&mut adapter, ChartKind::Bar, &snapshot.location),
            payment: adapter.create(
                ChartKind::Pie,
                PercentageComputer::percentage_labels(
                    &snapshot.payment.labels,
                    &snapshot.payment.currency_sums,
                ),
                snapshot.payment.currency_sums.clone(),
                None,
                TOTAL_SALES_SERIES,
                ITEM_SALES_SERIES,
            ),
        };
        let summary = SummaryFigures::from(&snapshot.totals);
        Ok(Self {
            records,
            state: FilterState::new(),
            adapter,
            handles,
            summary,
        })
    }

    /// Apply a selector change and run the recompute cascade.
    pub fn select(&mut self, selector: Selector, value: &str) -> Result<(), AnalyticsError> {
        self.state.select(selector, value);
        self.refresh()
    }

    pub fn select_machine(&mut self, value: &str) -> Result<(), AnalyticsError> {
        self.select(Selector::Machine, value)
    }

    pub fn select_category(&mut self, value: &str) -> Result<(), AnalyticsError> {
        self.select(Selector::Category, value)
    }

    pub fn select_month(&mut self, value: &str) -> Result<(), AnalyticsError> {
        self.select(Selector::Month, value)
    }

    /// Current summary figures for the active filter.
    pub fn summary(&self) -> &SummaryFigures {
        &self.summary
    }

    /// Active filter spec derived from the selector slots.
    pub fn filter_spec(&self) -> FilterSpec {
        self.state.spec()
    }

    /// Distinct values for populating the selector widgets.
    pub fn options(&self) -> SelectorOptions {
        SelectorOptions::from_records(&self.records)
    }

    /// The rendering adapter, for callers that own inspectable adapters.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    fn refresh(&mut self) -> Result<(), AnalyticsError> {
        let spec = self.state.spec();
        debug!(?spec, "recomputing dashboard");
        let snapshot = DashboardEngine::recompute(&self.records, &spec)?;
        self.push_updates(&snapshot);
        self.summary = SummaryFigures::from(&snapshot.totals);
        Ok(())
    }

    fn push_updates(&mut self, snapshot: &DashboardSnapshot) {
        Self::update_chart(&mut self.adapter, self.handles.monthly, &snapshot.monthly);
        Self::update_chart(&mut self.adapter, self.handles.quarterly, &snapshot.quarterly);
        Self::update_chart(&mut self.adapter, self.handles.category, &snapshot.category);
        Self::update_chart(&mut self.adapter, self.handles.location, &snapshot.location);
        self.adapter.update(
            self.handles.payment,
            PercentageComputer::percentage_labels(
                &snapshot.payment.labels,
                &snapshot.payment.currency_sums,
            ),
            snapshot.payment.currency_sums.clone(),
            None,
        );
    }

    fn create_chart(adapter: &mut A, kind: ChartKind, pivot: &PivotResult) -> ChartHandle {
        adapter.create(
            kind,
            pivot.labels.clone(),
            pivot.currency_sums.clone(),
            Some(quantity_series(pivot)),
            TOTAL_SALES_SERIES,
            ITEM_SALES_SERIES,
        )
    }

    fn update_chart(adapter: &mut A, handle: ChartHandle, pivot: &PivotResult) {
        adapter.update(
            handle,
            pivot.labels.clone(),
            pivot.currency_sums.clone(),
            Some(quantity_series(pivot)),
        );
    }
}

fn quantity_series(pivot: &PivotResult) -> Vec<f64> {
    pivot.quantity_sums.iter().map(|&qty| qty as f64).collect()
}
