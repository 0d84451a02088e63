//! Unit tests for the pivot aggregator

use vendtrix::analytics::enrich::enrich_record;
use vendtrix::analytics::error::AnalyticsError;
use vendtrix::analytics::pivot::{Dimension, PivotAggregator};
use vendtrix::models::record::{RawRecord, SalesRecord};

fn record(category: &str, month: u8, rqty: u64, linetotal: &str) -> SalesRecord {
    enrich_record(RawRecord {
        machine: "M1".to_string(),
        category: category.to_string(),
        month,
        location: "L1".to_string(),
        payment: "card".to_string(),
        product: "P1".to_string(),
        rqty,
        linetotal: linetotal.to_string(),
    })
    .unwrap()
}

#[test]
fn test_labels_keep_first_seen_order() {
    let records = vec![
        record("Snacks", 2, 3, "$9.00"),
        record("Drinks", 5, 2, "$4.00"),
        record("Snacks", 7, 1, "$2.00"),
    ];
    let pivot = PivotAggregator::pivot(&records, Dimension::Category).unwrap();
    assert_eq!(pivot.labels, vec!["Snacks", "Drinks"]);
}

#[test]
fn test_measures_sum_per_label() {
    let records = vec![
        record("Snacks", 2, 3, "$9.00"),
        record("Drinks", 5, 2, "$4.00"),
        record("Snacks", 7, 1, "$2.00"),
    ];
    let pivot = PivotAggregator::pivot(&records, Dimension::Category).unwrap();
    assert_eq!(pivot.quantity_sums, vec![4, 2]);
    assert_eq!(pivot.currency_sums, vec![11.0, 4.0]);
}

#[test]
fn test_parallel_vectors_equal_length() {
    let records = vec![
        record("Snacks", 2, 3, "$9.00"),
        record("Drinks", 5, 2, "$4.00"),
    ];
    for dimension in [
        Dimension::Month,
        Dimension::Quarter,
        Dimension::Category,
        Dimension::Location,
        Dimension::Payment,
    ] {
        let pivot = PivotAggregator::pivot(&records, dimension).unwrap();
        assert_eq!(pivot.labels.len(), pivot.quantity_sums.len());
        assert_eq!(pivot.labels.len(), pivot.currency_sums.len());
    }
}

#[test]
fn test_quarter_dimension_groups_across_months() {
    let records = vec![
        record("Snacks", 1, 1, "$1.00"),
        record("Snacks", 3, 1, "$1.00"),
        record("Snacks", 4, 1, "$1.00"),
    ];
    let pivot = PivotAggregator::pivot(&records, Dimension::Quarter).unwrap();
    assert_eq!(pivot.labels, vec!["Q1", "Q2"]);
    assert_eq!(pivot.quantity_sums, vec![2, 1]);
}

#[test]
fn test_month_labels_are_numeric_strings() {
    let records = vec![record("Snacks", 11, 1, "$1.00")];
    let pivot = PivotAggregator::pivot(&records, Dimension::Month).unwrap();
    assert_eq!(pivot.labels, vec!["11"]);
}

#[test]
fn test_malformed_currency_is_an_error() {
    let records = vec![
        record("Snacks", 2, 3, "$9.00"),
        record("Snacks", 2, 1, "nine dollars"),
    ];
    let err = PivotAggregator::pivot(&records, Dimension::Category).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidCurrencyFormat(_)));
}

#[test]
fn test_empty_subset_pivots_to_empty_result() {
    let pivot = PivotAggregator::pivot(&[], Dimension::Category).unwrap();
    assert!(pivot.is_empty());
    assert_eq!(pivot.len(), 0);
}
