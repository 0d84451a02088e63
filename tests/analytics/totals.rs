//! Unit tests for the totals calculator

use vendtrix::analytics::enrich::enrich_record;
use vendtrix::analytics::error::AnalyticsError;
use vendtrix::analytics::totals::TotalsCalculator;
use vendtrix::models::record::{RawRecord, SalesRecord};

fn record(product: &str, rqty: u64, linetotal: &str) -> SalesRecord {
    enrich_record(RawRecord {
        machine: "M1".to_string(),
        category: "Snacks".to_string(),
        month: 2,
        location: "L1".to_string(),
        payment: "card".to_string(),
        product: product.to_string(),
        rqty,
        linetotal: linetotal.to_string(),
    })
    .unwrap()
}

#[test]
fn test_totals_over_subset() {
    let records = vec![
        record("P1", 3, "$9.00"),
        record("P2", 2, "$4.00"),
        record("P1", 1, "$3.00"),
    ];
    let totals = TotalsCalculator::totals(&records).unwrap();
    assert_eq!(totals.total_currency, 16.0);
    assert_eq!(totals.total_quantity, 6);
    assert_eq!(totals.distinct_products, 2);
}

#[test]
fn test_totals_of_empty_subset() {
    let totals = TotalsCalculator::totals(&[]).unwrap();
    assert_eq!(totals.total_currency, 0.0);
    assert_eq!(totals.total_quantity, 0);
    assert_eq!(totals.distinct_products, 0);
}

#[test]
fn test_malformed_currency_is_an_error() {
    let records = vec![record("P1", 3, "$9.00"), record("P2", 2, "4.00")];
    let err = TotalsCalculator::totals(&records).unwrap_err();
    assert!(matches!(err, AnalyticsError::InvalidCurrencyFormat(_)));
}
