//! Unit tests for percentage computation

use vendtrix::analytics::error::AnalyticsError;
use vendtrix::analytics::percentage::PercentageComputer;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    let cases: Vec<Vec<f64>> = vec![
        vec![9.0, 4.0],
        vec![1.0, 1.0, 1.0],
        vec![0.1, 0.2, 0.3, 0.4],
        vec![5.0],
    ];
    for measures in cases {
        let shares = PercentageComputer::percentages(&measures).unwrap();
        let sum: f64 = shares.iter().sum();
        assert!(
            (sum - 100.0).abs() <= 0.01,
            "shares {:?} sum to {}",
            shares,
            sum
        );
    }
}

#[test]
fn test_percentages_round_to_two_decimals() {
    let shares = PercentageComputer::percentages(&[1.0, 2.0]).unwrap();
    assert_eq!(shares, vec![33.33, 66.67]);
}

#[test]
fn test_zero_total_is_empty_measure_set() {
    assert_eq!(
        PercentageComputer::percentages(&[0.0, 0.0]).unwrap_err(),
        AnalyticsError::EmptyMeasureSet
    );
    assert_eq!(
        PercentageComputer::percentages(&[]).unwrap_err(),
        AnalyticsError::EmptyMeasureSet
    );
}

#[test]
fn test_labels_annotated_with_shares() {
    let annotated =
        PercentageComputer::percentage_labels(&labels(&["card", "cash"]), &[9.0, 4.0]);
    assert_eq!(annotated, vec!["card (69.23%)", "cash (30.77%)"]);
}

#[test]
fn test_zero_total_labels_fall_back_to_sentinel() {
    let annotated = PercentageComputer::percentage_labels(&labels(&["card", "cash"]), &[0.0, 0.0]);
    assert_eq!(annotated, vec!["card (0.00%)", "cash (0.00%)"]);
}
