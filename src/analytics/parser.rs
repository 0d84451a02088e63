//! Currency string parsing shared by the pivot and totals paths.

use crate::analytics::error::AnalyticsError;

/// Parse a line total such as `"$9.00"` into its numeric amount.
///
/// The leading dollar sign is required and the remainder must be a finite
/// decimal, so a malformed record surfaces as `InvalidCurrencyFormat` instead
/// of pushing NaN into a running sum.
pub fn parse_currency(value: &str) -> Result<f64, AnalyticsError> {
    let amount = value
        .trim()
        .strip_prefix('$')
        .ok_or_else(|| AnalyticsError::InvalidCurrencyFormat(value.to_string()))?;
    let parsed = amount
        .parse::<f64>()
        .map_err(|_| AnalyticsError::InvalidCurrencyFormat(value.to_string()))?;
    if !parsed.is_finite() {
        return Err(AnalyticsError::InvalidCurrencyFormat(value.to_string()));
    }
    Ok(parsed)
}

/// Format an amount back into the display form used by the summary figures.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
