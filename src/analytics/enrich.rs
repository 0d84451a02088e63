//! Quarter enrichment over raw transaction records.

use crate::analytics::error::AnalyticsError;
use crate::models::record::{Quarter, RawRecord, SalesRecord};

/// Attach the derived quarter to every record.
///
/// Pure and order-preserving. A month outside 1-12 aborts enrichment with
/// `InvalidMonth` naming the offending value.
pub fn enrich(records: Vec<RawRecord>) -> Result<Vec<SalesRecord>, AnalyticsError> {
    records.into_iter().map(enrich_record).collect()
}

/// Enrich a single record.
pub fn enrich_record(record: RawRecord) -> Result<SalesRecord, AnalyticsError> {
    let quarter =
        Quarter::from_month(record.month).ok_or(AnalyticsError::InvalidMonth(record.month))?;
    Ok(SalesRecord {
        machine: record.machine,
        category: record.category,
        month: record.month,
        location: record.location,
        payment: record.payment,
        product: record.product,
        rqty: record.rqty,
        linetotal: record.linetotal,
        quarter,
    })
}
