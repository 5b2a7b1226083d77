//! Usage aggregation: raw records to priced line items.

use meterbill_core::{LineItem, PriceTable, UsageRecord};

/// Price a list of usage records into line items and their subtotal.
///
/// Each record becomes exactly one line item with
/// `amount = floor(volume × unit_price)`; the subtotal is the sum of all
/// amounts. Empty input yields `(vec![], 0)`, a valid statement state.
///
/// Records are assumed to have passed request validation; this stage does
/// not re-check volumes. Counters missing from the catalog price at the
/// table's default and are logged, since a silent fallback can mask catalog
/// gaps.
#[must_use]
pub fn price_usage(pricing: &PriceTable, records: &[UsageRecord]) -> (Vec<LineItem>, i64) {
    let mut line_items = Vec::with_capacity(records.len());
    let mut subtotal = 0i64;

    for record in records {
        let unit_price = match pricing.lookup(&record.counter_name) {
            Some(price) => price,
            None => {
                tracing::warn!(
                    counter_name = %record.counter_name,
                    default_unit_price = pricing.default_unit_price(),
                    "counter not in pricing catalog, using default unit price"
                );
                pricing.default_unit_price()
            }
        };

        let amount = record.amount_at(unit_price);
        subtotal += amount;

        line_items.push(LineItem {
            counter_name: record.counter_name.clone(),
            counter_unit: record.counter_unit.clone(),
            quantity: record.counter_volume,
            unit_price,
            amount,
            resource_id: record.resource_id.clone(),
            project_id: record.project_id.clone(),
        });
    }

    (line_items, subtotal)
}
