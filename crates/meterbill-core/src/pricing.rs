//! Pricing catalog for meterbill.
//!
//! This module defines the immutable counter-name to unit-price mapping the
//! usage aggregator consults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit price applied to counters missing from the catalog, in minor units.
pub const DEFAULT_UNIT_PRICE: i64 = 100;

/// Immutable mapping from counter name to unit price.
///
/// Lookup is total: a counter missing from the table prices at the
/// configured default instead of failing, so an incomplete catalog never
/// blocks a billing run. The table is read-only configuration data and safe
/// to share across any number of in-flight computations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceTable {
    /// Unit price per counter name, in minor units.
    prices: HashMap<String, i64>,

    /// Unit price for counters not present in `prices`.
    default_unit_price: i64,
}

impl Default for PriceTable {
    fn default() -> Self {
        let mut prices = HashMap::new();

        // Compute instances, priced per hour
        prices.insert("compute.c2.c8m8".to_string(), 397);
        prices.insert("compute.c2.c16m16".to_string(), 794);
        prices.insert("compute.g2.t4.c8m64".to_string(), 2_806);

        // Storage, priced per GB-hour
        prices.insert("storage.volume.ssd".to_string(), 4);
        prices.insert("storage.volume.hdd".to_string(), 2);

        // Network
        prices.insert("network.floating-ip".to_string(), 25);

        Self {
            prices,
            default_unit_price: DEFAULT_UNIT_PRICE,
        }
    }
}

impl PriceTable {
    /// Create a price table from an explicit catalog and fallback price.
    #[must_use]
    pub fn new(prices: HashMap<String, i64>, default_unit_price: i64) -> Self {
        Self {
            prices,
            default_unit_price,
        }
    }

    /// Add or replace the price for a single counter.
    #[must_use]
    pub fn with_price(mut self, counter_name: impl Into<String>, unit_price: i64) -> Self {
        self.prices.insert(counter_name.into(), unit_price);
        self
    }

    /// Look up the price for a counter, if the catalog knows it.
    #[must_use]
    pub fn lookup(&self, counter_name: &str) -> Option<i64> {
        self.prices.get(counter_name).copied()
    }

    /// Unit price for a counter, falling back to the default price for
    /// unknown counter names.
    #[must_use]
    pub fn unit_price(&self, counter_name: &str) -> i64 {
        self.lookup(counter_name)
            .unwrap_or(self.default_unit_price)
    }

    /// The fallback price applied to unknown counters.
    #[must_use]
    pub const fn default_unit_price(&self) -> i64 {
        self.default_unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_prices_known_counters() {
        let table = PriceTable::default();
        assert_eq!(table.unit_price("compute.c2.c8m8"), 397);
        assert_eq!(table.unit_price("storage.volume.ssd"), 4);
    }

    #[test]
    fn unknown_counter_falls_back_to_default() {
        let table = PriceTable::default();
        assert_eq!(table.lookup("compute.unknown"), None);
        assert_eq!(table.unit_price("compute.unknown"), DEFAULT_UNIT_PRICE);
    }

    #[test]
    fn with_price_overrides_catalog() {
        let table = PriceTable::default().with_price("compute.c2.c8m8", 400);
        assert_eq!(table.unit_price("compute.c2.c8m8"), 400);
    }

    #[test]
    fn custom_default_price() {
        let table = PriceTable::new(HashMap::new(), 7);
        assert_eq!(table.unit_price("anything"), 7);
        assert_eq!(table.default_unit_price(), 7);
    }
}
