//! Usage record types for meterbill.
//!
//! Callers submit raw usage records per billing period; the engine prices
//! them into line items.

use serde::{Deserialize, Serialize};

/// A raw usage record submitted for pricing.
///
/// Records are created by the caller per request and never persisted by the
/// engine. Resource and project identifiers are opaque and passed through to
/// the resulting line item untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Counter name, the key into the pricing catalog.
    pub counter_name: String,

    /// How the counter accumulates. Informational only; pricing ignores it.
    pub counter_type: CounterKind,

    /// Unit label for display (e.g. "HOURS", "GB").
    pub counter_unit: String,

    /// Metered volume. Must be a non-negative finite number.
    pub counter_volume: f64,

    /// Opaque resource identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Opaque project identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl UsageRecord {
    /// Monetary amount of this record at the given unit price.
    ///
    /// Fractional minor units are floored.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn amount_at(&self, unit_price: i64) -> i64 {
        (self.counter_volume * unit_price as f64).floor() as i64
    }
}

/// How a usage counter accumulates over the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterKind {
    /// Per-interval increments summed over the period.
    Delta,

    /// Point-in-time readings.
    Gauge,

    /// A monotonically growing total.
    Cumulative,
}

impl CounterKind {
    /// Get the counter kind as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delta => "DELTA",
            Self::Gauge => "GAUGE",
            Self::Cumulative => "CUMULATIVE",
        }
    }
}

/// A priced usage line on the statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Counter name the price was looked up for.
    pub counter_name: String,

    /// Unit label carried from the usage record.
    pub counter_unit: String,

    /// Metered quantity.
    pub quantity: f64,

    /// Unit price applied, in minor units.
    pub unit_price: i64,

    /// `floor(quantity × unit_price)`, in minor units.
    pub amount: i64,

    /// Opaque resource identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    /// Opaque project identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
