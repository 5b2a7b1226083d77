//! Engine configuration.
//!
//! All rates and the pricing catalog are explicit values handed to the
//! engine at construction. There is no ambient or module-level
//! configuration, so tests and multi-tenant callers can run engines with
//! different rate tables side by side.

use meterbill_core::PriceTable;

/// Default VAT rate applied to the post-credit charge.
pub const DEFAULT_VAT_RATE: f64 = 0.10;

/// Default late-fee rate applied to an overdue unpaid balance.
pub const DEFAULT_LATE_FEE_RATE: f64 = 0.05;

/// Default statement currency.
pub const DEFAULT_CURRENCY: &str = "KRW";

/// Read-only configuration for a [`StatementEngine`](crate::StatementEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// VAT rate, e.g. `0.10` for 10%.
    pub vat_rate: f64,

    /// Late-fee rate on the unpaid balance when overdue, e.g. `0.05`.
    pub late_fee_rate: f64,

    /// Currency code stamped on statements.
    pub currency: String,

    /// Pricing catalog consulted by the usage aggregator.
    pub pricing: PriceTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            late_fee_rate: DEFAULT_LATE_FEE_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
            pricing: PriceTable::default(),
        }
    }
}

impl EngineConfig {
    /// Replace the VAT and late-fee rates.
    #[must_use]
    pub fn with_rates(mut self, vat_rate: f64, late_fee_rate: f64) -> Self {
        self.vat_rate = vat_rate;
        self.late_fee_rate = late_fee_rate;
        self
    }

    /// Replace the pricing catalog.
    #[must_use]
    pub fn with_pricing(mut self, pricing: PriceTable) -> Self {
        self.pricing = pricing;
        self
    }

    /// Replace the statement currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
