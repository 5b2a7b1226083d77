//! Statement assembly: the compute entry point.

use chrono::Utc;

use meterbill_core::{
    Adjustment, BillingError, BillingStatement, RawAdjustment, Result, StatementId,
    StatementStatus,
};

use crate::adjustment::{aggregate_adjustments, normalize_adjustment};
use crate::config::EngineConfig;
use crate::credit::allocate_credits;
use crate::request::StatementRequest;
use crate::usage::price_usage;

/// The statement calculation engine.
///
/// Holds only read-only configuration; every computation is an independent,
/// synchronous pass over its request, so one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct StatementEngine {
    config: EngineConfig,
}

impl StatementEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the billing statement for one request.
    ///
    /// Runs validation, usage pricing, adjustment aggregation, credit
    /// allocation, and assembly in order. The first validation failure
    /// aborts; no partial statement is ever produced.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Validation`] for invalid fields and
    /// [`BillingError::Calculation`] if the monetary totals overflow.
    pub fn compute(&self, request: &StatementRequest) -> Result<BillingStatement> {
        tracing::debug!(
            billing_group_id = %request.billing_group_id,
            month = %request.month(),
            usage_records = request.usage.len(),
            credits = request.credits.len(),
            adjustments = request.adjustments.len(),
            "computing statement"
        );

        request.validate()?;
        let adjustments = request
            .adjustments
            .iter()
            .map(normalize_adjustment)
            .collect::<Result<Vec<Adjustment>>>()?;

        let (line_items, subtotal) = price_usage(&self.config.pricing, &request.usage);
        let (applied_adjustments, adjustment_total) =
            aggregate_adjustments(&adjustments, subtotal);

        // Adjustments cannot drive the pre-credit charge negative
        let charge_before_credit = (subtotal + adjustment_total).max(0);
        let allocation = allocate_credits(&request.credits, charge_before_credit);

        let charge = allocation.charge;
        let vat = floor_at_rate(charge, self.config.vat_rate);
        let late_fee = if request.is_overdue {
            floor_at_rate(request.unpaid_amount, self.config.late_fee_rate)
        } else {
            0
        };

        let total_amount = charge
            .checked_add(vat)
            .and_then(|t| t.checked_add(request.unpaid_amount))
            .and_then(|t| t.checked_add(late_fee))
            .ok_or_else(|| BillingError::Calculation {
                reason: "total amount overflows i64".to_string(),
            })?;

        let statement = BillingStatement {
            statement_id: StatementId::generate(),
            uuid: request.uuid,
            billing_group_id: request.billing_group_id.clone(),
            month: request.month(),
            currency: self.config.currency.clone(),
            subtotal,
            adjustment_total,
            credit_applied: allocation.credit_applied,
            vat,
            unpaid_amount: request.unpaid_amount,
            late_fee,
            charge,
            total_amount,
            status: StatementStatus::Pending,
            line_items,
            applied_credits: allocation.applied,
            applied_adjustments,
            created_at: Utc::now(),
        };

        tracing::info!(
            statement_id = %statement.statement_id,
            billing_group_id = %statement.billing_group_id,
            charge = statement.charge,
            total_amount = statement.total_amount,
            "statement computed"
        );

        Ok(statement)
    }

    /// Normalize a single adjustment without running a full computation.
    ///
    /// Exposed separately so callers can pre-check adjustment shape, e.g.
    /// from a validation endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Validation`] naming the offending field and
    /// value.
    pub fn normalize_adjustment(&self, raw: &RawAdjustment) -> Result<Adjustment> {
        normalize_adjustment(raw)
    }
}

/// `floor(amount × rate)` in minor units.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn floor_at_rate(amount: i64, rate: f64) -> i64 {
    (amount as f64 * rate).floor() as i64
}
