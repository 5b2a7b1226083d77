//! Statement types for meterbill.
//!
//! The billing statement is the final output document of one computation. It
//! has no lifecycle inside the engine: status transitions beyond `PENDING`
//! belong to the external payment component.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adjustment::AppliedAdjustment;
use crate::credit::AppliedCredit;
use crate::ids::StatementId;
use crate::usage::LineItem;

/// The computed billing statement for one billing group and period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingStatement {
    /// Freshly generated, time-ordered statement identifier.
    pub statement_id: StatementId,

    /// Caller-supplied correlation id, echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,

    /// Billing group the statement was computed for.
    pub billing_group_id: String,

    /// Billing month in `YYYY-MM` form.
    pub month: String,

    /// Currency of all monetary fields.
    pub currency: String,

    /// Sum of all line item amounts.
    pub subtotal: i64,

    /// Signed adjustment total: surcharges minus discounts.
    pub adjustment_total: i64,

    /// Total credit consumed by this statement. Always non-negative.
    pub credit_applied: i64,

    /// VAT on the post-credit charge.
    pub vat: i64,

    /// Unpaid balance carried over from prior periods.
    pub unpaid_amount: i64,

    /// Late fee on the unpaid balance, zero unless overdue.
    pub late_fee: i64,

    /// Current-period charge after adjustments and credits.
    pub charge: i64,

    /// `charge + vat + unpaid_amount + late_fee`.
    pub total_amount: i64,

    /// Always `PENDING`; later transitions are the payment component's job.
    pub status: StatementStatus,

    /// Priced usage lines.
    pub line_items: Vec<LineItem>,

    /// Allocation outcome per offered credit, in input order.
    pub applied_credits: Vec<AppliedCredit>,

    /// Outcome per adjustment, in input order.
    pub applied_adjustments: Vec<AppliedAdjustment>,

    /// When the statement was computed.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a statement.
///
/// The engine emits `Pending` on every computation; the remaining variants
/// exist for collaborators that track the statement afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementStatus {
    /// Computed, awaiting payment.
    Pending,

    /// Settled by the payment component.
    Paid,

    /// Past its due date without payment.
    Overdue,

    /// Voided.
    Cancelled,
}

impl StatementStatus {
    /// Get the status as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
            Self::Cancelled => "CANCELLED",
        }
    }
}
