//! Core types for the meterbill statement engine.
//!
//! This crate provides the foundational types used throughout meterbill:
//!
//! - **Identifiers**: `StatementId`
//! - **Pricing**: `PriceTable`
//! - **Usage**: `UsageRecord`, `CounterKind`, `LineItem`
//! - **Credits**: `CreditRecord`, `CreditKind`, `AppliedCredit`
//! - **Adjustments**: `RawAdjustment`, `Adjustment`, `AppliedAdjustment`
//! - **Statements**: `BillingStatement`, `StatementStatus`
//!
//! # Monetary Unit
//!
//! All monetary amounts are integer minor currency units stored as `i64`
//! (whole won for the default `KRW` currency). Fractional results of rate
//! calculations are floored, never rounded up, so the computed charge can
//! never exceed what the rate implies.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adjustment;
pub mod credit;
pub mod error;
pub mod ids;
pub mod pricing;
pub mod statement;
pub mod usage;

pub use adjustment::{
    Adjustment, AdjustmentKind, AdjustmentLevel, AdjustmentMethod, AppliedAdjustment,
    RawAdjustment,
};
pub use credit::{AppliedCredit, CreditKind, CreditRecord};
pub use error::{BillingError, Result};
pub use ids::{IdError, StatementId};
pub use pricing::{PriceTable, DEFAULT_UNIT_PRICE};
pub use statement::{BillingStatement, StatementStatus};
pub use usage::{CounterKind, LineItem, UsageRecord};
