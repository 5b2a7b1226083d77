//! Deterministic billing statement calculation engine.
//!
//! The engine turns one request — raw usage records, offered credits, and
//! manual adjustments for a single billing group and period — into a priced
//! [`BillingStatement`](meterbill_core::BillingStatement). It is a pure,
//! synchronous function of its inputs plus read-only configuration: no I/O,
//! no retries, no state retained across calls. Aside from the generated
//! statement id and timestamp, identical requests always produce identical
//! monetary outputs.
//!
//! Data flows strictly forward through five stages:
//!
//! 1. pricing catalog lookup ([`meterbill_core::PriceTable`])
//! 2. usage aggregation ([`usage::price_usage`])
//! 3. adjustment normalization and aggregation ([`adjustment`])
//! 4. sequential credit allocation ([`credit::allocate_credits`])
//! 5. statement assembly ([`StatementEngine::compute`])
//!
//! # Example
//!
//! ```
//! use meterbill_engine::{EngineConfig, StatementEngine, StatementRequest};
//!
//! let engine = StatementEngine::new(EngineConfig::default());
//! let request = StatementRequest::from_json(
//!     r#"{
//!         "billingGroupId": "bg-001",
//!         "targetDate": "2024-05-01",
//!         "usage": [{
//!             "counterName": "compute.c2.c8m8",
//!             "counterType": "DELTA",
//!             "counterUnit": "HOURS",
//!             "counterVolume": 10.0
//!         }]
//!     }"#,
//! )?;
//!
//! let statement = engine.compute(&request)?;
//! assert_eq!(statement.subtotal, 3_970);
//! assert_eq!(statement.total_amount, 4_367);
//! # Ok::<(), meterbill_core::BillingError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adjustment;
pub mod compute;
pub mod config;
pub mod credit;
pub mod request;
pub mod usage;

pub use adjustment::{aggregate_adjustments, normalize_adjustment};
pub use compute::StatementEngine;
pub use config::{EngineConfig, DEFAULT_CURRENCY, DEFAULT_LATE_FEE_RATE, DEFAULT_VAT_RATE};
pub use credit::{allocate_credits, CreditAllocation};
pub use request::StatementRequest;
pub use usage::price_usage;
