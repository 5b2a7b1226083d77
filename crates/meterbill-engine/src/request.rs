//! Statement computation request payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meterbill_core::{BillingError, CreditRecord, RawAdjustment, Result, UsageRecord};

/// Everything the engine consumes for one statement computation.
///
/// Collections default to empty and the unpaid/overdue fields default to
/// zero/false, so a minimal request is just a billing group and a target
/// date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRequest {
    /// Caller correlation id. Echoed into the statement, not used in
    /// arithmetic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,

    /// Billing group to compute for.
    pub billing_group_id: String,

    /// Any date inside the billing period; the statement month derives from
    /// it.
    pub target_date: NaiveDate,

    /// Raw usage records to price.
    #[serde(default)]
    pub usage: Vec<UsageRecord>,

    /// Credits offered against the charge, applied in this order.
    #[serde(default)]
    pub credits: Vec<CreditRecord>,

    /// Adjustments in either wire shape.
    #[serde(default)]
    pub adjustments: Vec<RawAdjustment>,

    /// Unpaid balance carried over from prior periods, in minor units.
    #[serde(default)]
    pub unpaid_amount: i64,

    /// Whether the unpaid balance is overdue and accrues a late fee.
    #[serde(default)]
    pub is_overdue: bool,
}

impl StatementRequest {
    /// Parse a request from a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Malformed`] when the body cannot be parsed
    /// into the expected shape at all.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| BillingError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Billing month of the target date, `YYYY-MM`.
    #[must_use]
    pub fn month(&self) -> String {
        self.target_date.format("%Y-%m").to_string()
    }

    /// Run the field-level checks that must pass before any arithmetic.
    ///
    /// The first failure aborts; no partial computation happens with the
    /// remaining valid records.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::Validation`] naming the offending field and
    /// the value received.
    pub fn validate(&self) -> Result<()> {
        for record in &self.usage {
            if !record.counter_volume.is_finite() || record.counter_volume < 0.0 {
                return Err(BillingError::validation(
                    "counterVolume",
                    record.counter_volume,
                    "a non-negative finite number",
                ));
            }
        }

        for credit in &self.credits {
            if credit.amount < 0 {
                return Err(BillingError::validation(
                    "amount",
                    credit.amount,
                    "a non-negative credit amount",
                ));
            }
        }

        if self.unpaid_amount < 0 {
            return Err(BillingError::validation(
                "unpaidAmount",
                self.unpaid_amount,
                "a non-negative amount",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meterbill_core::{CounterKind, CreditKind};

    fn minimal() -> StatementRequest {
        StatementRequest::from_json(
            r#"{ "billingGroupId": "bg-001", "targetDate": "2024-05-01" }"#,
        )
        .unwrap()
    }

    #[test]
    fn minimal_request_defaults() {
        let request = minimal();
        assert_eq!(request.billing_group_id, "bg-001");
        assert_eq!(request.month(), "2024-05");
        assert!(request.usage.is_empty());
        assert!(request.credits.is_empty());
        assert!(request.adjustments.is_empty());
        assert_eq!(request.unpaid_amount, 0);
        assert!(!request.is_overdue);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let err = StatementRequest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BillingError::Malformed { .. }));
    }

    #[test]
    fn missing_billing_group_is_malformed() {
        let err = StatementRequest::from_json(r#"{ "targetDate": "2024-05-01" }"#).unwrap_err();
        assert!(matches!(err, BillingError::Malformed { .. }));
    }

    #[test]
    fn negative_volume_fails_validation() {
        let mut request = minimal();
        request.usage.push(UsageRecord {
            counter_name: "compute.c2.c8m8".to_string(),
            counter_type: CounterKind::Delta,
            counter_unit: "HOURS".to_string(),
            counter_volume: -1.0,
            resource_id: None,
            project_id: None,
        });

        let err = request.validate().unwrap_err();
        match err {
            BillingError::Validation { field, value, .. } => {
                assert_eq!(field, "counterVolume");
                assert_eq!(value, "-1");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_volume_fails_validation() {
        let mut request = minimal();
        request.usage.push(UsageRecord {
            counter_name: "compute.c2.c8m8".to_string(),
            counter_type: CounterKind::Gauge,
            counter_unit: "HOURS".to_string(),
            counter_volume: f64::NAN,
            resource_id: None,
            project_id: None,
        });
        assert!(matches!(
            request.validate(),
            Err(BillingError::Validation { .. })
        ));
    }

    #[test]
    fn negative_credit_amount_fails_validation() {
        let mut request = minimal();
        request.credits.push(CreditRecord {
            credit_type: CreditKind::Paid,
            amount: -500,
            campaign_id: None,
            campaign_name: None,
            credit_code: None,
        });

        let err = request.validate().unwrap_err();
        match err {
            BillingError::Validation { field, .. } => assert_eq!(field, "amount"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn negative_unpaid_amount_fails_validation() {
        let mut request = minimal();
        request.unpaid_amount = -1;
        assert!(matches!(
            request.validate(),
            Err(BillingError::Validation { field, .. }) if field == "unpaidAmount"
        ));
    }
}
