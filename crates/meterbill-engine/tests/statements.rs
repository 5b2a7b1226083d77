//! End-to-end statement computation scenarios.

use meterbill_core::{BillingError, BillingStatement, StatementStatus};
use meterbill_engine::{EngineConfig, StatementEngine, StatementRequest};
use serde_json::json;

fn compute(body: &serde_json::Value) -> Result<BillingStatement, BillingError> {
    let engine = StatementEngine::new(EngineConfig::default());
    let request = StatementRequest::from_json(&body.to_string())?;
    engine.compute(&request)
}

// ============================================================================
// Pure usage
// ============================================================================

#[test]
fn usage_only_statement() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 10.0,
            "resourceId": "vm-1234",
            "projectId": "proj-a"
        }]
    }))
    .unwrap();

    assert_eq!(statement.subtotal, 3_970);
    assert_eq!(statement.adjustment_total, 0);
    assert_eq!(statement.credit_applied, 0);
    assert_eq!(statement.charge, 3_970);
    assert_eq!(statement.vat, 397);
    assert_eq!(statement.total_amount, 4_367);
    assert_eq!(statement.status, StatementStatus::Pending);

    assert_eq!(statement.line_items.len(), 1);
    let line = &statement.line_items[0];
    assert_eq!(line.unit_price, 397);
    assert_eq!(line.amount, 3_970);
    assert_eq!(line.resource_id.as_deref(), Some("vm-1234"));
    assert_eq!(line.project_id.as_deref(), Some("proj-a"));
}

// ============================================================================
// Adjustments
// ============================================================================

#[test]
fn rate_discount_reduces_pre_credit_charge() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 10.0
        }],
        "adjustments": [{
            "type": "DISCOUNT",
            "value": 10.0,
            "method": "RATE",
            "description": "volume discount"
        }]
    }))
    .unwrap();

    assert_eq!(statement.subtotal, 3_970);
    assert_eq!(statement.adjustment_total, -397);
    assert_eq!(statement.charge, 3_573);

    let applied = &statement.applied_adjustments[0];
    assert_eq!(applied.amount, 397);
    assert_eq!(applied.description, "volume discount");
}

#[test]
fn legacy_adjustment_shape_normalizes_end_to_end() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 10.0
        }],
        "adjustments": [{
            "adjustmentType": "SURCHARGE",
            "adjustmentValue": 250.0,
            "method": "FIXED"
        }]
    }))
    .unwrap();

    assert_eq!(statement.adjustment_total, 250);
    assert_eq!(statement.charge, 4_220);
}

#[test]
fn invalid_adjustment_method_yields_validation_error() {
    let err = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "adjustments": [{
            "type": "DISCOUNT",
            "value": 10.0,
            "method": "PERCENT"
        }]
    }))
    .unwrap_err();

    match err {
        BillingError::Validation {
            field,
            value,
            constraint,
        } => {
            assert_eq!(field, "method");
            assert_eq!(value, "PERCENT");
            assert_eq!(constraint, "FIXED or RATE");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// Credits
// ============================================================================

#[test]
fn oversized_credit_zeroes_the_charge() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 10.0
        }],
        "adjustments": [{
            "type": "DISCOUNT",
            "value": 10.0,
            "method": "RATE"
        }],
        "credits": [{
            "creditType": "PROMOTIONAL",
            "amount": 5_000,
            "campaignId": "welcome-2024"
        }]
    }))
    .unwrap();

    assert_eq!(statement.credit_applied, 3_573);
    assert_eq!(statement.charge, 0);
    assert_eq!(statement.vat, 0);
    assert_eq!(statement.total_amount, 0);

    let applied = &statement.applied_credits[0];
    assert_eq!(applied.amount_applied, 3_573);
    assert_eq!(applied.remaining_balance, 1_427);
    assert_eq!(applied.campaign_id.as_deref(), Some("welcome-2024"));
}

#[test]
fn every_offered_credit_gets_an_accounting_entry() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "storage.volume.ssd",
            "counterType": "GAUGE",
            "counterUnit": "GB",
            "counterVolume": 100.0
        }],
        "credits": [
            { "creditType": "FREE", "amount": 400 },
            { "creditType": "PAID", "amount": 300 },
            { "creditType": "PROMOTIONAL", "amount": 200 }
        ]
    }))
    .unwrap();

    // subtotal 400: first credit absorbs it all, later ones untouched
    assert_eq!(statement.applied_credits.len(), 3);
    assert_eq!(statement.applied_credits[0].amount_applied, 400);
    assert_eq!(statement.applied_credits[1].amount_applied, 0);
    assert_eq!(statement.applied_credits[1].remaining_balance, 300);
    assert_eq!(statement.applied_credits[2].amount_applied, 0);
    assert_eq!(statement.applied_credits[2].remaining_balance, 200);
}

// ============================================================================
// Unpaid balance and late fee
// ============================================================================

#[test]
fn overdue_late_fee_joins_total_regardless_of_charge() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "unpaidAmount": 10_000,
        "isOverdue": true
    }))
    .unwrap();

    assert_eq!(statement.charge, 0);
    assert_eq!(statement.late_fee, 500);
    assert_eq!(statement.unpaid_amount, 10_000);
    assert_eq!(statement.total_amount, 10_500);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn unparseable_body_reports_malformed() {
    let err = StatementRequest::from_json("not even json").unwrap_err();
    assert!(matches!(err, BillingError::Malformed { .. }));
}

// ============================================================================
// Response shape
// ============================================================================

#[test]
fn response_payload_is_camel_case() {
    let statement = compute(&json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 1.0
        }]
    }))
    .unwrap();

    let body = serde_json::to_value(&statement).unwrap();
    assert!(body["statementId"].is_string());
    assert_eq!(body["billingGroupId"], "bg-001");
    assert_eq!(body["month"], "2024-05");
    assert_eq!(body["currency"], "KRW");
    assert_eq!(body["status"], "PENDING");
    assert_eq!(body["lineItems"][0]["counterName"], "compute.c2.c8m8");
    assert!(body["appliedCredits"].as_array().unwrap().is_empty());
    assert!(body["appliedAdjustments"].as_array().unwrap().is_empty());
}

#[test]
fn identical_requests_yield_identical_monetary_outputs() {
    let body = json!({
        "billingGroupId": "bg-001",
        "targetDate": "2024-05-01",
        "usage": [{
            "counterName": "compute.c2.c8m8",
            "counterType": "DELTA",
            "counterUnit": "HOURS",
            "counterVolume": 7.25
        }],
        "adjustments": [{
            "type": "SURCHARGE", "value": 3.0, "method": "RATE"
        }],
        "credits": [{ "creditType": "FREE", "amount": 1_000 }],
        "unpaidAmount": 2_500,
        "isOverdue": true
    });

    let first = compute(&body).unwrap();
    let second = compute(&body).unwrap();

    assert_eq!(first.subtotal, second.subtotal);
    assert_eq!(first.adjustment_total, second.adjustment_total);
    assert_eq!(first.credit_applied, second.credit_applied);
    assert_eq!(first.vat, second.vat);
    assert_eq!(first.late_fee, second.late_fee);
    assert_eq!(first.charge, second.charge);
    assert_eq!(first.total_amount, second.total_amount);
    // Only generated fields may differ
    assert_ne!(first.statement_id, second.statement_id);
}
