//! Adjustment normalization and aggregation.
//!
//! Normalization maps both wire shapes to the canonical
//! [`Adjustment`](meterbill_core::Adjustment) and rejects invalid records
//! with errors naming the offending field as it appeared on the wire.
//! Aggregation is an order-invariant signed sum over independent records.

use meterbill_core::{
    Adjustment, AdjustmentKind, AdjustmentLevel, AdjustmentMethod, AppliedAdjustment,
    BillingError, RawAdjustment, Result,
};

/// Value rendered into validation errors for absent required fields.
const MISSING: &str = "<missing>";

/// Normalize a raw adjustment of either wire shape to the canonical record.
///
/// Shape detection: a record carrying the legacy `adjustmentType` field is
/// read as the legacy shape, everything else as the modern `type`/`value`
/// shape. Error messages name the field of the shape actually used.
///
/// A missing `level` defaults to `BILLING_GROUP`; a present-but-unknown
/// level string fails like any other enum field.
///
/// # Errors
///
/// Returns [`BillingError::Validation`] naming the offending field and the
/// value received for: an unknown type/method/level string, a missing type,
/// method, or value, and a non-finite value.
pub fn normalize_adjustment(raw: &RawAdjustment) -> Result<Adjustment> {
    let legacy = raw.is_legacy();

    let (kind_field, kind_value) = if legacy {
        ("adjustmentType", raw.adjustment_type.as_deref())
    } else {
        ("type", raw.kind.as_deref())
    };
    let kind = match kind_value {
        Some("DISCOUNT") => AdjustmentKind::Discount,
        Some("SURCHARGE") => AdjustmentKind::Surcharge,
        Some(other) => {
            return Err(BillingError::validation(
                kind_field,
                other,
                "DISCOUNT or SURCHARGE",
            ))
        }
        None => {
            return Err(BillingError::validation(
                kind_field,
                MISSING,
                "DISCOUNT or SURCHARGE",
            ))
        }
    };

    let method = match raw.method.as_deref() {
        Some("FIXED") => AdjustmentMethod::Fixed,
        Some("RATE") => AdjustmentMethod::Rate,
        Some(other) => return Err(BillingError::validation("method", other, "FIXED or RATE")),
        None => return Err(BillingError::validation("method", MISSING, "FIXED or RATE")),
    };

    let (value_field, value) = if legacy {
        ("adjustmentValue", raw.adjustment_value)
    } else {
        ("value", raw.value)
    };
    let value = match value {
        Some(v) if v.is_finite() => v,
        Some(v) => return Err(BillingError::validation(value_field, v, "a finite number")),
        None => return Err(BillingError::validation(value_field, MISSING, "a finite number")),
    };

    let level = match raw.level.as_deref() {
        None | Some("BILLING_GROUP") => AdjustmentLevel::BillingGroup,
        Some("PROJECT") => AdjustmentLevel::Project,
        Some(other) => {
            return Err(BillingError::validation(
                "level",
                other,
                "BILLING_GROUP or PROJECT",
            ))
        }
    };

    Ok(Adjustment {
        kind,
        method,
        value,
        description: raw.description.clone().unwrap_or_default(),
        level,
        project_id: raw.project_id.clone(),
    })
}

/// Compute each adjustment's monetary effect and the signed total.
///
/// Adjustments are independent of one another, so the total is an
/// order-invariant sum: surcharges add, discounts subtract. The per-record
/// amounts reported back are unsigned magnitudes.
#[must_use]
pub fn aggregate_adjustments(
    adjustments: &[Adjustment],
    subtotal: i64,
) -> (Vec<AppliedAdjustment>, i64) {
    let mut applied = Vec::with_capacity(adjustments.len());
    let mut adjustment_total = 0i64;

    for adjustment in adjustments {
        adjustment_total += adjustment.signed_amount(subtotal);
        applied.push(adjustment.applied(subtotal));
    }

    (applied, adjustment_total)
}
