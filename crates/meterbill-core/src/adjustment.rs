//! Adjustment types for meterbill.
//!
//! Adjustments arrive in one of two wire shapes: a legacy shape using the
//! `adjustmentType`/`adjustmentValue` field names, and a modern shape using
//! `type`/`value`. Both normalize to the canonical [`Adjustment`] before any
//! arithmetic runs. The raw shape keeps enum-valued fields as loose strings
//! so an invalid value can be reported as a validation error naming the
//! field, instead of an opaque decode failure.

use serde::{Deserialize, Serialize};

/// An adjustment as received on the wire, either shape.
///
/// Presence of `adjustmentType` marks the legacy shape; otherwise the modern
/// `type`/`value` fields are read. Normalization lives in the engine crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdjustment {
    /// Legacy-shape adjustment type (`DISCOUNT` or `SURCHARGE`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,

    /// Legacy-shape numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_value: Option<f64>,

    /// Modern-shape adjustment type (`DISCOUNT` or `SURCHARGE`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Modern-shape numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Application method (`FIXED` or `RATE`), shared by both shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Free-text description, shared by both shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Application level (`BILLING_GROUP` or `PROJECT`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Target project for project-level adjustments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl RawAdjustment {
    /// Whether this record uses the legacy wire shape.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.adjustment_type.is_some()
    }
}

/// A validated, canonical adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// Whether the adjustment reduces or increases the charge.
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,

    /// How the monetary amount is derived from `value`.
    pub method: AdjustmentMethod,

    /// Fixed amount in minor units, or rate in percent, per `method`.
    pub value: f64,

    /// Free-text description.
    pub description: String,

    /// Application level.
    pub level: AdjustmentLevel,

    /// Target project for project-level adjustments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl Adjustment {
    /// Unsigned monetary amount of this adjustment against a subtotal.
    ///
    /// `FIXED` takes the value verbatim; `RATE` takes
    /// `floor(subtotal × value / 100)`. Fractional minor units are floored.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn amount_against(&self, subtotal: i64) -> i64 {
        match self.method {
            AdjustmentMethod::Fixed => self.value.floor() as i64,
            AdjustmentMethod::Rate => (subtotal as f64 * self.value / 100.0).floor() as i64,
        }
    }

    /// Signed monetary amount: negative for discounts, positive for
    /// surcharges.
    #[must_use]
    pub fn signed_amount(&self, subtotal: i64) -> i64 {
        let amount = self.amount_against(subtotal);
        match self.kind {
            AdjustmentKind::Discount => -amount,
            AdjustmentKind::Surcharge => amount,
        }
    }

    /// Build the per-record outcome reported back to the caller.
    ///
    /// The reported amount is the unsigned magnitude; callers recover the
    /// sign from the `type` tag.
    #[must_use]
    pub fn applied(&self, subtotal: i64) -> AppliedAdjustment {
        AppliedAdjustment {
            kind: self.kind,
            method: self.method,
            amount: self.amount_against(subtotal),
            description: self.description.clone(),
            level: self.level,
            project_id: self.project_id.clone(),
        }
    }
}

/// Direction of an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    /// Reduces the charge.
    Discount,

    /// Increases the charge.
    Surcharge,
}

impl AdjustmentKind {
    /// Get the adjustment kind as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Discount => "DISCOUNT",
            Self::Surcharge => "SURCHARGE",
        }
    }
}

/// How an adjustment's monetary amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentMethod {
    /// The value is the amount, in minor units.
    Fixed,

    /// The value is a percentage of the subtotal.
    Rate,
}

impl AdjustmentMethod {
    /// Get the adjustment method as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Rate => "RATE",
        }
    }
}

/// Scope an adjustment applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentLevel {
    /// The whole billing group.
    BillingGroup,

    /// A single project within the group.
    Project,
}

impl AdjustmentLevel {
    /// Get the adjustment level as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BillingGroup => "BILLING_GROUP",
            Self::Project => "PROJECT",
        }
    }
}

/// Outcome of one adjustment, reported back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAdjustment {
    /// Direction of the adjustment.
    #[serde(rename = "type")]
    pub kind: AdjustmentKind,

    /// Method the amount was derived with.
    pub method: AdjustmentMethod,

    /// Unsigned monetary amount in minor units.
    pub amount: i64,

    /// Description carried from the input record.
    pub description: String,

    /// Application level carried from the input record.
    pub level: AdjustmentLevel,

    /// Target project, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
