//! Credit types for meterbill.
//!
//! Credits are pre-existing balances that offset the current period's charge.
//! The engine only reports how much of each credit *would* apply; it never
//! mutates the caller's balance store.

use serde::{Deserialize, Serialize};

/// A credit balance offered against one statement computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRecord {
    /// Origin of the credit.
    pub credit_type: CreditKind,

    /// Available balance in minor units. Must be non-negative.
    pub amount: i64,

    /// Campaign identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    /// Campaign display name, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,

    /// Redemption code the credit was issued under, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_code: Option<String>,
}

impl CreditRecord {
    /// Build the allocation outcome for this credit.
    ///
    /// `amount_applied` must not exceed the credit's balance; the remainder
    /// is reported back as the leftover the caller still holds.
    #[must_use]
    pub fn applied(&self, amount_applied: i64) -> AppliedCredit {
        AppliedCredit {
            credit_type: self.credit_type,
            amount_applied,
            remaining_balance: self.amount - amount_applied,
            campaign_id: self.campaign_id.clone(),
            campaign_name: self.campaign_name.clone(),
        }
    }
}

/// Origin of a credit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditKind {
    /// Granted free of charge.
    Free,

    /// Purchased by the customer.
    Paid,

    /// Issued by a promotional campaign.
    Promotional,
}

impl CreditKind {
    /// Get the credit kind as its wire string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Paid => "PAID",
            Self::Promotional => "PROMOTIONAL",
        }
    }
}

/// Allocation outcome for a single offered credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedCredit {
    /// Origin of the credit.
    pub credit_type: CreditKind,

    /// Portion of the credit consumed by this statement, in minor units.
    pub amount_applied: i64,

    /// Balance left on the credit after allocation, in minor units.
    pub remaining_balance: i64,

    /// Campaign identifier, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,

    /// Campaign display name, passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_splits_balance() {
        let credit = CreditRecord {
            credit_type: CreditKind::Promotional,
            amount: 5_000,
            campaign_id: Some("welcome-2024".to_string()),
            campaign_name: Some("Welcome credit".to_string()),
            credit_code: None,
        };

        let applied = credit.applied(3_573);
        assert_eq!(applied.amount_applied, 3_573);
        assert_eq!(applied.remaining_balance, 1_427);
        assert_eq!(applied.campaign_id.as_deref(), Some("welcome-2024"));
    }

    #[test]
    fn fully_unused_credit_keeps_balance() {
        let credit = CreditRecord {
            credit_type: CreditKind::Free,
            amount: 1_000,
            campaign_id: None,
            campaign_name: None,
            credit_code: None,
        };

        let applied = credit.applied(0);
        assert_eq!(applied.amount_applied, 0);
        assert_eq!(applied.remaining_balance, 1_000);
    }

    #[test]
    fn credit_kind_wire_values() {
        let json = serde_json::json!({ "creditType": "PROMOTIONAL", "amount": 500 });
        let credit: CreditRecord = serde_json::from_value(json).unwrap();
        assert_eq!(credit.credit_type, CreditKind::Promotional);
        assert_eq!(credit.credit_type.as_str(), "PROMOTIONAL");
    }
}
