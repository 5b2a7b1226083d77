//! Sequential credit allocation.

use meterbill_core::{AppliedCredit, CreditRecord};

/// Outcome of allocating credits against the pre-credit charge.
#[derive(Debug, Clone)]
pub struct CreditAllocation {
    /// Per-credit outcome, one entry per offered credit, in input order.
    pub applied: Vec<AppliedCredit>,

    /// Charge remaining after all credits.
    pub charge: i64,

    /// Total credit consumed: `charge_before_credit - charge`.
    pub credit_applied: i64,
}

/// Apply credits, in the order supplied, against the pre-credit charge.
///
/// A left-fold carrying the remaining charge: each credit applies
/// `min(credit.amount, remaining)`, and once the remainder reaches zero the
/// rest of the list is recorded as fully unused. Every offered credit gets
/// an outcome record so the caller sees an accounting of all of them.
///
/// The engine does not re-sort credits by type priority; a caller that
/// wants PROMOTIONAL credits consumed before FREE and PAID ones sorts the
/// list before calling.
#[must_use]
pub fn allocate_credits(credits: &[CreditRecord], charge_before_credit: i64) -> CreditAllocation {
    let mut remaining = charge_before_credit;
    let mut applied = Vec::with_capacity(credits.len());

    for credit in credits {
        let amount_applied = credit.amount.min(remaining);
        remaining -= amount_applied;
        applied.push(credit.applied(amount_applied));
    }

    CreditAllocation {
        applied,
        charge: remaining,
        credit_applied: charge_before_credit - remaining,
    }
}
