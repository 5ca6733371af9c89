//! Quotes and per-stage breakdowns
//!
//! A quote freezes the result of one pipeline evaluation together with a
//! per-stage breakdown and a validity window, for callers that present or
//! audit the price later.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The quantity before and after one stage of an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageCharge {
    /// Stage position in the pipeline.
    pub index: usize,
    /// Stage variant name.
    pub stage: String,
    pub amount_in: Decimal,
    pub amount_out: Decimal,
}

impl StageCharge {
    /// Amount this stage added (or, for a discount, removed).
    pub fn delta(&self) -> Decimal {
        self.amount_out - self.amount_in
    }
}

/// A priced result with breakdown and expiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub quote_id: Uuid,
    /// Quantity the evaluation started from.
    pub initial: Decimal,
    /// Final accumulated quantity.
    pub total: Decimal,
    /// Per-stage amounts, in evaluation order.
    pub charges: Vec<StageCharge>,
    /// Unix milliseconds at computation.
    pub computed_at: i64,
    /// Validity window in milliseconds.
    pub valid_for_ms: u64,
    /// Expiration timestamp.
    pub expires_at: i64,
}

impl FareQuote {
    /// Default quote validity period (5 minutes)
    pub const DEFAULT_VALIDITY_MS: u64 = 5 * 60 * 1000;

    pub(crate) fn new(initial: Decimal, total: Decimal, charges: Vec<StageCharge>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            quote_id: Uuid::new_v4(),
            initial,
            total,
            charges,
            computed_at: now,
            valid_for_ms: Self::DEFAULT_VALIDITY_MS,
            expires_at: now + Self::DEFAULT_VALIDITY_MS as i64,
        }
    }

    /// Check if the quote is still valid
    pub fn is_valid(&self) -> bool {
        chrono::Utc::now().timestamp_millis() < self.expires_at
    }

    /// Total surcharge over the starting quantity.
    pub fn total_adjustment(&self) -> Decimal {
        self.total - self.initial
    }
}
