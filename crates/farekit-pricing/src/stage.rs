//! Pricing stages
//!
//! A stage is a named, pure `quantity -> quantity` transform with its
//! parameters captured at construction time. The variant set is closed, so
//! pipeline composition stays exhaustively checkable.

use farekit_common::{GeoPoint, PricingError};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single pricing adjustment applied to a running quantity.
///
/// Stages are stateless beyond their construction-time parameters and never
/// observe pipeline-external state: a condition such as "is peak hour" is
/// sampled by the caller once, when the stage is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Base amount from trip distance: `input + rate × distance`.
    ///
    /// Distance is planar Euclidean in the caller's coordinate space,
    /// never geodesic.
    DistanceFare {
        rate_per_unit: Decimal,
        pickup: GeoPoint,
        dropoff: GeoPoint,
    },

    /// Unconditional multiplier. A factor of 1 is a no-op.
    PercentageSurcharge { factor: Decimal },

    /// Multiplier gated on a condition fixed at construction time.
    ConditionalSurcharge { active: bool, factor: Decimal },

    /// Reduces the quantity by `percent`%, with `percent` in `[0, 100]`.
    PercentageDiscount { percent: Decimal },

    /// Adds `quantity × rate`, i.e. returns `quantity × (1 + rate)`.
    FlatTax { rate: Decimal },
}

impl Stage {
    /// Distance-based base fare.
    ///
    /// Requires `rate_per_unit ≥ 0` and finite coordinates.
    pub fn distance_fare(
        rate_per_unit: Decimal,
        pickup: GeoPoint,
        dropoff: GeoPoint,
    ) -> Result<Self, PricingError> {
        if rate_per_unit < Decimal::ZERO {
            return Err(PricingError::InvalidParameter {
                stage: "distance_fare",
                reason: format!("rate per unit {rate_per_unit} is negative"),
            });
        }
        if !pickup.is_finite() || !dropoff.is_finite() {
            return Err(PricingError::InvalidParameter {
                stage: "distance_fare",
                reason: "coordinates must be finite".to_string(),
            });
        }
        Ok(Self::DistanceFare {
            rate_per_unit,
            pickup,
            dropoff,
        })
    }

    /// Unconditional surcharge. Requires `factor > 0`.
    pub fn percentage_surcharge(factor: Decimal) -> Result<Self, PricingError> {
        Self::check_factor("percentage_surcharge", factor)?;
        Ok(Self::PercentageSurcharge { factor })
    }

    /// Surcharge applied only when `active` is true. Requires `factor > 0`.
    ///
    /// Surge factors typically sit in the 1.0–3.0 range; the bound is left
    /// to the caller.
    pub fn conditional_surcharge(active: bool, factor: Decimal) -> Result<Self, PricingError> {
        Self::check_factor("conditional_surcharge", factor)?;
        Ok(Self::ConditionalSurcharge { active, factor })
    }

    /// Percentage discount. Requires `percent` in `[0, 100]`.
    pub fn percentage_discount(percent: Decimal) -> Result<Self, PricingError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(PricingError::InvalidParameter {
                stage: "percentage_discount",
                reason: format!("percent {percent} outside [0, 100]"),
            });
        }
        Ok(Self::PercentageDiscount { percent })
    }

    /// Proportional tax. Requires `rate ≥ 0`.
    pub fn flat_tax(rate: Decimal) -> Result<Self, PricingError> {
        if rate < Decimal::ZERO {
            return Err(PricingError::InvalidParameter {
                stage: "flat_tax",
                reason: format!("rate {rate} is negative"),
            });
        }
        Ok(Self::FlatTax { rate })
    }

    fn check_factor(stage: &'static str, factor: Decimal) -> Result<(), PricingError> {
        if factor <= Decimal::ZERO {
            return Err(PricingError::InvalidParameter {
                stage,
                reason: format!("factor {factor} must be positive"),
            });
        }
        Ok(())
    }

    /// Variant name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::DistanceFare { .. } => "distance_fare",
            Stage::PercentageSurcharge { .. } => "percentage_surcharge",
            Stage::ConditionalSurcharge { .. } => "conditional_surcharge",
            Stage::PercentageDiscount { .. } => "percentage_discount",
            Stage::FlatTax { .. } => "flat_tax",
        }
    }

    /// Apply this stage to a running quantity.
    ///
    /// Deterministic in `input` and the construction-time parameters.
    /// Rejects negative input; every variant maps a non-negative input to a
    /// non-negative output.
    pub fn apply(&self, input: Decimal) -> Result<Decimal, PricingError> {
        if input < Decimal::ZERO {
            return Err(PricingError::InvalidInput(format!("{input} is negative")));
        }
        match self {
            Stage::DistanceFare {
                rate_per_unit,
                pickup,
                dropoff,
            } => {
                let distance = Decimal::from_f64(pickup.distance_to(dropoff))
                    .ok_or_else(|| PricingError::InvalidInput("trip distance is not finite".to_string()))?;
                let base = rate_per_unit
                    .checked_mul(distance)
                    .ok_or(PricingError::Overflow)?;
                input.checked_add(base).ok_or(PricingError::Overflow)
            }
            Stage::PercentageSurcharge { factor } => {
                input.checked_mul(*factor).ok_or(PricingError::Overflow)
            }
            Stage::ConditionalSurcharge { active, factor } => {
                if *active {
                    input.checked_mul(*factor).ok_or(PricingError::Overflow)
                } else {
                    Ok(input)
                }
            }
            Stage::PercentageDiscount { percent } => {
                let off = input
                    .checked_mul(*percent)
                    .ok_or(PricingError::Overflow)?
                    / Decimal::ONE_HUNDRED;
                Ok(input - off)
            }
            Stage::FlatTax { rate } => {
                let tax = input.checked_mul(*rate).ok_or(PricingError::Overflow)?;
                input.checked_add(tax).ok_or(PricingError::Overflow)
            }
        }
    }
}
