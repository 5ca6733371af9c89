//! Standard fare pipeline assembly
//!
//! Stage order follows the fare model: base distance fare, then the peak
//! surcharge, then the traffic surcharge. Conditions are sampled once, when
//! the pipeline is assembled — a pipeline built at peak stays a peak
//! pipeline for every evaluation.

use farekit_common::{GeoPoint, PricingError, Result, RideError};
use farekit_pricing::{PricingPipeline, PricingSettings, Stage};
use rust_decimal::Decimal;

/// Trip conditions fixed at assembly time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideConditions {
    /// Whether the trip is requested during peak hours.
    pub peak: bool,
    /// Congestion from 0 (free flow) to 1 (gridlock).
    pub traffic_level: Decimal,
}

impl RideConditions {
    pub fn new(peak: bool, traffic_level: Decimal) -> Result<Self> {
        if traffic_level < Decimal::ZERO || traffic_level > Decimal::ONE {
            return Err(RideError::InvalidTrafficLevel {
                level: traffic_level,
            }
            .into());
        }
        Ok(Self {
            peak,
            traffic_level,
        })
    }

    /// Off-peak, empty roads.
    pub fn calm() -> Self {
        Self {
            peak: false,
            traffic_level: Decimal::ZERO,
        }
    }
}

/// Build the standard fare pipeline for one trip.
///
/// A fare needs at least its base stage, so this uses the non-empty build
/// policy.
pub fn fare_pipeline(
    settings: &PricingSettings,
    conditions: RideConditions,
    pickup: GeoPoint,
    dropoff: GeoPoint,
) -> Result<PricingPipeline> {
    let traffic_factor = conditions
        .traffic_level
        .checked_mul(settings.traffic_coefficient)
        .and_then(|surcharge| Decimal::ONE.checked_add(surcharge))
        .ok_or(PricingError::Overflow)?;
    let pipeline = PricingPipeline::builder()
        .stage(Stage::distance_fare(
            settings.base_rate_per_unit,
            pickup,
            dropoff,
        )?)
        .stage(Stage::conditional_surcharge(
            conditions.peak,
            settings.peak_multiplier,
        )?)
        .stage(Stage::percentage_surcharge(traffic_factor)?)
        .build()?;
    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_traffic_level_bounds() {
        assert!(RideConditions::new(false, dec!(0)).is_ok());
        assert!(RideConditions::new(true, dec!(1)).is_ok());
        assert!(RideConditions::new(true, dec!(1.1)).is_err());
        assert!(RideConditions::new(false, dec!(-0.2)).is_err());
    }

    #[test]
    fn test_calm_conditions_price_the_bare_distance() {
        let settings = PricingSettings::default();
        let pipeline = fare_pipeline(
            &settings,
            RideConditions::calm(),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 4.0),
        )
        .unwrap();
        // distance 5 × rate 50; no surge, traffic factor 1
        assert_eq!(pipeline.evaluate(dec!(0)).unwrap(), dec!(250));
    }

    #[test]
    fn test_peak_and_traffic_stack_in_order() {
        let settings = PricingSettings {
            base_rate_per_unit: dec!(50),
            peak_multiplier: dec!(100),
            traffic_coefficient: dec!(0.5),
            ..Default::default()
        };
        let conditions = RideConditions::new(true, dec!(0.7)).unwrap();
        let pipeline = fare_pipeline(
            &settings,
            conditions,
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 4.0),
        )
        .unwrap();
        // 250 → ×100 → ×1.35
        assert_eq!(pipeline.evaluate(dec!(0)).unwrap(), dec!(33750));
    }
}
