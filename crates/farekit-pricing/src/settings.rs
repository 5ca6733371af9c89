//! Pricing settings
//!
//! Defaults-plus-environment configuration for the standard fare and
//! checkout pipelines. Every value can be overridden with a `FAREKIT_`
//! prefixed environment variable; a `.env` file is honored when present.

use farekit_common::{FarekitError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Parameters for the standard pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Base fare per distance unit.
    pub base_rate_per_unit: Decimal,
    /// Multiplier applied during peak hours.
    pub peak_multiplier: Decimal,
    /// Scales congestion into a surcharge factor: `1 + level × coefficient`.
    pub traffic_coefficient: Decimal,
    /// Checkout discount percentage, in [0, 100].
    pub discount_percent: Decimal,
    /// Checkout tax rate.
    pub tax_rate: Decimal,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            base_rate_per_unit: dec!(50),
            peak_multiplier: dec!(1.5),
            traffic_coefficient: dec!(0.5),
            discount_percent: dec!(10),
            tax_rate: dec!(0.1),
        }
    }
}

impl PricingSettings {
    /// Load settings from the environment, falling back to defaults.
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Some(v) = decimal_env("FAREKIT_BASE_RATE_PER_UNIT") {
            cfg.base_rate_per_unit = v;
        }
        if let Some(v) = decimal_env("FAREKIT_PEAK_MULTIPLIER") {
            cfg.peak_multiplier = v;
        }
        if let Some(v) = decimal_env("FAREKIT_TRAFFIC_COEFFICIENT") {
            cfg.traffic_coefficient = v;
        }
        if let Some(v) = decimal_env("FAREKIT_DISCOUNT_PERCENT") {
            cfg.discount_percent = v;
        }
        if let Some(v) = decimal_env("FAREKIT_TAX_RATE") {
            cfg.tax_rate = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every value is in range for the stage it parameterizes.
    pub fn validate(&self) -> Result<()> {
        if self.base_rate_per_unit < Decimal::ZERO {
            return Err(FarekitError::Config(format!(
                "base rate per unit {} is negative",
                self.base_rate_per_unit
            )));
        }
        if self.peak_multiplier <= Decimal::ZERO {
            return Err(FarekitError::Config(format!(
                "peak multiplier {} must be positive",
                self.peak_multiplier
            )));
        }
        if self.traffic_coefficient < Decimal::ZERO {
            return Err(FarekitError::Config(format!(
                "traffic coefficient {} is negative",
                self.traffic_coefficient
            )));
        }
        if self.discount_percent < Decimal::ZERO || self.discount_percent > Decimal::ONE_HUNDRED {
            return Err(FarekitError::Config(format!(
                "discount percent {} outside [0, 100]",
                self.discount_percent
            )));
        }
        if self.tax_rate < Decimal::ZERO {
            return Err(FarekitError::Config(format!(
                "tax rate {} is negative",
                self.tax_rate
            )));
        }
        Ok(())
    }
}

fn decimal_env(key: &str) -> Option<Decimal> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
