//! Error types for the Farekit workspace
//!
//! Provides a unified error type and domain-specific error variants

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias using FarekitError
pub type Result<T> = std::result::Result<T, FarekitError>;

/// Unified error type for Farekit operations
#[derive(Debug, Error)]
pub enum FarekitError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Ride errors
    #[error("Ride error: {0}")]
    Ride(#[from] RideError),

    // Checkout errors
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Pricing pipeline errors
///
/// Failures are synchronous and never retried: evaluation is deterministic,
/// so retrying without changing the input cannot succeed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// A quantity at an `apply`/`evaluate` boundary was negative, or a float
    /// conversion produced a non-finite value.
    #[error("invalid quantity: {0}")]
    InvalidInput(String),

    /// A stage was constructed with an out-of-range parameter.
    #[error("invalid parameter for {stage}: {reason}")]
    InvalidParameter {
        stage: &'static str,
        reason: String,
    },

    /// The call site requires at least one stage.
    #[error("pipeline requires at least one stage")]
    EmptyPipeline,

    /// A stage failed during evaluation, annotated with its position.
    #[error("stage {index} ({name}) failed: {source}")]
    StageFailed {
        index: usize,
        name: &'static str,
        #[source]
        source: Box<PricingError>,
    },

    #[error("pricing calculation overflow")]
    Overflow,
}

/// Ride lifecycle and matching errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RideError {
    #[error("no driver available near the pickup point")]
    NoDriverAvailable,

    #[error("ride {ride_id} has no assigned driver")]
    NoDriverAssigned { ride_id: Uuid },

    #[error("ride {ride_id} is already completed")]
    AlreadyCompleted { ride_id: Uuid },

    #[error("ride {ride_id} not found")]
    RideNotFound { ride_id: Uuid },

    #[error("user {user_id} not found")]
    UnknownUser { user_id: Uuid },

    #[error("user {user_id} is not a passenger")]
    NotAPassenger { user_id: Uuid },

    #[error("invalid rating {rating}: ratings range from 1 to 5")]
    InvalidRating { rating: u8 },

    #[error("traffic level {level} outside [0, 1]")]
    InvalidTrafficLevel { level: Decimal },
}

/// Catalog and order errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("product price {price} is negative")]
    NegativePrice { price: Decimal },

    #[error("cannot process an order with an empty cart")]
    EmptyCart,

    #[error("cart subtotal overflow")]
    SubtotalOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = PricingError::InvalidParameter {
            stage: "percentage_discount",
            reason: "percent 150 outside [0, 100]".to_string(),
        };
        assert!(err.to_string().contains("percentage_discount"));
        assert!(err.to_string().contains("150"));
    }

    #[test]
    fn test_stage_failure_carries_position() {
        let err = PricingError::StageFailed {
            index: 2,
            name: "flat_tax",
            source: Box::new(PricingError::Overflow),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("stage 2"));
        assert!(rendered.contains("flat_tax"));
    }

    #[test]
    fn test_unified_error_from_domain() {
        let err: FarekitError = CheckoutError::NegativePrice { price: dec!(-1) }.into();
        assert!(err.to_string().contains("Checkout error"));
    }
}
