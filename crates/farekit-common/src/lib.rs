//! # Farekit Common
//!
//! Shared types and errors for the Farekit workspace.
//!
//! ## Core Types
//!
//! - [`GeoPoint`]: planar pickup/dropoff coordinates
//! - [`Describe`]: one-line rendering seam for record variants
//!
//! ## Errors
//!
//! - [`FarekitError`]: unified error type composing the domain errors
//! - [`PricingError`]: pipeline construction and evaluation failures
//! - [`RideError`]: ride lifecycle and matching failures
//! - [`CheckoutError`]: catalog and order failures

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{CheckoutError, FarekitError, PricingError, Result, RideError};
pub use types::{geo::GeoPoint, Describe};

/// Farekit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
