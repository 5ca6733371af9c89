//! Shared types
//!
//! - [`geo::GeoPoint`]: planar coordinates for pickups, dropoffs, and drivers
//! - [`Describe`]: single dispatch point for rendering record variants

pub mod geo;

/// Render a one-line, human-readable description of a record variant.
///
/// Implemented by types that carry a variant tag plus variant-specific
/// payload (products, users, payment methods), so callers dispatch through
/// one operation instead of downcasting.
pub trait Describe {
    fn describe(&self) -> String;
}
