//! Ride lifecycle
//!
//! A ride is priced once, at request time, and then moves
//! requested → assigned → completed. The fare never changes after request.

use crate::{MAX_RATING, MIN_RATING};
use farekit_common::{GeoPoint, Result, RideError};
use farekit_pricing::{FareQuote, PricingPipeline};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Assigned,
    Completed,
}

/// One trip from request to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: Uuid,
    pub passenger_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub pickup: GeoPoint,
    pub dropoff: GeoPoint,
    /// Final fare, fixed at request time.
    pub fare: Decimal,
    /// The full quote behind the fare, kept for auditability.
    pub quote: FareQuote,
    pub rating: Option<u8>,
    pub status: RideStatus,
    pub requested_at: i64,
}

impl Ride {
    /// Price the trip through `pipeline` and open the ride.
    pub fn request(
        passenger_id: Uuid,
        pickup: GeoPoint,
        dropoff: GeoPoint,
        pipeline: &PricingPipeline,
    ) -> Result<Self> {
        let quote = pipeline.quote(Decimal::ZERO)?;
        Ok(Self {
            id: Uuid::new_v4(),
            passenger_id,
            driver_id: None,
            pickup,
            dropoff,
            fare: quote.total,
            quote,
            rating: None,
            status: RideStatus::Requested,
            requested_at: chrono::Utc::now().timestamp_millis(),
        })
    }

    pub fn assign_driver(&mut self, driver_id: Uuid) -> Result<()> {
        if self.status == RideStatus::Completed {
            return Err(RideError::AlreadyCompleted { ride_id: self.id }.into());
        }
        self.driver_id = Some(driver_id);
        self.status = RideStatus::Assigned;
        Ok(())
    }

    /// Close the ride with a rating from 1 to 5.
    ///
    /// Requires an assigned driver: a ride nobody drove cannot be rated.
    pub fn complete(&mut self, rating: u8) -> Result<()> {
        if self.status == RideStatus::Completed {
            return Err(RideError::AlreadyCompleted { ride_id: self.id }.into());
        }
        if self.driver_id.is_none() {
            return Err(RideError::NoDriverAssigned { ride_id: self.id }.into());
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(RideError::InvalidRating { rating }.into());
        }
        self.rating = Some(rating);
        self.status = RideStatus::Completed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farekit_common::FarekitError;
    use farekit_pricing::Stage;
    use rust_decimal_macros::dec;

    fn flat_pipeline() -> PricingPipeline {
        PricingPipeline::builder()
            .stage(
                Stage::distance_fare(dec!(50), GeoPoint::new(0.0, 0.0), GeoPoint::new(3.0, 4.0))
                    .unwrap(),
            )
            .build()
            .unwrap()
    }

    fn open_ride() -> Ride {
        Ride::request(
            Uuid::new_v4(),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(3.0, 4.0),
            &flat_pipeline(),
        )
        .unwrap()
    }

    #[test]
    fn test_fare_fixed_at_request() {
        let ride = open_ride();
        assert_eq!(ride.fare, dec!(250));
        assert_eq!(ride.status, RideStatus::Requested);
        assert_eq!(ride.quote.total, ride.fare);
    }

    #[test]
    fn test_lifecycle() {
        let mut ride = open_ride();
        let driver_id = Uuid::new_v4();

        ride.assign_driver(driver_id).unwrap();
        assert_eq!(ride.status, RideStatus::Assigned);

        ride.complete(5).unwrap();
        assert_eq!(ride.status, RideStatus::Completed);
        assert_eq!(ride.rating, Some(5));
        assert_eq!(ride.driver_id, Some(driver_id));
    }

    #[test]
    fn test_complete_requires_driver() {
        let mut ride = open_ride();
        assert!(matches!(
            ride.complete(5),
            Err(FarekitError::Ride(RideError::NoDriverAssigned { .. }))
        ));
    }

    #[test]
    fn test_complete_twice_rejected() {
        let mut ride = open_ride();
        ride.assign_driver(Uuid::new_v4()).unwrap();
        ride.complete(4).unwrap();
        assert!(matches!(
            ride.complete(4),
            Err(FarekitError::Ride(RideError::AlreadyCompleted { .. }))
        ));
        assert!(matches!(
            ride.assign_driver(Uuid::new_v4()),
            Err(FarekitError::Ride(RideError::AlreadyCompleted { .. }))
        ));
    }

    #[test]
    fn test_rating_range_enforced() {
        let mut ride = open_ride();
        ride.assign_driver(Uuid::new_v4()).unwrap();
        assert!(matches!(
            ride.complete(0),
            Err(FarekitError::Ride(RideError::InvalidRating { rating: 0 }))
        ));
        assert!(matches!(
            ride.complete(6),
            Err(FarekitError::Ride(RideError::InvalidRating { rating: 6 }))
        ));
    }
}
