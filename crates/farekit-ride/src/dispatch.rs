//! In-memory dispatch
//!
//! Wires the roster, matching, fare assembly, and the ride table together,
//! and publishes ride events to subscribers in registration order.

use crate::fare::{fare_pipeline, RideConditions};
use crate::matching::nearest_driver;
use crate::party::User;
use crate::ride::Ride;
use farekit_common::{GeoPoint, Result, RideError};
use farekit_events::Notifier;
use farekit_pricing::PricingSettings;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{info, instrument};
use uuid::Uuid;

/// Published when a ride changes state.
#[derive(Debug, Clone, PartialEq)]
pub enum RideEvent {
    Assigned {
        ride_id: Uuid,
        driver_id: Uuid,
        fare: Decimal,
    },
    Completed {
        ride_id: Uuid,
        driver_id: Uuid,
        rating: u8,
    },
}

/// Roster, ride table, and event registry in one place.
pub struct Dispatch {
    settings: PricingSettings,
    users: HashMap<Uuid, User>,
    rides: HashMap<Uuid, Ride>,
    events: Notifier<RideEvent>,
}

impl Dispatch {
    pub fn new(settings: PricingSettings) -> Self {
        Self {
            settings,
            users: HashMap::new(),
            rides: HashMap::new(),
            events: Notifier::new(),
        }
    }

    pub fn register_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn ride(&self, id: Uuid) -> Option<&Ride> {
        self.rides.get(&id)
    }

    /// Subscribe/unsubscribe surface for ride events.
    pub fn events_mut(&mut self) -> &mut Notifier<RideEvent> {
        &mut self.events
    }

    /// Match the nearest driver, price the trip, and open the ride.
    ///
    /// The matched driver is marked busy until the ride completes.
    #[instrument(skip(self, conditions), fields(%passenger_id))]
    pub fn request_ride(
        &mut self,
        passenger_id: Uuid,
        dropoff: GeoPoint,
        conditions: RideConditions,
    ) -> Result<Uuid> {
        let passenger = self
            .users
            .get(&passenger_id)
            .ok_or(RideError::UnknownUser {
                user_id: passenger_id,
            })?;
        if passenger.as_passenger().is_none() {
            return Err(RideError::NotAPassenger {
                user_id: passenger_id,
            }
            .into());
        }
        let pickup = passenger.location;

        let driver_id = nearest_driver(pickup, self.users.values())
            .map(|driver| driver.id)
            .ok_or(RideError::NoDriverAvailable)?;

        let pipeline = fare_pipeline(&self.settings, conditions, pickup, dropoff)?;
        let mut ride = Ride::request(passenger_id, pickup, dropoff, &pipeline)?;
        ride.assign_driver(driver_id)?;

        if let Some(profile) = self.users.get_mut(&driver_id).and_then(User::as_driver_mut) {
            profile.available = false;
        }

        info!(ride_id = %ride.id, %driver_id, fare = %ride.fare, "ride assigned");
        self.events.notify(&RideEvent::Assigned {
            ride_id: ride.id,
            driver_id,
            fare: ride.fare,
        });

        let ride_id = ride.id;
        self.rides.insert(ride_id, ride);
        Ok(ride_id)
    }

    /// Complete a ride: rate the driver, free the vehicle, record history.
    #[instrument(skip(self), fields(%ride_id))]
    pub fn complete_ride(&mut self, ride_id: Uuid, rating: u8) -> Result<()> {
        let ride = self
            .rides
            .get_mut(&ride_id)
            .ok_or(RideError::RideNotFound { ride_id })?;
        ride.complete(rating)?;

        let driver_id = match ride.driver_id {
            Some(id) => id,
            None => return Err(RideError::NoDriverAssigned { ride_id }.into()),
        };
        let passenger_id = ride.passenger_id;

        if let Some(profile) = self.users.get_mut(&driver_id).and_then(User::as_driver_mut) {
            profile.record_rating(rating)?;
            profile.available = true;
        }
        if let Some(profile) = self
            .users
            .get_mut(&passenger_id)
            .and_then(User::as_passenger_mut)
        {
            profile.ride_history.push(ride_id);
        }

        info!(%driver_id, rating, "ride completed");
        self.events.notify(&RideEvent::Completed {
            ride_id,
            driver_id,
            rating,
        });
        Ok(())
    }
}
