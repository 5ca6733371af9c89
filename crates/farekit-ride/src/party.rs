//! Riders, drivers, and vehicles
//!
//! One record shape carries the fields every user shares; the role payload
//! holds what only one side needs. Dispatching goes through [`Describe`]
//! rather than downcasting.

use crate::{MAX_RATING, MIN_RATING};
use farekit_common::{Describe, GeoPoint, RideError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vehicle registered to a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub capacity: u8,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, capacity: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            make: make.into(),
            model: model.into(),
            capacity,
        }
    }
}

/// Role-specific payload for a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Driver(DriverProfile),
    Passenger(PassengerProfile),
}

/// What only drivers carry: a vehicle, availability, and ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub vehicle: Vehicle,
    pub available: bool,
    ratings: Vec<u8>,
}

impl DriverProfile {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            available: true,
            ratings: Vec::new(),
        }
    }

    /// Record a completed-ride rating, 1 to 5.
    pub fn record_rating(&mut self, rating: u8) -> Result<(), RideError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(RideError::InvalidRating { rating });
        }
        self.ratings.push(rating);
        Ok(())
    }

    /// Average of recorded ratings, 0.0 when unrated.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / self.ratings.len() as f64
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }
}

/// What only passengers carry: completed-ride history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassengerProfile {
    pub ride_history: Vec<Uuid>,
}

/// A person on the platform: shared fields plus a role payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub location: GeoPoint,
    pub role: UserRole,
}

impl User {
    pub fn driver(name: impl Into<String>, location: GeoPoint, vehicle: Vehicle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location,
            role: UserRole::Driver(DriverProfile::new(vehicle)),
        }
    }

    pub fn passenger(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location,
            role: UserRole::Passenger(PassengerProfile::default()),
        }
    }

    pub fn as_driver(&self) -> Option<&DriverProfile> {
        match &self.role {
            UserRole::Driver(profile) => Some(profile),
            UserRole::Passenger(_) => None,
        }
    }

    pub fn as_driver_mut(&mut self) -> Option<&mut DriverProfile> {
        match &mut self.role {
            UserRole::Driver(profile) => Some(profile),
            UserRole::Passenger(_) => None,
        }
    }

    pub fn as_passenger(&self) -> Option<&PassengerProfile> {
        match &self.role {
            UserRole::Passenger(profile) => Some(profile),
            UserRole::Driver(_) => None,
        }
    }

    pub fn as_passenger_mut(&mut self) -> Option<&mut PassengerProfile> {
        match &mut self.role {
            UserRole::Passenger(profile) => Some(profile),
            UserRole::Driver(_) => None,
        }
    }

    /// A driver with a free vehicle.
    pub fn is_available_driver(&self) -> bool {
        self.as_driver().is_some_and(|profile| profile.available)
    }
}

impl Describe for User {
    fn describe(&self) -> String {
        match &self.role {
            UserRole::Driver(profile) => format!(
                "driver {} in a {} {} (avg rating {:.2})",
                self.name,
                profile.vehicle.make,
                profile.vehicle.model,
                profile.average_rating()
            ),
            UserRole::Passenger(profile) => format!(
                "passenger {} with {} completed ride(s)",
                self.name,
                profile.ride_history.len()
            ),
        }
    }
}
