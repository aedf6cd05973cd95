//! The ride record: identity, trip attributes, and its detail line.

use serde::{Deserialize, Serialize};

use crate::pricing::{calculate_fare, RideClass};

/// One ride, created with final values and never mutated. Identity is the
/// `ride_id` string; uniqueness is by convention, not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    ride_id: String,
    pickup: String,
    dropoff: String,
    distance_mi: f64,
    class: RideClass,
}

impl Ride {
    pub fn new(
        ride_id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_mi: f64,
        class: RideClass,
    ) -> Self {
        debug_assert!(distance_mi >= 0.0, "distance must be non-negative");
        Self {
            ride_id: ride_id.into(),
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_mi,
            class,
        }
    }

    /// Fare for this ride, per the class pricing policy. Full precision;
    /// rounding happens only at display time.
    pub fn fare(&self) -> f64 {
        calculate_fare(self.class, self.distance_mi)
    }

    /// One-line human-readable summary, fare formatted to two decimals.
    pub fn details(&self) -> String {
        format!(
            "[{}] RideID: {} | From: {} | To: {} | Distance: {} mi | Fare: ${:.2}",
            self.class.label(),
            self.ride_id,
            self.pickup,
            self.dropoff,
            self.distance_mi,
            self.fare(),
        )
    }

    pub fn ride_id(&self) -> &str {
        &self.ride_id
    }

    pub fn distance_mi(&self) -> f64 {
        self.distance_mi
    }

    pub fn class(&self) -> RideClass {
        self.class
    }
}
