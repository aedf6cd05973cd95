//! Test helpers for common test setup and utilities.
//!
//! This module provides shared test utilities to reduce duplication across test files.

use crate::agents::{Driver, Rider};
use crate::pricing::RideClass;
use crate::registry::{RideId, RideRegistry};
use crate::ride::Ride;

/// A standard-class test ride with a round-number distance.
pub fn test_standard_ride(ride_id: &str, distance_mi: f64) -> Ride {
    Ride::new(ride_id, "Downtown", "Airport", distance_mi, RideClass::Standard)
}

/// A premium-class test ride with a round-number distance.
pub fn test_premium_ride(ride_id: &str, distance_mi: f64) -> Ride {
    Ride::new(ride_id, "Uptown", "Stadium", distance_mi, RideClass::Premium)
}

/// Registry pre-filled with `n` standard rides of 1 mi each, plus the
/// handles in insertion order.
pub fn registry_with_standard_rides(n: usize) -> (RideRegistry, Vec<RideId>) {
    let mut registry = RideRegistry::new();
    let ids = (0..n)
        .map(|i| registry.insert(test_standard_ride(&format!("R-{i}"), 1.0)))
        .collect();
    (registry, ids)
}

/// A driver with a fixed id, name and rating for report assertions.
pub fn test_driver() -> Driver {
    Driver::new("D-42", "Alex Morgan", 4.9)
}

/// A rider with a fixed id and name for history assertions.
pub fn test_rider() -> Rider {
    Rider::new("U-77", "Jamie Lee")
}
