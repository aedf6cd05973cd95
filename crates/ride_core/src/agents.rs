//! Drivers and riders: agents holding append-only lists of ride handles.

use std::fmt::Write as _;

use crate::registry::{RideId, RideRegistry};

/// A driver with an ordered list of assigned rides. Rides are only ever
/// appended; assignment order is preserved in reports.
#[derive(Debug, Clone)]
pub struct Driver {
    driver_id: String,
    name: String,
    rating: f64,
    assigned: Vec<RideId>,
}

impl Driver {
    pub fn new(driver_id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            driver_id: driver_id.into(),
            name: name.into(),
            rating,
            assigned: Vec::new(),
        }
    }

    /// Append a ride to this driver's list. No validation, no dedup.
    pub fn assign_ride(&mut self, ride: RideId) {
        self.assigned.push(ride);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn assigned(&self) -> &[RideId] {
        &self.assigned
    }

    /// Multi-line report: header with name, id, rating and ride count,
    /// then each assigned ride's detail line in assignment order. Handles
    /// that don't resolve against `registry` are skipped.
    pub fn report(&self, registry: &RideRegistry) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Driver: {} (ID: {}) | Rating: {} | Completed Rides: {}",
            self.name,
            self.driver_id,
            self.rating,
            self.assigned.len()
        );
        for id in &self.assigned {
            if let Some(ride) = registry.get(*id) {
                let _ = writeln!(out, "{}", ride.details());
            }
        }
        out
    }
}

/// A rider with an ordered ride history, appended on each request.
#[derive(Debug, Clone)]
pub struct Rider {
    rider_id: String,
    name: String,
    requested: Vec<RideId>,
}

impl Rider {
    pub fn new(rider_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            rider_id: rider_id.into(),
            name: name.into(),
            requested: Vec::new(),
        }
    }

    /// Append a ride to this rider's history. No validation.
    pub fn request_ride(&mut self, ride: RideId) {
        self.requested.push(ride);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requested(&self) -> &[RideId] {
        &self.requested
    }

    /// Multi-line history: header with name and id, then each requested
    /// ride's detail line in request order.
    pub fn history(&self, registry: &RideRegistry) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Rider: {} (ID: {}) Ride History:", self.name, self.rider_id);
        for id in &self.requested {
            if let Some(ride) = registry.get(*id) {
                let _ = writeln!(out, "{}", ride.details());
            }
        }
        out
    }
}
