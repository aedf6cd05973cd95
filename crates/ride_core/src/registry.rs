//! Ride registry: an append-only arena of rides indexed by [`RideId`].
//!
//! Rides are shared between a driver and a rider. Instead of shared
//! pointers, the registry owns every ride once and agents hold copyable
//! `RideId` handles into it.

use std::collections::HashMap;

use crate::ride::Ride;

/// Handle to a ride in a [`RideRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideId(usize);

impl RideId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns all rides for a scenario. Append-only; rides are immutable once
/// inserted. A duplicate `ride_id` is not rejected (no validation exists in
/// this model); it simply re-points the identifier lookup to the newer ride.
#[derive(Debug, Clone, Default)]
pub struct RideRegistry {
    rides: Vec<Ride>,
    by_ride_id: HashMap<String, RideId>,
}

impl RideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ride: Ride) -> RideId {
        let id = RideId(self.rides.len());
        self.by_ride_id.insert(ride.ride_id().to_owned(), id);
        self.rides.push(ride);
        id
    }

    pub fn get(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(id.0)
    }

    /// Look up a ride handle by its string identifier.
    pub fn lookup(&self, ride_id: &str) -> Option<RideId> {
        self.by_ride_id.get(ride_id).copied()
    }

    /// All rides with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RideId, &Ride)> {
        self.rides.iter().enumerate().map(|(i, r)| (RideId(i), r))
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Sum of all fares at full precision; round only when displaying.
    pub fn total_fare(&self) -> f64 {
        self.rides.iter().map(Ride::fare).sum()
    }
}
