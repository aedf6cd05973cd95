//! Scenario setup: the fixed demo fleet of four rides, one driver, one rider.

use crate::agents::{Driver, Rider};
use crate::pricing::RideClass;
use crate::registry::RideRegistry;
use crate::ride::Ride;

/// Everything the demo needs: the ride arena plus the two agents holding
/// handles into it.
#[derive(Debug, Clone)]
pub struct DemoScenario {
    pub registry: RideRegistry,
    pub driver: Driver,
    pub rider: Rider,
}

/// Build the demo scenario: two standard and two premium rides, all assigned
/// to a single driver and requested by a single rider. Fully deterministic,
/// no inputs.
pub fn build_demo_scenario() -> DemoScenario {
    let mut registry = RideRegistry::new();
    let rides = [
        Ride::new("R-1001", "Downtown", "Airport", 12.3, RideClass::Standard),
        Ride::new("R-1002", "Uptown", "Stadium", 7.8, RideClass::Premium),
        Ride::new("R-1003", "Campus", "Mall", 3.5, RideClass::Standard),
        Ride::new("R-1004", "Hotel", "Conference Center", 2.2, RideClass::Premium),
    ];

    let mut driver = Driver::new("D-42", "Alex Morgan", 4.9);
    let mut rider = Rider::new("U-77", "Jamie Lee");

    for ride in rides {
        let id = registry.insert(ride);
        driver.assign_ride(id);
        rider.request_ride(id);
    }

    DemoScenario {
        registry,
        driver,
        rider,
    }
}
