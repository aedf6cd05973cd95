//! Simple pricing system for calculating ride fares.

use serde::{Deserialize, Serialize};

/// Standard base fare in currency units (e.g., dollars).
pub const STANDARD_BASE_FARE: f64 = 2.50;

/// Standard per-mile rate in currency units.
pub const STANDARD_PER_MILE: f64 = 1.50;

/// Premium base fare in currency units.
pub const PREMIUM_BASE_FARE: f64 = 5.00;

/// Premium per-mile rate in currency units.
pub const PREMIUM_PER_MILE: f64 = 2.75;

/// Surcharge multiplier applied on top of the premium base + per-mile total.
pub const PREMIUM_SURCHARGE: f64 = 1.10;

/// Pricing policy of a ride. The two variants carry fixed fare constants;
/// there is no dynamic or surge pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideClass {
    Standard,
    Premium,
}

impl RideClass {
    /// Fixed starting charge added regardless of distance.
    pub fn base_fare(self) -> f64 {
        match self {
            RideClass::Standard => STANDARD_BASE_FARE,
            RideClass::Premium => PREMIUM_BASE_FARE,
        }
    }

    /// Marginal charge multiplied by trip distance.
    pub fn per_mile_rate(self) -> f64 {
        match self {
            RideClass::Standard => STANDARD_PER_MILE,
            RideClass::Premium => PREMIUM_PER_MILE,
        }
    }

    /// Display tag for detail lines and reports.
    pub fn label(self) -> &'static str {
        match self {
            RideClass::Standard => "StandardRide",
            RideClass::Premium => "PremiumRide",
        }
    }
}

/// Calculate the fare for a ride of the given class and distance.
///
/// Formula: `fare = base + (distance_mi * per_mile)`, with a 10% surcharge
/// on top for premium rides. Pure function; `distance_mi` is trusted
/// non-negative.
pub fn calculate_fare(class: RideClass, distance_mi: f64) -> f64 {
    debug_assert!(distance_mi >= 0.0, "distance must be non-negative");
    let raw = class.base_fare() + (distance_mi * class.per_mile_rate());
    match class {
        RideClass::Standard => raw,
        RideClass::Premium => raw * PREMIUM_SURCHARGE,
    }
}
