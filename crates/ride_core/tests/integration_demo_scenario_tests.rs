use ride_core::pricing::RideClass;
use ride_core::scenario::build_demo_scenario;

#[test]
fn demo_fleet_is_two_standard_two_premium() {
    let scenario = build_demo_scenario();
    let classes: Vec<_> = scenario.registry.iter().map(|(_, r)| r.class()).collect();
    assert_eq!(
        classes,
        [
            RideClass::Standard,
            RideClass::Premium,
            RideClass::Standard,
            RideClass::Premium,
        ]
    );
}

#[test]
fn every_ride_is_assigned_to_driver_and_rider() {
    let scenario = build_demo_scenario();
    let all: Vec<_> = scenario.registry.iter().map(|(id, _)| id).collect();
    assert_eq!(scenario.driver.assigned(), all.as_slice());
    assert_eq!(scenario.rider.requested(), all.as_slice());
}

#[test]
fn demo_total_fare_matches_known_sum() {
    let scenario = build_demo_scenario();
    // 20.95 + 29.095 + 7.75 + 12.155
    let expected = 69.95;
    assert!((scenario.registry.total_fare() - expected).abs() < 1e-9);
    assert_eq!(format!("{:.2}", scenario.registry.total_fare()), "69.95");
}

#[test]
fn demo_rides_resolve_by_identifier() {
    let scenario = build_demo_scenario();
    for ride_id in ["R-1001", "R-1002", "R-1003", "R-1004"] {
        let handle = scenario.registry.lookup(ride_id).expect("known ride id");
        assert_eq!(scenario.registry.get(handle).expect("ride").ride_id(), ride_id);
    }
    assert!(scenario.registry.lookup("R-9999").is_none());
}

#[test]
fn demo_reports_render_expected_lines() {
    let scenario = build_demo_scenario();

    let report = scenario.driver.report(&scenario.registry);
    assert!(report.starts_with(
        "Driver: Alex Morgan (ID: D-42) | Rating: 4.9 | Completed Rides: 4"
    ));
    assert!(report.contains(
        "[StandardRide] RideID: R-1001 | From: Downtown | To: Airport | Distance: 12.3 mi | Fare: $20.95"
    ));
    assert!(report.contains(
        "[PremiumRide] RideID: R-1004 | From: Hotel | To: Conference Center | Distance: 2.2 mi | Fare: $12.16"
    ));

    let history = scenario.rider.history(&scenario.registry);
    assert!(history.starts_with("Rider: Jamie Lee (ID: U-77) Ride History:"));
    assert_eq!(history.lines().count(), 5);
}
