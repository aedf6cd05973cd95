//! Run the fixed demo fleet and print ride details, fare totals, and the
//! driver/rider reports.
//!
//! Run with: cargo run -p ride_core --example demo_run

use ride_core::scenario::build_demo_scenario;

fn main() {
    println!("=== Ride Sharing System Demo ===");

    let scenario = build_demo_scenario();

    println!("\n-- Ride details and fares --");
    let mut total = 0.0;
    for (_, ride) in scenario.registry.iter() {
        println!("{}", ride.details());
        total += ride.fare();
    }
    println!("Total fares (all rides): ${total:.2}\n");

    print!("{}", scenario.driver.report(&scenario.registry));
    println!();
    print!("{}", scenario.rider.history(&scenario.registry));

    println!("\n=== End Demo ===");
}
