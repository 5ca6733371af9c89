//! End-to-end ride flow: roster, matching, surge pricing, completion

use farekit_common::GeoPoint;
use farekit_pricing::PricingSettings;
use farekit_ride::{Dispatch, RideConditions, RideEvent, User, Vehicle};
use rust_decimal_macros::dec;
use std::cell::RefCell;
use std::rc::Rc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init();
}

#[test]
fn surge_ride_from_request_to_completion() {
    init_tracing();

    let settings = PricingSettings {
        base_rate_per_unit: dec!(50),
        peak_multiplier: dec!(100),
        traffic_coefficient: dec!(0.5),
        ..Default::default()
    };
    let mut dispatch = Dispatch::new(settings);

    let alice = dispatch.register_user(User::driver(
        "Alice",
        GeoPoint::new(0.0, 0.0),
        Vehicle::new("Tesla", "Model 3", 4),
    ));
    let bob = dispatch.register_user(User::driver(
        "Bob",
        GeoPoint::new(8.0, 8.0),
        Vehicle::new("BMW", "X5", 4),
    ));
    let charlie = dispatch.register_user(User::passenger("Charlie", GeoPoint::new(0.0, 0.0)));

    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let log = Rc::clone(&log);
        dispatch.events_mut().subscribe(move |event: &RideEvent| {
            let line = match event {
                RideEvent::Assigned { fare, .. } => format!("assigned at {}", fare.normalize()),
                RideEvent::Completed { rating, .. } => format!("completed with {rating}"),
            };
            log.borrow_mut().push(line);
        });
    }

    // peak hour, heavy traffic
    let conditions = RideConditions::new(true, dec!(0.7)).unwrap();
    let ride_id = dispatch
        .request_ride(charlie, GeoPoint::new(3.0, 4.0), conditions)
        .unwrap();

    let ride = dispatch.ride(ride_id).unwrap();
    // distance 5 × 50 = 250, ×100 peak, ×1.35 traffic
    assert_eq!(ride.fare, dec!(33750));
    assert_eq!(ride.driver_id, Some(alice));
    assert_eq!(ride.quote.charges.len(), 3);

    // Bob stayed free, Alice is busy
    assert!(dispatch.user(bob).unwrap().is_available_driver());
    assert!(!dispatch.user(alice).unwrap().is_available_driver());

    dispatch.complete_ride(ride_id, 5).unwrap();

    let driver = dispatch.user(alice).unwrap();
    assert_eq!(driver.as_driver().unwrap().average_rating(), 5.0);
    assert!(driver.is_available_driver());

    assert_eq!(
        *log.borrow(),
        vec!["assigned at 33750", "completed with 5"]
    );
}

#[test]
fn off_peak_ride_prices_the_bare_distance() {
    init_tracing();

    let mut dispatch = Dispatch::new(PricingSettings::default());
    dispatch.register_user(User::driver(
        "Alice",
        GeoPoint::new(0.0, 0.0),
        Vehicle::new("Tesla", "Model 3", 4),
    ));
    let charlie = dispatch.register_user(User::passenger("Charlie", GeoPoint::new(0.0, 0.0)));

    let ride_id = dispatch
        .request_ride(charlie, GeoPoint::new(3.0, 4.0), RideConditions::calm())
        .unwrap();
    assert_eq!(dispatch.ride(ride_id).unwrap().fare, dec!(250));
}
