//! Serializing and deserializing quantities.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use dimq::{kilonewtons, meters, seconds, Force, Length, Velocity};
    use serde::{Deserialize, Serialize};

    println!("=== Plain serialization ===");
    let distance = meters(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("{} -> {}", distance, json);

    let restored: Length = serde_json::from_str(&json).unwrap();
    println!("{} -> {}", json, restored);
    println!();

    println!("=== Keeping the unit ===");

    #[derive(Serialize, Deserialize, Debug)]
    struct Probe {
        #[serde(with = "dimq::serde_with_unit")]
        cruise: Velocity,
        #[serde(with = "dimq::serde_with_unit")]
        max_thrust: Force,
        altitude: Length,
    }

    let probe = Probe {
        cruise: meters(7800.0) / seconds(1.0),
        max_thrust: kilonewtons(2.2),
        altitude: meters(400_000.0),
    };
    let json = serde_json::to_string_pretty(&probe).unwrap();
    println!("{}", json);

    let back: Probe = serde_json::from_str(&json).unwrap();
    println!("{:?}", back);
    println!();

    println!("=== Unit mismatch ===");
    let wrong = r#"{"cruise":{"value":1.0,"unit":"km/h"},"max_thrust":{"value":1.0},"altitude":1.0}"#;
    match serde_json::from_str::<Probe>(wrong) {
        Ok(p) => println!("unexpected success: {:?}", p),
        Err(e) => println!("rejected: {}", e),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
