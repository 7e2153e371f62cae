//! Shows how each formatter renders quantities.
//!
//! ```bash
//! cargo run --example formatting
//! cargo run --example formatting --features mathematical-space
//! ```

use dimq::{
    amperes, candelas, hertz, joules, kelvins, kilograms, meters, moles, newtons, seconds, Area, DefaultFormat,
    Moment, Volume,
};

fn main() {
    println!("=== Default format ===");
    println!("{}", meters(3.0) * kilograms(2.0));
    println!("{}", meters(3.0).p3());
    println!("{}", 5.0 / seconds(1.0));
    println!("{}", meters(9.81) / seconds(1.0).p2());
    println!("{}", meters(1.0) / seconds(1.0) / amperes(1.0));
    println!("{}", joules(8.314).with_format::<DefaultFormat>() / kelvins(1.0) / moles(1.0));
    println!("{}", candelas(1.0) / meters(1.0).p2());
    println!("{}", meters(4.0) / meters(2.0));
    println!();

    println!("=== Named formats ===");
    println!("{}", newtons(12.0));
    println!("{}", joules(0.5));
    println!("{}", hertz(50.0));
    println!();

    println!("=== Composite formats ===");
    let a: Area = (meters(2.0) * meters(3.0)).with_format();
    let v: Volume = meters(2.0).p3().with_format();
    let m: Moment = (newtons(10.0) * meters(0.3)).with_format();
    println!("{}", a);
    println!("{}", v);
    println!("{:.1}", m);
    println!();

    println!("=== Unit strings only ===");
    println!("{}", (meters(1.0) / seconds(1.0).p2()).unit());
    println!("{}", newtons(1.0).unit());
}
