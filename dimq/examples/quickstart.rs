//! Minimal end-to-end example: build quantities from literals, combine them and print the results.

use dimq::typenum::P2;
use dimq::{kilograms, kilometers, meters, seconds, Force, Kilo, Meter, Newton, Pow, Unit};

fn main() {
    let d = kilometers(1.0);
    let t = seconds(100.0);
    let v = d / t;
    assert_eq!(v.value(), 10.0);
    println!("{} / {} = {}", d, t, v);

    let a = v / seconds(2.0);
    let f: Force = (kilograms(70.0) * a).with_format::<Newton>();
    println!("70 kg at {} needs {}", a, f);
    println!("in base units: {}", f.with_format::<dimq::DefaultFormat>());

    let field = Pow::<Kilo<Meter>, P2>::of(2.5);
    println!("2.5 km² = {}", field);

    let mut laps = meters(0.0);
    for _ in 0..4 {
        laps += meters(400.0);
    }
    laps.inc();
    println!("after four laps and one step: {}", laps);
    println!("one metre is {} coherent units", Meter::ONE.value());
}
