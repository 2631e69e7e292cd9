//! Pack Membership
//!
//! `is_in_pack` answers "is `V` exactly one of these types" at compile time.
//! Identity is exact: `i64` is not in `[i32, u64]` even though it converts.

use kindred::prelude::*;
use kindred::{assert_in_pack, pack};

#[derive(TypeIdentity)]
struct Celsius(f64);

#[derive(TypeIdentity)]
struct Kelvin(f64);

#[derive(TypeIdentity)]
struct Reading<U> {
    unit: U,
}

type Numeric = pack![i32, f32, f64];
type Units = pack![Celsius, Kelvin];

// Rejected at compile time if the pack ever loses Kelvin.
assert_in_pack!(Kelvin; Celsius, Kelvin);

fn describe<V: TypeIdentity>(name: &str)
where
    Numeric: kindred::Contains<V>,
    Units: kindred::Contains<V>,
{
    println!(
        "{name:<18} numeric: {:<5} unit: {}",
        is_in_pack::<V, Numeric>(),
        is_in_pack::<V, Units>()
    );
}

fn main() {
    println!("--- Pack Membership ---\n");

    describe::<f64>("f64");
    describe::<i64>("i64");
    describe::<Celsius>("Celsius");
    describe::<Reading<Celsius>>("Reading<Celsius>");

    assert!(is_in_pack::<f64, pack![i32, f32, f64]>());
    assert!(!is_in_pack::<f64, pack![i32, f32]>());
    assert!(!is_in_pack::<f64, pack![]>());

    let reading = Reading { unit: Celsius(21.5) };
    println!("\nreading: {} C", reading.unit.0);
    println!("absolute zero: {} K", Kelvin(0.0).0);

    println!(
        "[u8; 4] among byte buffers: {}",
        kindred::is_in_pack!([u8; 4]; [u8], [u8; 4], Box<[u8]>)
    );
    println!(
        "fn(f64) -> f64 among callbacks: {}",
        kindred::is_in_pack!(fn(f64) -> f64; fn(f64), fn() -> f64)
    );

    println!("\nAll checks passed.");
}
