//! Family Detection Walkthrough
//!
//! Shows how a type's lineage answers "is this built on some `F<..>`, and
//! with which arguments":
//! 1. Own entries from `#[derive(Family)]`
//! 2. Inherited entries through `#[base]` fields (transitively)
//! 3. Std families and the probe macro for unregistered types

use kindred::family::std_families::{BTreeMapFamily, HashMapFamily, VecFamily};
use kindred::prelude::*;
use kindred::{ArgsOf, MaybeArgs, argument_names};

// =============================================================================
// Helper: print a detection result
// =============================================================================

fn report<F, D>(label: &str)
where
    F: Family,
    D: BaseOf<F> + ?Sized,
    ArgsOf<F, D>: MaybeArgs,
{
    let matched = is_base_of_family::<F, D>();
    match argument_names::<F, D>() {
        Some(args) => println!("{label:<32} {:<10} matched, args = {args:?}", F::NAME),
        None => println!("{label:<32} {:<10} no match", F::NAME),
    }
    assert_eq!(matched, <ArgsOf<F, D> as MaybeArgs>::IS_FOUND);
}

// =============================================================================
// Domain types
// =============================================================================

#[derive(Family)]
struct Wrapper<T>(T);

#[derive(Family)]
struct Mapping<K, V> {
    pairs: Vec<(K, V)>,
}

/// A distance in meters, stored as `Wrapper<i32>`.
#[derive(Lineage)]
struct Meters {
    #[base]
    raw: Wrapper<i32>,
}

#[derive(Lineage)]
struct Route {
    #[base]
    length: Meters,
    #[base]
    stops: Mapping<String, u32>,
}

struct Opaque;

fn main() {
    println!("--- Family Detection ---\n");

    println!("=== Part 1: Own entries ===\n");
    report::<WrapperFamily, Wrapper<bool>>("Wrapper<bool>");
    report::<MappingFamily, Mapping<u8, char>>("Mapping<u8, char>");
    report::<MappingFamily, Wrapper<bool>>("Wrapper<bool>");

    println!("\n=== Part 2: Through #[base] fields ===\n");
    report::<WrapperFamily, Meters>("Meters");
    report::<WrapperFamily, Route>("Route (via Meters)");
    report::<MappingFamily, Route>("Route");
    report::<MappingFamily, i32>("i32");

    let route = Route {
        length: Meters { raw: Wrapper(1200) },
        stops: Mapping { pairs: vec![("depot".into(), 0), ("market".into(), 3)] },
    };
    let meters: &Meters = route.upcast();
    let stops: &Mapping<String, u32> = route.upcast();
    let raw: &Wrapper<i32> = meters.upcast();
    println!("\nroute: {} m over {} stops", raw.0, stops.pairs.len());

    println!("\n=== Part 3: Std families ===\n");
    report::<VecFamily, Vec<Meters>>("Vec<Meters>");
    report::<HashMapFamily, std::collections::HashMap<String, u8>>("HashMap<String, u8>");
    report::<BTreeMapFamily, Vec<u8>>("Vec<u8>");

    println!(
        "\nprobe Opaque against Vec: {}",
        kindred::is_base_of_family!(VecFamily, Opaque)
    );
    assert!(!kindred::is_base_of_family!(VecFamily, Opaque));

    println!("\nAll checks passed.");
}
