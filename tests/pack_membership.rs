//! Pack membership with std and derived identities.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use kindred::prelude::*;
use kindred::{assert_in_pack, assert_not_in_pack, pack, Contains, Present, SameType};

#[derive(TypeIdentity)]
pub struct Meters(pub f64);

#[derive(TypeIdentity)]
pub struct Feet(pub f64);

#[derive(TypeIdentity)]
pub struct Tagged<T> {
    pub value: T,
}

#[derive(TypeIdentity)]
pub enum Shape<'a, T> {
    Point,
    Named(&'a str, T),
}

assert_in_pack!(f64; i32, f32, f64);
assert_not_in_pack!(f64; i32, f32);
assert_in_pack!(Meters; Feet, Meters);

#[test]
fn test_double_among_numbers() {
    assert!(is_in_pack::<f64, pack![i32, f32, f64]>());
    assert!(!is_in_pack::<f64, pack![i32, f32]>());
    assert!(!is_in_pack::<f64, pack![]>());
}

#[test]
fn test_position_does_not_matter() {
    assert!(is_in_pack::<u8, pack![u8, i8, bool]>());
    assert!(is_in_pack::<u8, pack![i8, u8, bool]>());
    assert!(is_in_pack::<u8, pack![i8, bool, u8]>());
}

#[test]
fn test_order_and_duplicates_do_not_matter() {
    assert_eq!(
        is_in_pack::<char, pack![u8, char, bool]>(),
        is_in_pack::<char, pack![bool, u8, char, char]>()
    );
    assert_eq!(
        is_in_pack::<char, pack![u8, bool]>(),
        is_in_pack::<char, pack![bool, bool, u8]>()
    );
}

#[test]
fn test_identity_not_convertibility() {
    assert!(!is_in_pack::<i64, pack![i32, u64]>());
    assert!(!is_in_pack::<&str, pack![String, &&str, char]>());
    assert!(!is_in_pack::<Box<u8>, pack![u8, &u8]>());
}

#[test]
fn test_derived_identities() {
    assert!(is_in_pack::<Meters, pack![Feet, Meters]>());
    assert!(!is_in_pack::<Meters, pack![Feet, f64]>());
    assert!(<SameType<Meters, Meters> as Bool>::VALUE);
    assert!(!<SameType<Meters, Feet> as Bool>::VALUE);
}

#[test]
fn test_generic_arguments_take_part() {
    assert!(is_in_pack::<Tagged<u8>, pack![Tagged<u16>, Tagged<u8>]>());
    assert!(!is_in_pack::<Tagged<u8>, pack![Tagged<u16>, Tagged<i8>]>());
    assert!(is_in_pack::<Vec<Tagged<Meters>>, pack![Vec<Tagged<Meters>>]>());
    assert!(!is_in_pack::<Vec<Tagged<Meters>>, pack![Vec<Tagged<Feet>>]>());
    assert!(is_in_pack::<Shape<'static, u8>, pack![Shape<'static, u8>]>());
}

#[test]
fn test_std_containers() {
    assert!(is_in_pack::<HashMap<String, u8>, pack![Vec<u8>, HashMap<String, u8>]>());
    assert!(!is_in_pack::<HashMap<String, u8>, pack![HashMap<String, i8>]>());
    assert!(is_in_pack::<Option<(u8, bool)>, pack![Option<(u8, bool)>]>());
    assert!(!is_in_pack::<Option<(u8, bool)>, pack![Option<(bool, u8)>]>());
}

#[test]
fn test_type_level_result() {
    kindred::assert_type_eq!(IsInPack<u32, pack![u16, u32]>, Present);
    kindred::assert_type_eq!(IsInPack<u32, pack![u16]>, kindred::Absent);
}

#[test]
fn test_probe_macro() {
    assert!(kindred::is_in_pack!(f64; i32, f32, f64));
    assert!(!kindred::is_in_pack!(f64; i32, f32));
    assert!(!kindred::is_in_pack!(f64;));
    assert!(!kindred::is_in_pack!(Feet; i32, Meters));
    assert!(kindred::is_in_pack!(Meters; Meters));
}

#[test]
fn test_every_type_contains_itself() {
    assert!(kindred::is_in_pack!([u8; 2]; [u8; 2]));
    assert!(kindred::is_in_pack!(fn(); fn()));
    assert!(kindred::is_in_pack!(fn(u8, &'static str) -> bool; fn(u8, &'static str) -> bool));
    assert!(kindred::is_in_pack!(*const u8; *const u8));
    assert!(kindred::is_in_pack!(*mut [u8]; *mut [u8]));
    assert!(kindred::is_in_pack!(Box<str>; Box<str>));
    assert!(kindred::is_in_pack!(Arc<[u8]>; Arc<[u8]>));
    assert!(is_in_pack::<Rc<str>, pack![Rc<str>]>());
    assert!(is_in_pack::<[Meters; 3], pack![[Feet; 3], [Meters; 3]]>());
}

#[test]
fn test_arrays_pointers_and_fns_stay_distinct() {
    assert!(!kindred::is_in_pack!([u8; 2]; [u8; 3], [i8; 2], [u8]));
    assert!(!kindred::is_in_pack!(fn(); fn() -> u8, fn(u8)));
    assert!(!kindred::is_in_pack!(*const u8; *mut u8, &'static u8));
    assert!(!kindred::is_in_pack!(Box<str>; Box<[u8]>, Arc<str>, String));
}

fn same_identity<A: TypeIdentity, B: TypeIdentity>(_: &A, _: &B) -> bool
where
    pack![B]: Contains<A>,
{
    is_in_pack::<A, pack![B]>()
}

#[test]
fn test_same_named_local_types_are_distinct() {
    let first = {
        #[derive(TypeIdentity)]
        struct Token;
        Token
    };
    let second = {
        #[derive(TypeIdentity)]
        struct Token;
        Token
    };

    assert!(same_identity(&first, &first));
    assert!(same_identity(&second, &second));
    assert!(!same_identity(&first, &second));
    assert!(!same_identity(&second, &first));
}

#[test]
fn test_membership_is_const() {
    const HIT: bool = is_in_pack::<Feet, pack![Meters, Feet]>();
    const MISS: bool = is_in_pack::<Feet, pack![Meters]>();
    assert!(HIT);
    assert!(!MISS);
}

#[test]
fn test_fixtures_are_constructible() {
    let shape: Shape<'_, u8> = Shape::Named("origin", 0);
    assert!(matches!(shape, Shape::Named("origin", 0)));
    assert!(matches!(Shape::<u8>::Point, Shape::Point));
    assert_eq!(Tagged { value: Meters(1.0) }.value.0, Feet(1.0).0);
}
