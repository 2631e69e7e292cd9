//! # Type identity and pack membership
//!
//! Stable Rust cannot ask "are these two types the same?" and get a `false`
//! back. Instead every participating type carries a structural identity:
//! the hash stream of its path plus the identities of its generic arguments.
//! Two identities compare equal iff both parts match, so `Vec<i32>` and
//! `Vec<u8>` differ, and so do `(u8,)` and `(u8, u8)`.
//!
//! ```
//! use kindred::{is_in_pack, pack};
//!
//! assert!(is_in_pack::<f64, pack![i32, f32, f64]>());
//! assert!(!is_in_pack::<f64, pack![i32, f32]>());
//! assert!(!is_in_pack::<f64, pack![]>());
//! ```
//!
//! Membership is exact identity, not convertibility:
//!
//! ```compile_fail
//! use kindred::{assert_in_pack};
//! assert_in_pack!(i64; i32, u64);
//! ```
//!
//! ## Coverage
//!
//! Identities exist for the scalars, `str`, `()`, references, raw pointers,
//! slices, arrays of length 0 through 32, tuples up to eight elements, fn
//! pointers with up to six arguments, and the std containers. A user type
//! opts in with `#[derive(TypeIdentity)]`. Membership on any other type does
//! not compile. Higher-ranked fn pointers such as `for<'a> fn(&'a u8)` and
//! `unsafe` / `extern` fn pointers have no identity.
//!
//! ## Derived identities
//!
//! A derived identity hashes the module path, the type name and the source
//! position of the derive. Two same-named types in different blocks of one
//! module are therefore distinct. Two identities still collide if their
//! 64-bit hashes collide, which would make unrelated types compare equal.

use core::marker::PhantomData;

use crate::pack::{PCons, PNil};
use crate::primitives::{Absent, Bool, DefaultMaxDepth, HashStream, Present, StreamEq};

/// Structural identity: path stream `S` plus a pack of argument identities.
pub struct Named<S, Args>(PhantomData<(S, Args)>);

/// A type with a compile-time identity.
///
/// Implement with `#[derive(TypeIdentity)]`.
pub trait TypeIdentity {
    type Id;
}

/// Type-level identity equality.
pub trait IdEq<Other> {
    type Out: Bool;
}

impl<S1, A1, S2, A2> IdEq<Named<S2, A2>> for Named<S1, A1>
where
    S1: HashStream + StreamEq<S2, DefaultMaxDepth>,
    S2: HashStream,
    // Arguments are only compared once the paths agree.
    <S1 as StreamEq<S2, DefaultMaxDepth>>::Out: GateEq<A1, A2>,
{
    type Out = <<S1 as StreamEq<S2, DefaultMaxDepth>>::Out as GateEq<A1, A2>>::Out;
}

impl IdEq<PNil> for PNil {
    type Out = Present;
}

impl<H: ?Sized, T> IdEq<PCons<H, T>> for PNil {
    type Out = Absent;
}

impl<H: ?Sized, T> IdEq<PNil> for PCons<H, T> {
    type Out = Absent;
}

impl<H1, T1, H2, T2> IdEq<PCons<H2, T2>> for PCons<H1, T1>
where
    H1: IdEq<H2>,
    <H1 as IdEq<H2>>::Out: GateEq<T1, T2>,
{
    type Out = <<H1 as IdEq<H2>>::Out as GateEq<T1, T2>>::Out;
}

/// Lazy continuation of an equality check.
pub trait GateEq<A, B> {
    type Out: Bool;
}

impl<A, B> GateEq<A, B> for Absent {
    type Out = Absent;
}

impl<A: IdEq<B>, B> GateEq<A, B> for Present {
    type Out = <A as IdEq<B>>::Out;
}

/// `Present` iff `A` and `B` have the same identity.
pub type SameType<A, B> = <<A as TypeIdentity>::Id as IdEq<<B as TypeIdentity>::Id>>::Out;

// =============================================================================
// Pack membership
// =============================================================================

/// Pack membership: `Out` is `Present` iff `V` is identical to an element.
pub trait Contains<V: ?Sized> {
    type Out: Bool;
}

impl<V: ?Sized> Contains<V> for PNil {
    type Out = Absent;
}

impl<V, H, T> Contains<V> for PCons<H, T>
where
    V: TypeIdentity + ?Sized,
    H: TypeIdentity + ?Sized,
    V::Id: IdEq<H::Id>,
    <V::Id as IdEq<H::Id>>::Out: ContainsNext<V, T>,
{
    type Out = <<V::Id as IdEq<H::Id>>::Out as ContainsNext<V, T>>::Out;
}

/// Stop at the first hit, otherwise keep scanning the tail.
pub trait ContainsNext<V: ?Sized, Tail> {
    type Out: Bool;
}

impl<V: ?Sized, Tail> ContainsNext<V, Tail> for Present {
    type Out = Present;
}

impl<V: ?Sized, Tail: Contains<V>> ContainsNext<V, Tail> for Absent {
    type Out = <Tail as Contains<V>>::Out;
}

/// `Present` iff `V` is one of the types in pack `P`.
pub type IsInPack<V, P> = <P as Contains<V>>::Out;

/// Whether `V` is one of the types in pack `P`.
pub const fn is_in_pack<V: ?Sized, P: Contains<V>>() -> bool {
    <P::Out as Bool>::VALUE
}

// =============================================================================
// Std identities
// =============================================================================

/// Identity for a non-generic type from its canonical path.
macro_rules! impl_plain_identity {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(
            impl TypeIdentity for $ty {
                type Id = Named<crate::__stream_of!($path), PNil>;
            }
        )*
    };
}

/// Identity for a generic type: path plus its type arguments.
macro_rules! impl_generic_identity {
    ($($path:literal => [$($p:ident $(: ?$unsized:ident)?),+] $ty:ty),* $(,)?) => {
        $(
            impl<$($p: TypeIdentity $(+ ?$unsized)?),+> TypeIdentity for $ty {
                type Id = Named<crate::__stream_of!($path), crate::pack![$($p::Id),+]>;
            }
        )*
    };
}

impl_plain_identity! {
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    () => "()",
}

impl_generic_identity! {
    "core::option::Option" => [T] Option<T>,
    "core::result::Result" => [T, E] Result<T, E>,
    "(,)" => [A] (A,),
    "(,)" => [A, B] (A, B),
    "(,)" => [A, B, C] (A, B, C),
    "(,)" => [A, B, C, D] (A, B, C, D),
    "(,)" => [A, B, C, D, E] (A, B, C, D, E),
    "(,)" => [A, B, C, D, E, F] (A, B, C, D, E, F),
    "(,)" => [A, B, C, D, E, F, G] (A, B, C, D, E, F, G),
    "(,)" => [A, B, C, D, E, F, G, H] (A, B, C, D, E, F, G, H),
    "[]" => [T] [T],
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for &T {
    type Id = Named<crate::__stream_of!("&"), crate::pack![T::Id]>;
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for &mut T {
    type Id = Named<crate::__stream_of!("&mut"), crate::pack![T::Id]>;
}

impl_generic_identity! {
    "*const" => [T: ?Sized] *const T,
    "*mut" => [T: ?Sized] *mut T,
}

/// Arrays: the length is part of the path, the element is the argument.
macro_rules! impl_array_identity {
    ($($n:literal)*) => {
        $(
            impl<T: TypeIdentity> TypeIdentity for [T; $n] {
                type Id = Named<crate::__stream_of!(concat!("[;", $n, "]")), crate::pack![T::Id]>;
            }
        )*
    };
}

impl_array_identity! {
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
}

/// Fn pointers: the return type first, then the parameters.
macro_rules! impl_fn_identity {
    ($([$($a:ident),*])*) => {
        $(
            impl<R: TypeIdentity $(, $a: TypeIdentity)*> TypeIdentity for fn($($a),*) -> R {
                type Id = Named<crate::__stream_of!("fn"), crate::pack![R::Id $(, $a::Id)*]>;
            }
        )*
    };
}

impl_fn_identity! {
    []
    [A]
    [A, B]
    [A, B, C]
    [A, B, C, D]
    [A, B, C, D, E]
    [A, B, C, D, E, F]
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use super::*;
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    impl_plain_identity! {
        String => "alloc::string::String",
    }

    impl_generic_identity! {
        "alloc::vec::Vec" => [T] Vec<T>,
        "alloc::boxed::Box" => [T: ?Sized] Box<T>,
        "alloc::rc::Rc" => [T: ?Sized] Rc<T>,
        "alloc::sync::Arc" => [T: ?Sized] Arc<T>,
        "alloc::collections::BTreeMap" => [K, V] BTreeMap<K, V>,
        "alloc::collections::BTreeSet" => [T] BTreeSet<T>,
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::*;
    use std::collections::hash_map::RandomState;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    impl_plain_identity! {
        Path => "std::path::Path",
        PathBuf => "std::path::PathBuf",
        RandomState => "std::hash::RandomState",
    }

    impl_generic_identity! {
        "std::collections::HashMap" => [K, V, S] HashMap<K, V, S>,
        "std::collections::HashSet" => [T, S] HashSet<T, S>,
    }
}
