//! Families for standard library generics, and empty lineages for the
//! non-generic std types so they can be asked about (and answer `Absent`).
//!
//! | Marker            | Instances                         | Arguments   |
//! |-------------------|-----------------------------------|-------------|
//! | `OptionFamily`    | `Option<T>`                       | `T`         |
//! | `ResultFamily`    | `Result<T, E>`                    | `T, E`      |
//! | `TupleFamily`     | `()` .. `(A, .., H)`              | every field |
//! | `VecFamily`       | `Vec<T>` (alloc)                  | `T`         |
//! | `BoxFamily`       | `Box<T>` (alloc)                  | `T`         |
//! | `RcFamily`        | `Rc<T>` (alloc)                   | `T`         |
//! | `ArcFamily`       | `Arc<T>` (alloc)                  | `T`         |
//! | `BTreeMapFamily`  | `BTreeMap<K, V>` (alloc)          | `K, V`      |
//! | `BTreeSetFamily`  | `BTreeSet<T>` (alloc)             | `T`         |
//! | `HashMapFamily`   | `HashMap<K, V, S>` (std)          | `K, V, S`   |
//! | `HashSetFamily`   | `HashSet<T, S>` (std)             | `T, S`      |
//!
//! `Box`, `Rc` and `Arc` accept unsized pointees: `Box<str>` matches
//! `BoxFamily` with `pack![str]`. Slices, arrays, raw pointers and fn
//! pointers have an empty lineage.

use super::{Base, Family, Lineage};
use crate::pack::PNil;

/// Marker + `Family` impl + `Lineage` for the generic type itself.
macro_rules! std_family {
    ($($(#[$meta:meta])* $name:ident => $path:literal, [$($p:ident $(: ?$unsized:ident)?),*] $ty:ty;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct [<$name Family>];

                impl Family for [<$name Family>] {
                    type Id = crate::__stream_of!($path);
                    const NAME: &'static str = stringify!($name);
                }

                impl<$($p $(: ?$unsized)?),*> Lineage for $ty {
                    type Bases = crate::pack![Base<[<$name Family>], crate::pack![$($p),*]>];
                }
            )*
        }
    };
}

/// Types that belong to no family.
macro_rules! no_lineage {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lineage for $ty {
                type Bases = PNil;
            }
        )*
    };
}

/// Every tuple arity is an instance of `TupleFamily`.
macro_rules! tuple_lineage {
    ($([$($p:ident),*])*) => {
        $(
            impl<$($p),*> Lineage for ($($p,)*) {
                type Bases = crate::pack![Base<TupleFamily, crate::pack![$($p),*]>];
            }
        )*
    };
}

std_family! {
    /// `Option<T>`
    Option => "core::option::Option", [T] Option<T>;
    /// `Result<T, E>`
    Result => "core::result::Result", [T, E] Result<T, E>;
}

/// Tuples of any arity, including `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TupleFamily;

impl Family for TupleFamily {
    type Id = crate::__stream_of!("(,)");
    const NAME: &'static str = "Tuple";
}

tuple_lineage! {
    []
    [A]
    [A, B]
    [A, B, C]
    [A, B, C, D]
    [A, B, C, D, E]
    [A, B, C, D, E, F]
    [A, B, C, D, E, F, G]
    [A, B, C, D, E, F, G, H]
}

no_lineage!(
    bool, char, str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T> Lineage for [T] {
    type Bases = PNil;
}

impl<T, const N: usize> Lineage for [T; N] {
    type Bases = PNil;
}

impl<T: ?Sized> Lineage for *const T {
    type Bases = PNil;
}

impl<T: ?Sized> Lineage for *mut T {
    type Bases = PNil;
}

/// Fn pointers belong to no family.
macro_rules! fn_no_lineage {
    ($([$($a:ident),*])*) => {
        $(
            impl<R $(, $a)*> Lineage for fn($($a),*) -> R {
                type Bases = PNil;
            }
        )*
    };
}

fn_no_lineage! {
    []
    [A]
    [A, B]
    [A, B, C]
    [A, B, C, D]
    [A, B, C, D, E]
    [A, B, C, D, E, F]
}

#[cfg(feature = "alloc")]
mod alloc_families {
    use super::*;
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    std_family! {
        /// `Vec<T>`
        Vec => "alloc::vec::Vec", [T] Vec<T>;
        /// `Box<T>`
        Box => "alloc::boxed::Box", [T: ?Sized] Box<T>;
        /// `Rc<T>`
        Rc => "alloc::rc::Rc", [T: ?Sized] Rc<T>;
        /// `Arc<T>`
        Arc => "alloc::sync::Arc", [T: ?Sized] Arc<T>;
        /// `BTreeMap<K, V>`
        BTreeMap => "alloc::collections::BTreeMap", [K, V] BTreeMap<K, V>;
        /// `BTreeSet<T>`
        BTreeSet => "alloc::collections::BTreeSet", [T] BTreeSet<T>;
    }

    no_lineage!(String);
}

#[cfg(feature = "alloc")]
pub use alloc_families::{ArcFamily, BTreeMapFamily, BTreeSetFamily, BoxFamily, RcFamily, VecFamily};

#[cfg(feature = "std")]
mod std_only_families {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};

    std_family! {
        /// `HashMap<K, V, S>`
        HashMap => "std::collections::HashMap", [K, V, S] HashMap<K, V, S>;
        /// `HashSet<T, S>`
        HashSet => "std::collections::HashSet", [T, S] HashSet<T, S>;
    }

    no_lineage!(Path, PathBuf);
}

#[cfg(feature = "std")]
pub use std_only_families::{HashMapFamily, HashSetFamily};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{is_base_of_family, ArgsOf, MatchedArgs, NotFound};
    use crate::pack;

    #[test]
    fn test_option_and_result() {
        assert!(is_base_of_family::<OptionFamily, Option<i32>>());
        assert!(!is_base_of_family::<OptionFamily, Result<i32, ()>>());
        crate::assert_type_eq!(MatchedArgs<ResultFamily, Result<u8, bool>>, pack![u8, bool]);
    }

    #[test]
    fn test_tuples_of_every_arity() {
        assert!(is_base_of_family::<TupleFamily, ()>());
        assert!(is_base_of_family::<TupleFamily, (u8,)>());
        crate::assert_type_eq!(
            MatchedArgs<TupleFamily, (u8, i8, bool, char)>,
            pack![u8, i8, bool, char]
        );
        crate::assert_type_eq!(MatchedArgs<TupleFamily, ()>, pack![]);
    }

    #[test]
    fn test_scalars_belong_to_nothing() {
        assert!(!is_base_of_family::<OptionFamily, i32>());
        assert!(!is_base_of_family::<TupleFamily, str>());
        crate::assert_type_eq!(ArgsOf<TupleFamily, f64>, NotFound);
    }

    #[test]
    fn test_arrays_and_pointers_belong_to_nothing() {
        assert!(!is_base_of_family::<TupleFamily, [u8; 2]>());
        assert!(!is_base_of_family::<OptionFamily, [u8]>());
        assert!(!is_base_of_family::<OptionFamily, *const str>());
        assert!(!is_base_of_family::<TupleFamily, fn(u8) -> u8>());
        crate::assert_type_eq!(ArgsOf<OptionFamily, fn()>, NotFound);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_smart_pointers_accept_unsized_pointees() {
        use alloc::boxed::Box;
        use alloc::rc::Rc;
        use alloc::sync::Arc;

        assert!(is_base_of_family::<BoxFamily, Box<str>>());
        crate::assert_type_eq!(MatchedArgs<BoxFamily, Box<str>>, pack![str]);
        assert!(is_base_of_family::<ArcFamily, Arc<[u8]>>());
        crate::assert_type_eq!(MatchedArgs<ArcFamily, Arc<[u8]>>, pack![[u8]]);
        assert!(is_base_of_family::<RcFamily, Rc<dyn core::fmt::Debug>>());
        assert!(is_base_of_family::<BoxFamily, Box<dyn Fn()>>());
        assert!(!is_base_of_family::<ArcFamily, Box<str>>());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_alloc_families() {
        use alloc::collections::BTreeMap;
        use alloc::vec::Vec;

        assert!(is_base_of_family::<VecFamily, Vec<Vec<u8>>>());
        crate::assert_type_eq!(MatchedArgs<VecFamily, Vec<Vec<u8>>>, pack![Vec<u8>]);
        assert!(!is_base_of_family::<BTreeMapFamily, i32>());
        crate::assert_type_eq!(ArgsOf<BTreeMapFamily, i32>, NotFound);
        crate::assert_type_eq!(MatchedArgs<BTreeMapFamily, BTreeMap<u8, char>>, pack![u8, char]);
        assert!(!is_base_of_family::<BoxFamily, Vec<u8>>());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_hash_map_carries_its_hasher() {
        use std::collections::HashMap;
        use std::collections::hash_map::RandomState;

        crate::assert_type_eq!(
            MatchedArgs<HashMapFamily, HashMap<u8, u16>>,
            pack![u8, u16, RandomState]
        );
    }
}
