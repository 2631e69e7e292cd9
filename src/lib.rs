#![cfg_attr(not(feature = "std"), no_std)]
#![recursion_limit = "256"]

// Feature flags handled:
// - std: default, enables std library (HashMap/HashSet/Path support)
// - alloc: Vec/Box/Rc/Arc/BTreeMap support and type-name diagnostics in no_std

//! # kindred
//!
//! **Compile-time family detection and type pack membership for stable Rust.**
//!
//! Two questions, answered entirely during type checking:
//!
//! 1. Is `D` an instance of, or built on top of, some `F<A1, .., An>`? If so,
//!    which `A1, .., An`?
//! 2. Is `V` exactly one of the types `T1, .., Tn`?
//!
//! ## Architecture
//!
//! Stable Rust has no negative reasoning ("`D` is *not* a `Vec<_>`"), so every
//! participating type carries a type-level identity: a 64-bit FNV-1a hash of
//! its path, expanded into a stream of nibble types. Comparing identities is
//! ordinary trait resolution that ends in `Present` or `Absent`.
//!
//! ```text
//! Type path -> FNV-1a (u64) -> HashStream16<n0..n15> -> StreamEq (16 nibbles) -> Present | Absent
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Nibble (X0-XF), HashStream, Peano       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Packs and identity                                      |
//! |  - PCons/PNil, pack!, TypeIdentity, IdEq, Contains                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Families                                                |
//! |  - Family, Lineage, BaseOf, ArgsOf, Upcast, std families          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: User API                                                |
//! |  - derives (Family, Lineage, TypeIdentity), probes, assertions    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use kindred::prelude::*;
//!
//! #[derive(Family)]
//! struct Wrapper<T>(T);
//!
//! #[derive(Lineage)]
//! struct Meters {
//!     #[base]
//!     inner: Wrapper<f64>,
//! }
//!
//! assert!(is_base_of_family::<WrapperFamily, Meters>());
//! kindred::assert_type_eq!(MatchedArgs<WrapperFamily, Meters>, kindred::pack![f64]);
//!
//! assert!(is_in_pack::<f64, kindred::pack![i32, f32, f64]>());
//! ```
//!
//! Besides the detectors the crate carries a scope guard ([`guard`]),
//! display adapters ([`fmt`]) and short type aliases ([`aliases`]).

// Allow `::kindred` to work inside the crate itself
extern crate self as kindred;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for generated marker names
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Packs and Identity
// =============================================================================
pub mod pack;
pub mod identity;

// =============================================================================
// Layer 2: Families
// =============================================================================
pub mod family;

// =============================================================================
// Layer 3: Probes and Assertions
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Runtime helpers
// =============================================================================
pub mod aliases;
pub mod fmt;
pub mod guard;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Absent, Bool, Not, Present};
pub use pack::{Concat, PCons, PNil, Pack};
pub use identity::{Contains, IdEq, IsInPack, Named, SameType, TypeIdentity, is_in_pack};
pub use family::{
    ArgsOf, Base, BaseOf, Family, Found, IsBaseOfFamily, Lineage, MatchedArgs, MaybeArgs, Matched,
    NotFound, Upcast, is_base_of_family,
};
#[cfg(feature = "alloc")]
pub use family::argument_names;
pub use guard::{Finally, finally};

// Re-export proc-macros
pub use macros::{Family, Lineage, TypeIdentity};

/// Common items for detection and membership queries.
pub mod prelude {
    pub use crate::family::{
        ArgsOf, BaseOf, Family, IsBaseOfFamily, Lineage, MatchedArgs, Upcast, is_base_of_family,
    };
    pub use crate::identity::{IsInPack, TypeIdentity, is_in_pack};
    pub use crate::pack::Pack;
    pub use crate::primitives::bool::{Absent, Bool, Present};
    pub use macros::{Family, Lineage, TypeIdentity};
    // Note: pack!, is_base_of_family!, is_in_pack!, assert_* are #[macro_export] so they're at crate root
}
