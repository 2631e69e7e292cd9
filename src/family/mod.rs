//! # Generic family detection
//!
//! A *family* is a generic type viewed without its arguments: `Vec<_>`,
//! `Wrapper<_>`, `BTreeMap<_, _>`. Each family is named by a zero-sized
//! marker implementing [`Family`].
//!
//! A candidate type describes what it *is* through [`Lineage`]: a pack of
//! [`Base`] entries, one per family instantiation the type is or is built
//! on. `#[derive(Family)]` records the type's own entry; `#[base]` fields
//! contribute the lineage of the field type, so the relation is transitive.
//!
//! ```text
//! D::Bases = [ Base<DFamily, (T)>, Base<WrapperFamily, (i32)>, Base<InnerFamily, (u8)> ]
//!                     |                       |
//!                 own entry             from #[base] fields, depth-first
//! ```
//!
//! [`BaseOf`] walks that pack comparing family identities and reports the
//! first hit:
//!
//! ```
//! use kindred::prelude::*;
//! use kindred::family::std_families::{BTreeMapFamily, VecFamily};
//!
//! assert!(is_base_of_family::<VecFamily, Vec<u8>>());
//! assert!(!is_base_of_family::<BTreeMapFamily, i32>());
//! kindred::assert_type_eq!(MatchedArgs<VecFamily, Vec<u8>>, kindred::pack![u8]);
//! ```
//!
//! ## Several instantiations of one family
//!
//! A type may reach the same family through more than one base, with
//! different arguments. The answer is then the first entry of `Bases`: the
//! type's own entry, then `#[base]` fields in declaration order, each field
//! expanded depth-first. This is a documented limitation, not an error.
//!
//! ## Relying on arguments of a non-match
//!
//! `MatchedArgs` only exists for a match:
//!
//! ```compile_fail
//! use kindred::prelude::*;
//! use kindred::family::std_families::VecFamily;
//!
//! fn needs_args<A>() {}
//! needs_args::<MatchedArgs<VecFamily, i32>>();
//! ```

pub mod std_families;

use core::marker::PhantomData;

use crate::pack::{PCons, PNil, Pack};
use crate::primitives::{Absent, Bool, DefaultMaxDepth, HashStream, Present, StreamEq};

/// Marker for a generic type family.
///
/// Generated by `#[derive(Family)]`; std families live in [`std_families`].
pub trait Family: 'static {
    /// Identity used to tell families apart.
    type Id: HashStream;
    /// Name of the generic type, without arguments.
    const NAME: &'static str;
}

/// One "is-a" edge: the type is, or is built on, `F<Args...>`.
pub struct Base<F, Args>(PhantomData<(F, Args)>);

/// The families a type belongs to.
///
/// Implement with `#[derive(Family)]` or `#[derive(Lineage)]`.
pub trait Lineage {
    /// Pack of `Base<F, Args>` entries, most specific first.
    type Bases;
}

/// Result of a successful match: the recovered argument pack.
pub struct Found<Args>(PhantomData<Args>);

/// Result of a failed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotFound;

/// Either `Found<Args>` or `NotFound`.
pub trait MaybeArgs {
    const IS_FOUND: bool;

    /// Argument type names for a match, `None` otherwise.
    #[cfg(feature = "alloc")]
    fn type_names() -> Option<alloc::vec::Vec<&'static str>>;
}

impl MaybeArgs for NotFound {
    const IS_FOUND: bool = false;

    #[cfg(feature = "alloc")]
    fn type_names() -> Option<alloc::vec::Vec<&'static str>> {
        None
    }
}

impl<Args: Pack> MaybeArgs for Found<Args> {
    const IS_FOUND: bool = true;

    #[cfg(feature = "alloc")]
    fn type_names() -> Option<alloc::vec::Vec<&'static str>> {
        Some(Args::type_names())
    }
}

/// Unwraps `Found<Args>`; deliberately not implemented for `NotFound`.
pub trait Matched {
    type Args;
}

impl<Args> Matched for Found<Args> {
    type Args = Args;
}

// =============================================================================
// Detector
// =============================================================================

/// Does `Self` derive from some instantiation of family `F`?
pub trait BaseOf<F: Family> {
    /// `Present` on a match, `Absent` otherwise.
    type Out: Bool;
    /// `Found<pack![A1, .., An]>` on a match, `NotFound` otherwise.
    type Args;
}

impl<F, D> BaseOf<F> for D
where
    F: Family,
    D: Lineage + ?Sized,
    D::Bases: FindFamily<F>,
{
    type Out = <D::Bases as FindFamily<F>>::Out;
    type Args = <D::Bases as FindFamily<F>>::Args;
}

/// Linear scan of a `Bases` pack for family `F`.
pub trait FindFamily<F> {
    type Out: Bool;
    type Args;
}

impl<F> FindFamily<F> for PNil {
    type Out = Absent;
    type Args = NotFound;
}

impl<F, G, A, T> FindFamily<F> for PCons<Base<G, A>, T>
where
    F: Family,
    G: Family,
    F::Id: StreamEq<G::Id, DefaultMaxDepth>,
    <F::Id as StreamEq<G::Id, DefaultMaxDepth>>::Out: FindNext<F, A, T>,
{
    type Out = <<F::Id as StreamEq<G::Id, DefaultMaxDepth>>::Out as FindNext<F, A, T>>::Out;
    type Args = <<F::Id as StreamEq<G::Id, DefaultMaxDepth>>::Out as FindNext<F, A, T>>::Args;
}

/// First hit wins; a miss moves on to the rest of the pack.
pub trait FindNext<F, A, Rest> {
    type Out: Bool;
    type Args;
}

impl<F, A, Rest> FindNext<F, A, Rest> for Present {
    type Out = Present;
    type Args = Found<A>;
}

impl<F, A, Rest: FindFamily<F>> FindNext<F, A, Rest> for Absent {
    type Out = <Rest as FindFamily<F>>::Out;
    type Args = <Rest as FindFamily<F>>::Args;
}

/// `Present` iff `D` derives from some instantiation of `F`.
pub type IsBaseOfFamily<F, D> = <D as BaseOf<F>>::Out;

/// `Found<pack![..]>` with the arguments `D` instantiates `F` with, or `NotFound`.
pub type ArgsOf<F, D> = <D as BaseOf<F>>::Args;

/// The argument pack of a match. Does not resolve for a non-match.
pub type MatchedArgs<F, D> = <ArgsOf<F, D> as Matched>::Args;

/// Whether `D` derives from some instantiation of `F`.
pub const fn is_base_of_family<F: Family, D: BaseOf<F> + ?Sized>() -> bool {
    <D::Out as Bool>::VALUE
}

/// Argument type names of the match, or `None`.
#[cfg(feature = "alloc")]
pub fn argument_names<F, D>() -> Option<alloc::vec::Vec<&'static str>>
where
    F: Family,
    D: BaseOf<F> + ?Sized,
    D::Args: MaybeArgs,
{
    <D::Args as MaybeArgs>::type_names()
}

// =============================================================================
// Lineage plumbing used by the derives
// =============================================================================

/// Concatenate the `Bases` of every type in a pack, in order.
pub trait CollectBases {
    type Out;
}

impl CollectBases for PNil {
    type Out = PNil;
}

impl<H, T> CollectBases for PCons<H, T>
where
    H: Lineage + ?Sized,
    T: CollectBases,
    H::Bases: crate::pack::Concat<T::Out>,
{
    type Out = <H::Bases as crate::pack::Concat<T::Out>>::Out;
}

/// View a value through one of its `#[base]` fields.
pub trait Upcast<B: ?Sized> {
    fn upcast(&self) -> &B;
    fn upcast_mut(&mut self) -> &mut B;
}

// References see through to their referent.
impl<T: Lineage + ?Sized> Lineage for &T {
    type Bases = T::Bases;
}

impl<T: Lineage + ?Sized> Lineage for &mut T {
    type Bases = T::Bases;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    struct PairFamily;
    impl Family for PairFamily {
        type Id = crate::__stream_of!("tests::PairFamily");
        const NAME: &'static str = "Pair";
    }

    struct CellFamily;
    impl Family for CellFamily {
        type Id = crate::__stream_of!("tests::CellFamily");
        const NAME: &'static str = "Cell";
    }

    struct Unrelated;
    impl Lineage for Unrelated {
        type Bases = PNil;
    }

    struct Both;
    impl Lineage for Both {
        type Bases = pack![Base<CellFamily, pack![u8]>, Base<PairFamily, pack![u8, i8]>];
    }

    struct Twice;
    impl Lineage for Twice {
        type Bases = pack![Base<CellFamily, pack![u16]>, Base<CellFamily, pack![u32]>];
    }

    #[test]
    fn test_scan_finds_any_position() {
        assert!(is_base_of_family::<CellFamily, Both>());
        assert!(is_base_of_family::<PairFamily, Both>());
        crate::assert_type_eq!(MatchedArgs<PairFamily, Both>, pack![u8, i8]);
    }

    #[test]
    fn test_empty_lineage_never_matches() {
        assert!(!is_base_of_family::<CellFamily, Unrelated>());
        crate::assert_type_eq!(ArgsOf<CellFamily, Unrelated>, NotFound);
    }

    #[test]
    fn test_first_entry_wins() {
        crate::assert_type_eq!(MatchedArgs<CellFamily, Twice>, pack![u16]);
    }

    #[test]
    fn test_references_are_transparent() {
        assert!(is_base_of_family::<PairFamily, &Both>());
        assert!(is_base_of_family::<PairFamily, &mut Both>());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_argument_names() {
        assert_eq!(argument_names::<PairFamily, Both>(), Some(alloc::vec!["u8", "i8"]));
        assert_eq!(argument_names::<PairFamily, Unrelated>(), None);
    }

    #[test]
    fn test_collect_bases_concatenates() {
        type All = <pack![Both, Unrelated, Twice] as CollectBases>::Out;
        assert_eq!(<All as Pack>::LEN, 4);
    }
}
