//! # Type packs
//!
//! A pack is a closed, compile-time list of types built from `PCons` cells
//! and terminated by `PNil`. Packs carry the argument list recovered by the
//! family detector and are the haystack of the membership check.
//!
//! ```
//! use kindred::{pack, Pack, PCons, PNil};
//!
//! type Numbers = pack![i32, f32, f64];
//! kindred::assert_type_eq!(Numbers, PCons<i32, PCons<f32, PCons<f64, PNil>>>);
//! assert_eq!(<Numbers as Pack>::LEN, 3);
//! ```
//!
//! Elements may be unsized, so the argument pack of `Box<str>` is `pack![str]`.

use core::marker::PhantomData;

/// Empty pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PNil;

/// Pack cell: head type `H`, remaining pack `T`.
pub struct PCons<H: ?Sized, T>(PhantomData<H>, PhantomData<T>);

/// A compile-time list of types.
pub trait Pack {
    const LEN: usize;

    /// `core::any::type_name` of every element, in order.
    #[cfg(feature = "alloc")]
    fn type_names() -> alloc::vec::Vec<&'static str>;
}

impl Pack for PNil {
    const LEN: usize = 0;

    #[cfg(feature = "alloc")]
    fn type_names() -> alloc::vec::Vec<&'static str> {
        alloc::vec::Vec::new()
    }
}

impl<H: ?Sized, T: Pack> Pack for PCons<H, T> {
    const LEN: usize = T::LEN + 1;

    #[cfg(feature = "alloc")]
    fn type_names() -> alloc::vec::Vec<&'static str> {
        let mut names = alloc::vec![core::any::type_name::<H>()];
        names.extend(T::type_names());
        names
    }
}

/// Append `Rhs` to the end of a pack.
pub trait Concat<Rhs> {
    type Out;
}

impl<Rhs> Concat<Rhs> for PNil {
    type Out = Rhs;
}

impl<H: ?Sized, T: Concat<Rhs>, Rhs> Concat<Rhs> for PCons<H, T> {
    type Out = PCons<H, T::Out>;
}

/// Build a pack type from a list of types.
///
/// `pack![A, B, C]` is `PCons<A, PCons<B, PCons<C, PNil>>>`; `pack![]` is `PNil`.
#[macro_export]
macro_rules! pack {
    () => { $crate::pack::PNil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::pack::PCons<$head, $crate::pack![$($rest),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len() {
        assert_eq!(<pack![] as Pack>::LEN, 0);
        assert_eq!(<pack![u8] as Pack>::LEN, 1);
        assert_eq!(<pack![u8, u16, u32, u64,] as Pack>::LEN, 4);
    }

    #[test]
    fn test_concat_appends_in_order() {
        type Joined = <pack![u8, u16] as Concat<pack![u32]>>::Out;
        let _: PhantomData<Joined> = PhantomData::<pack![u8, u16, u32]>;
        assert_eq!(<Joined as Pack>::LEN, 3);
    }

    #[test]
    fn test_unsized_elements() {
        assert_eq!(<pack![str, [u8], u16] as Pack>::LEN, 3);
        type Joined = <pack![str] as Concat<pack![dyn Fn()]>>::Out;
        assert_eq!(<Joined as Pack>::LEN, 2);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_type_names() {
        assert_eq!(<pack![i32, bool] as Pack>::type_names(), alloc::vec!["i32", "bool"]);
        assert_eq!(<pack![str, [u8]] as Pack>::type_names(), alloc::vec!["str", "[u8]"]);
        assert!(<PNil as Pack>::type_names().is_empty());
    }
}
