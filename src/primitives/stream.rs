//! Hash streams and Peano depth counters.
//!
//! A type's identity carries a stream of 16 nibbles derived from the FNV-1a
//! hash of its path. Two streams are compared nibble by nibble up to a depth
//! limit, which keeps the trait solver's recursion bounded.

use core::marker::PhantomData;

use super::bool::{Absent, Bool, Present};
use super::nibble::{Nibble, NibbleEq, SelectNibble};

// =============================================================================
// Hash Stream trait
// =============================================================================

/// Infinite stream of nibbles via recursive type
pub trait HashStream: 'static {
    type Head: Nibble;
    type Tail: HashStream;
}

/// A stream built from 16 const nibble values (one 64-bit hash).
///
/// The tail rotates the parameters, so the stream repeats every 16 nibbles.
/// Use the `__stream_of!` macro rather than spelling the parameters out.
pub struct HashStream16<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
>(PhantomData<()>);

impl<
    const N0: u8, const N1: u8, const N2: u8, const N3: u8,
    const N4: u8, const N5: u8, const N6: u8, const N7: u8,
    const N8: u8, const N9: u8, const N10: u8, const N11: u8,
    const N12: u8, const N13: u8, const N14: u8, const N15: u8,
> HashStream for HashStream16<N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15>
where
    (): SelectNibble<N0> + SelectNibble<N1> + SelectNibble<N2> + SelectNibble<N3>
      + SelectNibble<N4> + SelectNibble<N5> + SelectNibble<N6> + SelectNibble<N7>
      + SelectNibble<N8> + SelectNibble<N9> + SelectNibble<N10> + SelectNibble<N11>
      + SelectNibble<N12> + SelectNibble<N13> + SelectNibble<N14> + SelectNibble<N15>,
{
    type Head = <() as SelectNibble<N0>>::Out;
    type Tail = HashStream16<N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N0>;
}

// =============================================================================
// Peano Numbers
// =============================================================================

/// Peano number trait
pub trait Peano {}

/// Zero (base case)
pub struct Z;
impl Peano for Z {}

/// Successor (S<N> = N + 1)
pub struct S<N>(PhantomData<N>);
impl<N: Peano> Peano for S<N> {}

// D0..D16
macros::peano!(16);

/// Comparison depth for identities: one full 64-bit hash.
pub type DefaultMaxDepth = D16;

// =============================================================================
// Stream comparison
// =============================================================================

/// Compare two hash streams up to a depth limit
pub trait StreamEq<Other: HashStream, Limit> {
    type Out: Bool;
}

impl<A: HashStream, B: HashStream> StreamEq<B, Z> for A {
    type Out = Present;
}

impl<A, B, L> StreamEq<B, S<L>> for A
where
    A: HashStream,
    B: HashStream,
    A::Head: NibbleEq<B::Head>,
    <A::Head as NibbleEq<B::Head>>::Out: StreamEqDispatch<A::Tail, B::Tail, L>,
{
    type Out = <<A::Head as NibbleEq<B::Head>>::Out as StreamEqDispatch<A::Tail, B::Tail, L>>::Out;
}

/// Continue the comparison only while the heads agree.
pub trait StreamEqDispatch<TailA, TailB, Limit> {
    type Out: Bool;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Absent {
    type Out = Absent;
}

impl<TailA, TailB, L> StreamEqDispatch<TailA, TailB, L> for Present
where
    TailA: HashStream + StreamEq<TailB, L>,
    TailB: HashStream,
{
    type Out = <TailA as StreamEq<TailB, L>>::Out;
}

/// Build the `HashStream16` for a string expression (a literal or `concat!`).
#[macro_export]
#[doc(hidden)]
macro_rules! __stream_of {
    ($s:expr) => {
        $crate::primitives::stream::HashStream16<
            { $crate::primitives::const_utils::hash_nibble($s, 0) },
            { $crate::primitives::const_utils::hash_nibble($s, 1) },
            { $crate::primitives::const_utils::hash_nibble($s, 2) },
            { $crate::primitives::const_utils::hash_nibble($s, 3) },
            { $crate::primitives::const_utils::hash_nibble($s, 4) },
            { $crate::primitives::const_utils::hash_nibble($s, 5) },
            { $crate::primitives::const_utils::hash_nibble($s, 6) },
            { $crate::primitives::const_utils::hash_nibble($s, 7) },
            { $crate::primitives::const_utils::hash_nibble($s, 8) },
            { $crate::primitives::const_utils::hash_nibble($s, 9) },
            { $crate::primitives::const_utils::hash_nibble($s, 10) },
            { $crate::primitives::const_utils::hash_nibble($s, 11) },
            { $crate::primitives::const_utils::hash_nibble($s, 12) },
            { $crate::primitives::const_utils::hash_nibble($s, 13) },
            { $crate::primitives::const_utils::hash_nibble($s, 14) },
            { $crate::primitives::const_utils::hash_nibble($s, 15) },
        >
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    type Same = crate::__stream_of!("alloc::vec::Vec");
    type Other = crate::__stream_of!("alloc::boxed::Box");

    #[test]
    fn test_hash_streams_compare_by_content() {
        assert!(<Same as StreamEq<Same, DefaultMaxDepth>>::Out::VALUE);
        assert!(!<Same as StreamEq<Other, DefaultMaxDepth>>::Out::VALUE);
    }

    #[test]
    fn test_depth_limit_stops_comparison() {
        // Equal first nibble, different second one.
        type A = HashStream16<1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0>;
        type B = HashStream16<1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0>;
        assert!(<A as StreamEq<B, S<Z>>>::Out::VALUE);
        assert!(!<A as StreamEq<B, D2>>::Out::VALUE);
    }
}
