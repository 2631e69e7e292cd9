//! Probe and assertion macros.
//!
//! [`is_base_of_family!`] accepts concrete types that have no `Lineage` and
//! answers `false` for them, using the "Inherent Const Fallback" pattern: an
//! inherent const shadows a trait const only when the bound on the inherent
//! impl holds. A type without a lineage never names a registered family as a
//! base, so `false` is the exact answer there.
//!
//! [`is_in_pack!`] has no such fallback. Without identities there is no way
//! to tell `Opaque` from `Opaque`, so a needle or a listed type without a
//! `TypeIdentity` is a compile error rather than a silent `false`.
//!
//! Like every autoref-style probe this only works for concrete types at the
//! call site, not for a generic `T` inside `fn foo<T>()`.

// =============================================================================
// Probes
// =============================================================================

/// Whether a concrete type derives from some instantiation of a family.
///
/// ```
/// use kindred::is_base_of_family;
/// use kindred::family::std_families::VecFamily;
///
/// struct Opaque;
///
/// assert!(is_base_of_family!(VecFamily, Vec<u8>));
/// assert!(!is_base_of_family!(VecFamily, Opaque));
/// ```
#[macro_export]
macro_rules! is_base_of_family {
    ($F:ty, $D:ty $(,)?) => {{
        struct __Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Fallback { const MATCHED: bool = false; }
        impl<T: ?Sized> __Fallback for __Probe<T> {}

        impl<T: ?Sized + $crate::family::BaseOf<$F>> __Probe<T> {
            #[allow(dead_code)]
            const MATCHED: bool = $crate::family::is_base_of_family::<$F, T>();
        }

        __Probe::<$D>::MATCHED
    }};
}

/// Whether a concrete type is one of the listed types.
///
/// Every type involved needs a `TypeIdentity`; the std impls cover scalars,
/// `str`, references, raw pointers, slices, arrays up to length 32, tuples,
/// fn pointers up to six arguments and the common containers.
///
/// ```
/// use kindred::is_in_pack;
///
/// assert!(is_in_pack!(f64; i32, f32, f64));
/// assert!(!is_in_pack!(f64; i32, f32));
/// assert!(!is_in_pack!(f64;));
/// assert!(is_in_pack!([u8; 2]; [u8; 1], [u8; 2]));
/// assert!(is_in_pack!(fn(); fn(), fn() -> u8));
/// ```
///
/// A type without an identity is rejected instead of reported missing:
///
/// ```compile_fail
/// struct Opaque;
///
/// let _ = kindred::is_in_pack!(Opaque; Opaque);
/// ```
#[macro_export]
macro_rules! is_in_pack {
    ($V:ty; $($T:ty),* $(,)?) => {
        $crate::identity::is_in_pack::<$V, $crate::pack![$($T),*]>()
    };
}

// =============================================================================
// Static assertions
// =============================================================================

/// Fail compilation unless `D` derives from family `F`.
#[macro_export]
macro_rules! assert_base_of {
    ($F:ty, $D:ty $(,)?) => {
        const _: () = ::core::assert!(
            $crate::family::is_base_of_family::<$F, $D>(),
            concat!("`", stringify!($D), "` does not derive from `", stringify!($F), "`")
        );
    };
}

/// Fail compilation if `D` derives from family `F`.
#[macro_export]
macro_rules! assert_not_base_of {
    ($F:ty, $D:ty $(,)?) => {
        const _: () = ::core::assert!(
            !$crate::family::is_base_of_family::<$F, $D>(),
            concat!("`", stringify!($D), "` derives from `", stringify!($F), "`")
        );
    };
}

/// Fail compilation unless `V` is one of the listed types.
#[macro_export]
macro_rules! assert_in_pack {
    ($V:ty; $($T:ty),* $(,)?) => {
        const _: () = ::core::assert!(
            $crate::identity::is_in_pack::<$V, $crate::pack![$($T),*]>(),
            concat!("`", stringify!($V), "` is not in the pack")
        );
    };
}

/// Fail compilation if `V` is one of the listed types.
#[macro_export]
macro_rules! assert_not_in_pack {
    ($V:ty; $($T:ty),* $(,)?) => {
        const _: () = ::core::assert!(
            !$crate::identity::is_in_pack::<$V, $crate::pack![$($T),*]>(),
            concat!("`", stringify!($V), "` is in the pack")
        );
    };
}

/// Fail compilation unless two concrete types are the same type.
///
/// ```
/// kindred::assert_type_eq!(kindred::pack![u8], kindred::PCons<u8, kindred::PNil>);
/// ```
///
/// ```compile_fail
/// kindred::assert_type_eq!(u8, i8);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($a:ty, $b:ty $(,)?) => {
        const _: fn() = || {
            let _: ::core::marker::PhantomData<$a> = ::core::marker::PhantomData::<$b>;
        };
    };
}
