//! Short names for common owned and shared types.
//!
//! These are plain aliases: `Opt<T>` *is* `Option<T>`, so detectors see
//! through them.

/// Optional value.
pub type Opt<T> = Option<T>;

/// Two values of possibly different types.
pub type Pair<A, B> = (A, B);

#[cfg(feature = "alloc")]
pub use self::owned::*;

#[cfg(feature = "alloc")]
mod owned {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::sync::Arc;

    /// Owned UTF-8 string.
    pub type Str = String;

    /// Uniquely owned heap pointer.
    pub type UPtr<T> = Box<T>;

    /// Shared, reference-counted pointer usable across threads.
    pub type SPtr<T> = Arc<T>;

    /// Boxed callable, e.g. `Func<dyn Fn(i32) -> i32>`.
    pub type Func<F> = Box<F>;
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::boxed::Box;
    use crate::family::is_base_of_family;
    use crate::family::std_families::{ArcFamily, BoxFamily, OptionFamily, TupleFamily};
    use crate::pack;

    #[test]
    fn test_aliases_are_transparent_to_detection() {
        assert!(is_base_of_family::<OptionFamily, Opt<u8>>());
        assert!(is_base_of_family::<BoxFamily, UPtr<u8>>());
        assert!(is_base_of_family::<ArcFamily, SPtr<Str>>());
        crate::assert_type_eq!(crate::MatchedArgs<TupleFamily, Pair<u8, Str>>, pack![u8, Str]);
    }

    #[test]
    fn test_func_holds_closures() {
        let offset = 2;
        let add: Func<dyn Fn(i32) -> i32> = Box::new(move |x| x + offset);
        assert_eq!(add(40), 42);
    }

    #[test]
    fn test_unsized_aliases_are_detected() {
        assert!(is_base_of_family::<BoxFamily, Func<dyn Fn()>>());
        crate::assert_type_eq!(crate::MatchedArgs<BoxFamily, Func<dyn Fn()>>, pack![dyn Fn()]);
        assert!(is_base_of_family::<ArcFamily, SPtr<str>>());
        assert!(!is_base_of_family::<ArcFamily, UPtr<[u8]>>());
    }
}
