//! Display adapters for optional values, sequences and paths.
//!
//! ```
//! use kindred::fmt::{OptionDisplayExt, SliceDisplayExt};
//!
//! assert_eq!(format!("{}", Some(3).display_opt()), "3");
//! assert_eq!(format!("{}", None::<i32>.display_opt()), "none()");
//! assert_eq!(format!("{}", [1, 2, 3].display_seq()), "[1, 2, 3]");
//! ```

use core::fmt;

/// Text rendered for an empty optional.
pub const NONE_TEXT: &str = "none()";

/// Renders `Some(v)` as `v` and `None` as `none()`.
///
/// Formatter flags (width, fill, precision) are forwarded to the value, and
/// applied to the `none()` text as padding.
#[derive(Clone, Copy)]
pub struct OptDisplay<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OptDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.pad(NONE_TEXT),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.pad(NONE_TEXT),
        }
    }
}

/// Renders a slice as `[a, b, c]` using each element's `Display`.
#[derive(Clone, Copy)]
pub struct SeqDisplay<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for SeqDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

pub trait OptionDisplayExt<T> {
    fn display_opt(&self) -> OptDisplay<'_, T>;
}

impl<T> OptionDisplayExt<T> for Option<T> {
    #[inline]
    fn display_opt(&self) -> OptDisplay<'_, T> {
        OptDisplay(self)
    }
}

pub trait SliceDisplayExt<T> {
    fn display_seq(&self) -> SeqDisplay<'_, T>;
}

impl<T> SliceDisplayExt<T> for [T] {
    #[inline]
    fn display_seq(&self) -> SeqDisplay<'_, T> {
        SeqDisplay(self)
    }
}

#[cfg(feature = "std")]
pub use self::path::{PathDisplay, PathDisplayExt};

#[cfg(feature = "std")]
mod path {
    use core::fmt;
    use std::path::Path;

    /// Renders the native path string, replacing invalid UTF-8 lossily.
    ///
    /// Unlike `Path::display`, width and fill flags pad the whole path.
    #[derive(Clone, Copy)]
    pub struct PathDisplay<'a>(pub &'a Path);

    impl fmt::Display for PathDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.pad(&self.0.as_os_str().to_string_lossy())
        }
    }

    impl fmt::Debug for PathDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(self.0, f)
        }
    }

    pub trait PathDisplayExt {
        fn display_native(&self) -> PathDisplay<'_>;
    }

    impl<P: AsRef<Path> + ?Sized> PathDisplayExt for P {
        #[inline]
        fn display_native(&self) -> PathDisplay<'_> {
            PathDisplay(self.as_ref())
        }
    }
}
