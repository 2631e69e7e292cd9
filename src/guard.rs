//! Scope guard: run a closure when the enclosing scope ends.
//!
//! ```
//! use core::cell::Cell;
//! use kindred::guard::finally;
//!
//! let closed = Cell::new(false);
//! {
//!     let _guard = finally(|| closed.set(true));
//!     assert!(!closed.get());
//! }
//! assert!(closed.get());
//! ```

use core::fmt;

/// Runs its action exactly once on drop, unless dismissed.
///
/// The action also runs while unwinding from a panic.
#[must_use = "the action runs immediately if the guard is not bound to a variable"]
pub struct Finally<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Finally<F> {
    #[inline]
    pub fn new(action: F) -> Self {
        Self { action: Some(action) }
    }

    /// Cancel the guard without running the action.
    #[inline]
    pub fn dismiss(mut self) {
        self.action = None;
    }

    /// Whether the action is still scheduled.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for Finally<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for Finally<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finally").field("armed", &self.is_armed()).finish()
    }
}

/// Create a guard that runs `action` when dropped.
#[inline]
pub fn finally<F: FnOnce()>(action: F) -> Finally<F> {
    Finally::new(action)
}

/// Run the given statements when the enclosing scope ends.
///
/// Several `defer!`s in one scope run in reverse order.
///
/// ```
/// use core::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// {
///     kindred::defer! { log.borrow_mut().push("first registered"); }
///     kindred::defer! { log.borrow_mut().push("second registered"); }
///     log.borrow_mut().push("body");
/// }
/// assert_eq!(*log.borrow(), ["body", "second registered", "first registered"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _guard = $crate::guard::finally(|| { $($body)* });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_runs_once_on_drop() {
        let count = Cell::new(0);
        {
            let _guard = finally(|| count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_dismiss_cancels() {
        let count = Cell::new(0);
        let guard = finally(|| count.set(count.get() + 1));
        assert!(guard.is_armed());
        guard.dismiss();
        assert_eq!(count.get(), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_runs_during_unwind() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let ran = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = finally(|| ran.set(true));
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(ran.get());
    }
}
