//! Scope guard behaviour: ordering, dismissal, unwinding.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use kindred::{defer, finally, Finally};

#[test]
fn test_guards_run_in_reverse_order() {
    let log = RefCell::new(Vec::new());
    {
        let _a = finally(|| log.borrow_mut().push("a"));
        let _b = finally(|| log.borrow_mut().push("b"));
        log.borrow_mut().push("body");
    }
    assert_eq!(*log.borrow(), ["body", "b", "a"]);
}

#[test]
fn test_defer_runs_at_scope_end() {
    let log = RefCell::new(Vec::new());
    {
        defer! { log.borrow_mut().push(1); }
        defer! { log.borrow_mut().push(2); }
        assert!(log.borrow().is_empty());
    }
    assert_eq!(*log.borrow(), [2, 1]);
}

#[test]
fn test_dismissed_guard_never_runs() {
    let runs = AtomicUsize::new(0);
    {
        let guard = finally(|| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        guard.dismiss();
    }
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}

#[test]
fn test_guard_can_outlive_its_creator() {
    fn make<'a>(runs: &'a AtomicUsize) -> Finally<impl FnOnce() + 'a> {
        finally(move || {
            runs.fetch_add(1, Ordering::SeqCst);
        })
    }

    let runs = AtomicUsize::new(0);
    let guard = make(&runs);
    assert_eq!(runs.load(Ordering::SeqCst), 0);
    drop(guard);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_runs_once_during_unwind() {
    let runs = AtomicUsize::new(0);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _guard = finally(|| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        panic!("unwinding");
    }));
    assert!(result.is_err());
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_guard_crosses_threads() {
    let runs = AtomicUsize::new(0);
    std::thread::scope(|s| {
        let guard = finally(|| {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        s.spawn(move || drop(guard));
    });
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_debug_shows_armed_state() {
    let guard = finally(|| {});
    assert_eq!(format!("{guard:?}"), "Finally { armed: true }");
}
