//! Type-level answers.
//!
//! Every detector resolves to one of two zero-sized types: `Present` for
//! "yes" and `Absent` for "no". `Bool::VALUE` brings the answer back to a
//! `const bool`.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// The opposite answer.
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type Not = Present;
}

/// `Present` iff `B` is `Absent`.
pub type Not<B> = <B as Bool>::Not;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert!(Present::VALUE);
        assert!(!Absent::VALUE);
    }

    #[test]
    fn test_not_flips() {
        assert!(<Not<Absent> as Bool>::VALUE);
        assert!(!<Not<Not<Absent>> as Bool>::VALUE);
    }
}
