//! # Layer 0: Primitives
//!
//! Basic building blocks for the detectors:
//! - `bool.rs`: Type-level answers (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Hash streams, Peano depth and stream equality.
//! - `const_utils.rs`: const fn hashing used to build streams from paths.

pub mod bool;
pub mod const_utils;
pub mod nibble;
pub mod stream;

pub use bool::{Absent, Bool, Not, Present};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{DefaultMaxDepth, HashStream, HashStream16, Peano, StreamEq, S, Z};
