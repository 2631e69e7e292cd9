// Common utilities shared between the derives
//
// This module contains:
// - attrs: `#[base]` / `#[family(..)]` parsing
// - generics: type parameter extraction and where-clause helpers
// - path: the hashed key of a derived identity

mod attrs;
mod generics;
mod path;

pub use attrs::*;
pub use generics::*;
pub use path::*;
