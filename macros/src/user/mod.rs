//! User-facing derives
//!
//! | Derive | Purpose |
//! |--------|---------|
//! | `#[derive(TypeIdentity)]` | identity for pack membership |
//! | `#[derive(Family)]` | family marker + lineage (own entry and `#[base]` fields) |
//! | `#[derive(Lineage)]` | lineage from `#[base]` fields only |

mod family;
mod identity;

pub use family::{expand_derive_family, expand_derive_lineage};
pub use identity::expand_derive_type_identity;
