//! Procedural macros for kindred
//!
//! ## Derives
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Family)]` | generic struct/enum | Define `<Name>Family` and the type's lineage |
//! | `#[derive(Lineage)]` | struct | Inherit families through `#[base]` fields |
//! | `#[derive(TypeIdentity)]` | struct/enum | Make the type usable in pack membership |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Family)]
//! struct Wrapper<T>(T);
//!
//! #[derive(Lineage)]
//! struct Meters {
//!     #[base]
//!     inner: Wrapper<f64>,
//! }
//!
//! assert!(is_base_of_family::<WrapperFamily, Meters>());
//! ```
//!
//! Generated code refers to `::kindred`; the runtime crate aliases itself
//! with `extern crate self as kindred` so the derives also work inside it.

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod common;
mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano depth aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<D0>, ..., D16 = S<D15>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Derives (user/)
// =============================================================================

/// Define a family marker for a generic type and record its lineage.
///
/// - The marker is a unit struct named `<Type>Family` with the type's
///   visibility; rename it with `#[family(marker = Name)]`.
/// - The type's own entry `Base<Marker, pack![type params]>` comes first,
///   followed by the lineage of every `#[base]` field in declaration order.
/// - Each `#[base]` field also gets an `Upcast<FieldType>` impl.
///
/// Lifetime parameters are allowed and ignored; const parameters are
/// rejected. `#[base]` fields must have distinct types.
///
/// ```ignore
/// #[derive(Family)]
/// #[family(marker = CellKind)]
/// struct Cell<T> { value: T }
/// ```
#[proc_macro_derive(Family, attributes(base, family))]
pub fn derive_family(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_family(input).into()
}

/// Record the families a non-generic (or non-family) type is built on.
///
/// The lineage is the concatenation of the lineages of all `#[base]`
/// fields; with no `#[base]` field the type belongs to no family.
///
/// ```ignore
/// #[derive(Lineage)]
/// struct Config {
///     #[base]
///     entries: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Lineage, attributes(base))]
pub fn derive_lineage(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_lineage(input).into()
}

/// Give a type a compile-time identity for pack membership.
///
/// Identity is the type's module path and name plus the identities of its
/// type parameters, each of which must implement `TypeIdentity`.
///
/// ```ignore
/// #[derive(TypeIdentity)]
/// struct Meters(f64);
///
/// assert!(is_in_pack::<Meters, pack![f64, Meters]>());
/// ```
#[proc_macro_derive(TypeIdentity)]
pub fn derive_type_identity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_type_identity(input).into()
}
