use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

/// The string hashed into a derived identity.
///
/// Module path and name alone are not unique: two `struct Token` in
/// different blocks of one function share both. The derive site's file,
/// line and column tell them apart. Everything is spelled as macros so it
/// resolves in the user's crate, not in this one.
pub fn identity_key(name: &str) -> TokenStream2 {
    quote! {
        concat!(module_path!(), "::", #name, "@", file!(), ":", line!(), ":", column!())
    }
}
