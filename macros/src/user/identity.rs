//! `#[derive(TypeIdentity)]`

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput};

use crate::common::{bound_type_params, identity_key, pack_of, type_params};

/// Identity = stream of `module_path!()::Name@file:line:column` plus the
/// identities of the type parameters, so `Meters<u8>` and `Meters<u16>` stay
/// distinct, and so do two block-local `Meters` in one module.
pub fn expand_derive_type_identity(input: DeriveInput) -> TokenStream2 {
    match derive_type_identity(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_type_identity(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let key = identity_key(&ident.to_string());
    let params = type_params(&input.generics, "TypeIdentity")?;

    let generics = bound_type_params(&input.generics, parse_quote!(::kindred::TypeIdentity));
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let arg_ids = pack_of(params.iter().map(|p| quote! { <#p as ::kindred::TypeIdentity>::Id }));

    Ok(quote! {
        impl #impl_generics ::kindred::TypeIdentity for #ident #ty_generics #where_clause {
            type Id = ::kindred::Named<
                ::kindred::__stream_of!(#key),
                #arg_ids
            >;
        }
    })
}
