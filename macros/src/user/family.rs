//! `#[derive(Family)]` and `#[derive(Lineage)]`
//!
//! ```ignore
//! #[derive(Family)]
//! struct Wrapper<T>(T);
//!
//! #[derive(Family)]
//! struct Labeled<T> {
//!     #[base]
//!     inner: Wrapper<T>,
//!     label: &'static str,
//! }
//! ```
//!
//! expands to roughly:
//!
//! ```ignore
//! pub struct WrapperFamily;
//! impl Family for WrapperFamily { type Id = stream!("path::WrapperFamily@file:line:col"); .. }
//! impl<T> Lineage for Wrapper<T> {
//!     type Bases = PCons<Base<WrapperFamily, pack![T]>, PNil>;
//! }
//!
//! pub struct LabeledFamily;
//! impl<T> Lineage for Labeled<T> where pack![Wrapper<T>]: CollectBases {
//!     type Bases = PCons<Base<LabeledFamily, pack![T]>, <pack![Wrapper<T>] as CollectBases>::Out>;
//! }
//! impl<T> Upcast<Wrapper<T>> for Labeled<T> { .. }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, WherePredicate};

use crate::common::{
    base_fields, identity_key, marker_ident, pack_of, type_params, with_predicates, BaseField,
};

pub fn expand_derive_family(input: DeriveInput) -> TokenStream2 {
    match derive_family(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

pub fn expand_derive_lineage(input: DeriveInput) -> TokenStream2 {
    match derive_lineage(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_family(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let vis = &input.vis;
    let marker = marker_ident(input)?;
    let marker_key = identity_key(&marker.to_string());
    let name_str = ident.to_string();
    let params = type_params(&input.generics, "Family")?;
    let bases = base_fields(input)?;

    let marker_doc = format!("Family marker for [`{ident}`].");
    let own_entry = {
        let args = pack_of(&params);
        quote! { ::kindred::Base<#marker, #args> }
    };

    let lineage = lineage_impl(input, Some(own_entry), &bases);
    let upcasts = upcast_impls(input, &bases);

    Ok(quote! {
        #[doc = #marker_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #marker;

        impl ::kindred::Family for #marker {
            type Id = ::kindred::__stream_of!(#marker_key);
            const NAME: &'static str = #name_str;
        }

        #lineage
        #(#upcasts)*
    })
}

fn derive_lineage(input: &DeriveInput) -> syn::Result<TokenStream2> {
    // Const parameters are fine here: nothing is packed.
    let bases = base_fields(input)?;
    let lineage = lineage_impl(input, None, &bases);
    let upcasts = upcast_impls(input, &bases);

    Ok(quote! {
        #lineage
        #(#upcasts)*
    })
}

/// `Bases = [own entry?] ++ Bases of each #[base] field type, in order`.
fn lineage_impl(
    input: &DeriveInput,
    own_entry: Option<TokenStream2>,
    bases: &[BaseField],
) -> TokenStream2 {
    let ident = &input.ident;

    let (generics, inherited) = if bases.is_empty() {
        (input.generics.clone(), quote! { ::kindred::PNil })
    } else {
        let field_pack = pack_of(bases.iter().map(|b| &b.ty));
        let bound: WherePredicate = parse_quote! { #field_pack: ::kindred::family::CollectBases };
        let generics = with_predicates(&input.generics, [bound]);
        let inherited = quote! { <#field_pack as ::kindred::family::CollectBases>::Out };
        (generics, inherited)
    };

    let bases_ty = match own_entry {
        Some(entry) => quote! { ::kindred::PCons<#entry, #inherited> },
        None => inherited,
    };

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::kindred::Lineage for #ident #ty_generics #where_clause {
            type Bases = #bases_ty;
        }
    }
}

/// One `Upcast<FieldType>` per `#[base]` field.
fn upcast_impls(input: &DeriveInput, bases: &[BaseField]) -> Vec<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    bases
        .iter()
        .map(|BaseField { access, ty }| {
            quote! {
                impl #impl_generics ::kindred::Upcast<#ty> for #ident #ty_generics #where_clause {
                    #[inline]
                    fn upcast(&self) -> &#ty {
                        &self.#access
                    }

                    #[inline]
                    fn upcast_mut(&mut self) -> &mut #ty {
                        &mut self.#access
                    }
                }
            }
        })
        .collect()
}
