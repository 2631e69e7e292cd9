//! Generic parameter helpers

use proc_macro2::TokenStream;
use syn::{GenericParam, Generics, Ident, TypeParamBound, WherePredicate};

/// Type parameters in declaration order. Lifetimes are skipped.
///
/// Const parameters cannot be carried in a type pack and are rejected.
pub fn type_params(generics: &Generics, derive: &str) -> syn::Result<Vec<Ident>> {
    let mut params = Vec::new();
    for param in &generics.params {
        match param {
            GenericParam::Type(tp) => params.push(tp.ident.clone()),
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(cp) => {
                return Err(syn::Error::new_spanned(
                    cp,
                    format!("#[derive({derive})] does not support const generic parameters"),
                ));
            }
        }
    }
    Ok(params)
}

/// Add `bound` to every type parameter.
pub fn bound_type_params(generics: &Generics, bound: TypeParamBound) -> Generics {
    let mut generics = generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(tp) = param {
            tp.bounds.push(bound.clone());
        }
    }
    generics
}

/// Append predicates to the where clause, creating it if needed.
pub fn with_predicates(
    generics: &Generics,
    predicates: impl IntoIterator<Item = WherePredicate>,
) -> Generics {
    let mut generics = generics.clone();
    generics.make_where_clause().predicates.extend(predicates);
    generics
}

/// `pack![A, B, ..]` as tokens.
pub fn pack_of<T: quote::ToTokens>(items: impl IntoIterator<Item = T>) -> TokenStream {
    let items: Vec<T> = items.into_iter().collect();
    quote::quote! { ::kindred::pack![#(#items),*] }
}
