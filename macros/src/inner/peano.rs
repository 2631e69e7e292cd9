//! Peano depth aliases.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    LitInt,
};

/// Upper bound on generated aliases; deeper limits only slow type checking.
const MAX_DEPTH: usize = 64;

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > MAX_DEPTH {
            return Err(syn::Error::new(
                lit.span(),
                format!("peano depth must be at most {MAX_DEPTH}"),
            ));
        }
        Ok(PeanoInput { max })
    }
}

/// `D0 = Z`, then `Dn = S<D(n-1)>` up to `max`.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (1..=input.max).map(|n| {
        let curr = format_ident!("D{}", n);
        let prev = format_ident!("D{}", n - 1);
        let doc = format!("Depth {n}.");
        quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        }
    });

    quote! {
        /// Depth 0.
        pub type D0 = Z;
        #(#aliases)*
    }
}
