//! Attribute parsing
//!
//! - `#[base]` on a struct field: the field's type contributes its lineage.
//! - `#[family(marker = Name)]` on the type: rename the generated marker.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Ident, Index, Type};

// =============================================================================
// #[base] fields
// =============================================================================

/// A field marked `#[base]`.
pub struct BaseField {
    /// `self.<access>` reaches the field: a name or a tuple index.
    pub access: TokenStream,
    pub ty: Type,
}

fn is_base_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("base")
}

/// Collect `#[base]` fields in declaration order.
///
/// `#[base]` is only meaningful on struct fields; anywhere else is an error.
pub fn base_fields(input: &DeriveInput) -> syn::Result<Vec<BaseField>> {
    if let Some(attr) = input.attrs.iter().find(|a| is_base_attr(a)) {
        return Err(syn::Error::new_spanned(
            attr,
            "#[base] goes on a field, not on the type",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            for variant in &data.variants {
                for field in variant.fields.iter() {
                    if let Some(attr) = field.attrs.iter().find(|a| is_base_attr(a)) {
                        return Err(syn::Error::new_spanned(
                            attr,
                            "#[base] is only supported on struct fields",
                        ));
                    }
                }
            }
            return Ok(Vec::new());
        }
        Data::Union(data) => {
            for field in data.fields.named.iter() {
                if let Some(attr) = field.attrs.iter().find(|a| is_base_attr(a)) {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "#[base] is only supported on struct fields",
                    ));
                }
            }
            return Ok(Vec::new());
        }
    };

    let mut bases = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let Some(attr) = field.attrs.iter().find(|a| is_base_attr(a)) else {
            continue;
        };
        if !matches!(attr.meta, syn::Meta::Path(_)) {
            return Err(syn::Error::new_spanned(attr, "#[base] takes no arguments"));
        }

        let access = match &field.ident {
            Some(name) => quote! { #name },
            None => {
                let idx = Index::from(i);
                quote! { #idx }
            }
        };

        // Two Upcast impls to one type would conflict.
        let key = type_key(&field.ty);
        if bases.iter().any(|b: &BaseField| type_key(&b.ty) == key) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!("duplicate #[base] type `{key}`"),
            ));
        }

        bases.push(BaseField { access, ty: field.ty.clone() });
    }
    Ok(bases)
}

fn type_key(ty: &Type) -> String {
    quote!(#ty).to_string()
}

// =============================================================================
// #[family(marker = Name)]
// =============================================================================

/// Name of the family marker: `#[family(marker = X)]` or `<Type>Family`.
pub fn marker_ident(input: &DeriveInput) -> syn::Result<Ident> {
    let mut marker = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("family")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("marker") {
                if marker.is_some() {
                    return Err(meta.error("marker is already set"));
                }
                marker = Some(meta.value()?.parse::<Ident>()?);
                Ok(())
            } else {
                Err(meta.error("unknown family option, expected `marker = Name`"))
            }
        })?;
    }

    Ok(marker.unwrap_or_else(|| format_ident!("{}Family", input.ident)))
}
