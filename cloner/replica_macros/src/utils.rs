//! Shared helpers for derive macro implementations.

use quote::ToTokens;

/// Validate that the derive target is a struct with named fields and
/// return those fields. Unit structs are accepted (empty member plan);
/// tuple structs, enums and unions are rejected with a spanned error.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a syn::DeriveInput,
    derive_name: &str,
) -> syn::Result<Vec<&'a syn::Field>> {
    match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => Ok(fields.named.iter().collect()),
            syn::Fields::Unit => Ok(Vec::new()),
            syn::Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                format!("`{derive_name}` requires named fields; tuple structs are not supported"),
            )),
        },
        syn::Data::Enum(_) | syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("`{derive_name}` can only be derived for structs"),
        )),
    }
}

/// Whether a type's tokens mention `ident` anywhere (used to decide which
/// type parameters a field's bounds depend on).
pub fn mentions_ident(ty: &syn::Type, ident: &syn::Ident) -> bool {
    fn scan(stream: proc_macro2::TokenStream, ident: &syn::Ident) -> bool {
        stream.into_iter().any(|tree| match tree {
            proc_macro2::TokenTree::Group(group) => scan(group.stream(), ident),
            proc_macro2::TokenTree::Ident(candidate) => candidate == *ident,
            _ => false,
        })
    }
    scan(ty.to_token_stream(), ident)
}
