//! Reflect derive macro implementation.
//!
//! Generates `Reflect` and `Structure` implementations from struct
//! definitions. Each field becomes one member of the plan: a name, a copy
//! policy, and a non-capturing transfer closure that coerces to the fn
//! pointer the engine composes into the cached clone procedure.
//!
//! Bounds are synthesized per type parameter, never per field type:
//! recursive structs (a node holding a handle to its own type) would make
//! field-type bounds cyclic for the trait solver. Parameters used by deep
//! fields get `Reflect`, parameters used by shallow fields get `Clone`,
//! and generic structs additionally get a `Self: Default` predicate.
//! Extra requirements (say, `Default` on a handle payload parameter) are
//! declared on the struct itself.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

use crate::utils::{mentions_ident, validate_struct_with_named_fields};

/// Main entry point for the Reflect derive macro.
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_reflect_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_reflect_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // The marker is a member-level opt-out; a struct-level marker has no
    // meaning and is rejected rather than ignored.
    reject_struct_level_marker(input)?;

    let fields = validate_struct_with_named_fields(input, "Reflect")?;

    let mut members = Vec::new();
    let mut deep_types = Vec::new();
    let mut shallow_types = Vec::new();

    for field in &fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let label = ident.to_string();

        if is_shallow(field)? {
            shallow_types.push(field.ty.clone());
            members.push(quote! {
                ::replica_core::Member::shallow(
                    #label,
                    |original: &Self, clone: &mut Self, _visited: &mut ::replica_core::Visited| {
                        clone.#ident = ::core::clone::Clone::clone(&original.#ident);
                    },
                )
            });
        } else {
            deep_types.push(field.ty.clone());
            members.push(quote! {
                ::replica_core::Member::deep(
                    #label,
                    |original: &Self, clone: &mut Self, visited: &mut ::replica_core::Visited| {
                        clone.#ident =
                            ::replica_core::Reflect::clone_with(&original.#ident, visited);
                    },
                )
            });
        }
    }

    let type_params: Vec<syn::Ident> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let mut generics = input.generics.clone();
    if !type_params.is_empty() {
        let (_, original_ty_generics, _) = input.generics.split_for_impl();
        let self_ty: syn::Type = syn::parse_quote!(#name #original_ty_generics);

        let where_clause = generics.make_where_clause();
        for param in &type_params {
            if deep_types.iter().any(|ty| mentions_ident(ty, param)) {
                where_clause
                    .predicates
                    .push(syn::parse_quote!(#param: ::replica_core::Reflect));
            }
            if shallow_types.iter().any(|ty| mentions_ident(ty, param)) {
                where_clause
                    .predicates
                    .push(syn::parse_quote!(#param: ::core::clone::Clone));
            }
        }
        where_clause
            .predicates
            .push(syn::parse_quote!(#self_ty: ::core::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::replica_core::Reflect for #name #ty_generics #where_clause {
            fn kind() -> ::replica_core::TypeKind {
                ::replica_core::TypeKind::Value
            }

            fn clone_with(&self, visited: &mut ::replica_core::Visited) -> Self {
                ::replica_core::strategy::get_or_compile::<Self>().apply(self, visited)
            }
        }

        impl #impl_generics ::replica_core::Structure for #name #ty_generics #where_clause {
            fn members() -> ::std::vec::Vec<::replica_core::Member<Self>> {
                ::std::vec![
                    #(#members),*
                ]
            }
        }
    })
}

/// Reject `#[reflect(...)]` on the struct itself.
fn reject_struct_level_marker(input: &syn::DeriveInput) -> syn::Result<()> {
    for attr in &input.attrs {
        if attr.path().is_ident("reflect") {
            return Err(syn::Error::new_spanned(
                attr,
                "#[reflect(...)] applies to fields, not to the struct itself",
            ));
        }
    }
    Ok(())
}

/// Parse the `#[reflect(shallow)]` field marker.
fn is_shallow(field: &syn::Field) -> syn::Result<bool> {
    let mut shallow = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("reflect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("shallow") {
                shallow = true;
                Ok(())
            } else {
                Err(meta.error("unknown reflect attribute; expected `shallow`"))
            }
        })?;
    }
    Ok(shallow)
}
