//! Procedural macros for the restash project.
//!
//! This crate provides the `#[derive(Entity)]` macro, which implements the
//! `Entity` trait from `#[entity(...)]` attributes. It is re-exported by the
//! `restash` facade crate and the generated code resolves trait paths through
//! it, so derive through the facade rather than depending on this crate
//! directly.
//!
//! # Example
//!
//! ```ignore
//! use restash::Entity;
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize, Entity)]
//! #[entity(table = "people")]
//! pub struct Person {
//!     #[entity(id)]
//!     pub id: i64,
//!     #[entity(searchable)]
//!     pub name: String,
//!     pub email: String,
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as restash_macros;

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Type, parse_macro_input};

/// Derives the `Entity` trait.
///
/// Attributes:
///
/// - `#[entity(table = "...")]` on the struct sets the table (resource) name;
///   it defaults to the struct's name.
/// - `#[entity(id)]` marks the identifier field (required, exactly one,
///   must be `i64`).
/// - `#[entity(searchable)]` marks a field as participating in substring
///   search.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand_entity(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand_entity(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;
    let mut table = ident.to_string();

    for attr in &input.attrs {
        if !attr.path().is_ident("entity") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                let name: LitStr = meta.value()?.parse()?;
                table = name.value();
                Ok(())
            } else {
                Err(meta.error("expected `table = \"...\"`"))
            }
        })?;
    }

    let fields = named_fields(&input)?;

    let mut id_field: Option<Ident> = None;
    let mut searchable: Vec<String> = Vec::new();

    for field in fields {
        let field_ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;

        for attr in &field.attrs {
            if !attr.path().is_ident("entity") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    if id_field.is_some() {
                        return Err(meta.error("only one field may be marked #[entity(id)]"));
                    }
                    if !is_i64(&field.ty) {
                        return Err(meta.error("the #[entity(id)] field must be of type i64"));
                    }
                    id_field = Some(field_ident.clone());
                    Ok(())
                } else if meta.path.is_ident("searchable") {
                    searchable.push(field_ident.to_string());
                    Ok(())
                } else {
                    Err(meta.error("expected `id` or `searchable`"))
                }
            })?;
        }
    }

    let id_field = id_field.ok_or_else(|| {
        Error::new_spanned(ident, "one field must be marked #[entity(id)]")
    })?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::restash::Entity for #ident #ty_generics #where_clause {
            fn id(&self) -> i64 {
                self.#id_field
            }

            fn table_name() -> &'static str {
                #table
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[#(#searchable),*]
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&syn::punctuated::Punctuated<syn::Field, syn::Token![,]>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            other => Err(Error::new_spanned(
                &input.ident,
                format!("Entity can only be derived for structs with named fields, not {}", fields_kind(other)),
            )),
        },
        _ => Err(Error::new_spanned(
            &input.ident,
            "Entity can only be derived for structs",
        )),
    }
}

fn fields_kind(fields: &Fields) -> &'static str {
    match fields {
        Fields::Named(_) => "named fields",
        Fields::Unnamed(_) => "tuple fields",
        Fields::Unit => "a unit struct",
    }
}

fn is_i64(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.path.segments.last().is_some_and(|s| s.ident == "i64"))
}
