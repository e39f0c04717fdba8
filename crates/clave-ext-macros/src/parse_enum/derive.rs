//! Implementation of the `#[derive(ParseEnum)]` macro.
//!
//! Generates the `ParseEnum` name table plus `FromStr` and `Display`
//! implementations that go through it.

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_variant_attrs;

/// Main implementation of the ParseEnum derive macro.
pub fn parse_enum_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(Error::new(
                input.span(),
                "ParseEnum can only be derived for enums",
            ))
        }
    };

    let mut listed: Vec<String> = Vec::new();
    let mut parse_arms: Vec<TokenStream> = Vec::new();
    let mut name_arms: Vec<TokenStream> = Vec::new();
    let mut claimed: HashMap<String, Span> = HashMap::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.span(),
                "ParseEnum variants cannot have fields",
            ));
        }

        let ident = &variant.ident;
        let attrs = parse_variant_attrs(&variant.attrs)?;
        let canonical = attrs.rename.unwrap_or_else(|| ident.to_string());

        name_arms.push(quote! {
            #enum_name::#ident => #canonical,
        });

        if attrs.skip {
            continue;
        }

        let mut accepted = vec![canonical.clone()];
        accepted.extend(attrs.aliases);

        for name in &accepted {
            if let Some(first) = claimed.insert(name.clone(), ident.span()) {
                let mut err = Error::new(
                    ident.span(),
                    format!("the name '{name}' is used by more than one variant"),
                );
                err.combine(Error::new(first, "first used here"));
                return Err(err);
            }
        }

        parse_arms.push(quote! {
            #(#accepted)|* => ::core::option::Option::Some(#enum_name::#ident),
        });
        listed.push(canonical);
    }

    let type_name = enum_name.to_string();
    let variant_name_body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#name_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::clave_ext::text::ParseEnum for #enum_name #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const VARIANTS: &'static [&'static str] = &[#(#listed),*];

            fn parse_variant(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#parse_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn variant_name(&self) -> &'static str {
                #variant_name_body
            }
        }

        impl #impl_generics ::core::str::FromStr for #enum_name #ty_generics #where_clause {
            type Err = ::clave_ext::text::ParseEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                ::clave_ext::text::parse_enum(s)
            }
        }

        impl #impl_generics ::core::fmt::Display for #enum_name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::clave_ext::text::ParseEnum::variant_name(self))
            }
        }
    };

    Ok(expanded)
}
