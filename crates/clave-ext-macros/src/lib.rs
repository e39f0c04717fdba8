//! Derive macros for clave-ext.
//!
//! - [`ParseEnum`]: name table, `FromStr` and `Display` for fieldless enums.
//!
//! Generated code refers to `::clave_ext::text`, so the derive is used
//! through the `clave-ext` facade (feature `macros`, on by default) as
//! `clave_ext::ParseEnum`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod parse_enum;

/// Derives `ParseEnum`, `FromStr` and `Display` for a fieldless enum.
///
/// Variants are matched by their identifier, exactly and case-sensitively,
/// after trimming surrounding whitespace.
///
/// # Variant Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `rename = "name"` | Match and display `name` instead of the identifier |
/// | `alias = "name"` | Also accept `name` when parsing (repeatable) |
/// | `skip` | Never produced by parsing; still displayed by identifier |
///
/// See the `clave-ext` crate documentation for a worked example.
#[proc_macro_derive(ParseEnum, attributes(parse_enum))]
pub fn parse_enum_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    parse_enum::parse_enum_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
