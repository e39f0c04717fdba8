//! Parsing of the `#[parse_enum(...)]` variant attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Lit, Meta, Result, Token,
};

/// Variant-level attributes from `#[parse_enum(...)]`.
#[derive(Debug, Clone, Default)]
pub struct VariantAttr {
    /// Leave the variant out of parsing.
    pub skip: bool,
    /// Canonical name replacing the identifier.
    pub rename: Option<String>,
    /// Extra names accepted when parsing.
    pub aliases: Vec<String>,
}

impl Parse for VariantAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = VariantAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,

                Meta::NameValue(nv) => {
                    let value = match &nv.value {
                        Expr::Lit(ExprLit {
                            lit: Lit::Str(s), ..
                        }) => s.value(),
                        other => {
                            return Err(Error::new(other.span(), "expected a string literal"));
                        }
                    };

                    if value.trim().is_empty() || value.trim() != value {
                        return Err(Error::new(
                            nv.value.span(),
                            "names must be non-empty without surrounding whitespace",
                        ));
                    }

                    if nv.path.is_ident("rename") {
                        if attr.rename.is_some() {
                            return Err(Error::new(nv.path.span(), "duplicate rename"));
                        }
                        attr.rename = Some(value);
                    } else if nv.path.is_ident("alias") {
                        attr.aliases.push(value);
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or alias",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown parse_enum attribute. Expected: skip, rename = \"...\", or alias = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Merges every `#[parse_enum(...)]` attribute on a variant.
pub fn parse_variant_attrs(attrs: &[Attribute]) -> Result<VariantAttr> {
    let mut merged = VariantAttr::default();

    for attr in attrs {
        if !attr.path().is_ident("parse_enum") {
            continue;
        }
        let parsed = attr.parse_args::<VariantAttr>()?;
        merged.skip |= parsed.skip;
        if let Some(rename) = parsed.rename {
            if merged.rename.is_some() {
                return Err(Error::new(attr.span(), "duplicate rename"));
            }
            merged.rename = Some(rename);
        }
        merged.aliases.extend(parsed.aliases);
    }

    Ok(merged)
}
