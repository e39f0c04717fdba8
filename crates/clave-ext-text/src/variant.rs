//! Converting strings to fieldless enums by variant name.
//!
//! [`ParseEnum`] is normally derived with `#[derive(ParseEnum)]` from the
//! facade crate, which also generates `FromStr` and `Display`. It can be
//! implemented by hand for enums that need custom matching.

use crate::error::{ParseEnumError, Result};

/// A fieldless enum whose variants can be named and parsed.
///
/// ```
/// use clave_ext_text::{parse_enum, ParseEnum};
///
/// #[derive(Debug, PartialEq)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl ParseEnum for Light {
///     const NAME: &'static str = "Light";
///     const VARIANTS: &'static [&'static str] = &["Red", "Green"];
///
///     fn parse_variant(name: &str) -> Option<Self> {
///         match name {
///             "Red" => Some(Light::Red),
///             "Green" => Some(Light::Green),
///             _ => None,
///         }
///     }
///
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Light::Red => "Red",
///             Light::Green => "Green",
///         }
///     }
/// }
///
/// assert_eq!(parse_enum::<Light>(" Green "), Ok(Light::Green));
/// assert!(parse_enum::<Light>("green").is_err());
/// ```
pub trait ParseEnum: Sized {
    /// The enum's type name, used in error messages.
    const NAME: &'static str;

    /// Canonical names of the parseable variants, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Matches an exact, already trimmed name.
    fn parse_variant(name: &str) -> Option<Self>;

    /// The canonical name of this variant.
    fn variant_name(&self) -> &'static str;
}

/// Parses `value` as a variant of `T`.
///
/// Surrounding whitespace is ignored; matching is case-sensitive.
pub fn parse_enum<T: ParseEnum>(value: &str) -> Result<T> {
    let name = value.trim();
    if name.is_empty() {
        return Err(ParseEnumError::Empty { type_name: T::NAME });
    }

    T::parse_variant(name).ok_or_else(|| ParseEnumError::UnknownVariant {
        value: name.to_string(),
        type_name: T::NAME,
        expected: T::VARIANTS,
    })
}
