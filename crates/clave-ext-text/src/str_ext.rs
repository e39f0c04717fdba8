//! Conversions and small helpers on `str`.

use log::debug;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::join::join_trimmed;
use crate::number::{parse_decimal, parse_int};
use crate::variant::{parse_enum, ParseEnum};

/// Helpers available on every `str`.
pub trait StrExt {
    /// `None` for the empty string, the string otherwise.
    fn none_if_empty(&self) -> Option<&str>;

    /// `None` for empty or whitespace-only strings, the string otherwise.
    fn none_if_whitespace(&self) -> Option<&str>;

    /// The remainder after `prefix`, or the whole string when it does not
    /// start with `prefix`.
    fn skip_prefix(&self, prefix: &str) -> &str;

    /// Joins `self` and the non-blank parts of `rest`, trimmed, with a space.
    fn concat_with_space<I>(&self, rest: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Joins `self` and the non-blank parts of `rest`, trimmed, with `", "`.
    fn concat_with_comma<I>(&self, rest: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Parses an `i32`, or returns 0.
    fn to_int(&self) -> i32 {
        self.to_int_or(0)
    }

    /// Parses an `i32`, or returns `fallback`.
    fn to_int_or(&self, fallback: i32) -> i32;

    /// Parses a [`Decimal`], or returns zero.
    fn to_decimal(&self) -> Decimal {
        self.to_decimal_or(Decimal::ZERO)
    }

    /// Parses a [`Decimal`], or returns `fallback`.
    fn to_decimal_or(&self, fallback: Decimal) -> Decimal;

    /// Parses a variant of `T` by name.
    fn to_enum<T: ParseEnum>(&self) -> Result<T>;

    /// Parses a variant of `T` by name, or returns `fallback`.
    fn to_enum_or<T: ParseEnum>(&self, fallback: T) -> T;
}

impl StrExt for str {
    fn none_if_empty(&self) -> Option<&str> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    fn none_if_whitespace(&self) -> Option<&str> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }

    fn skip_prefix(&self, prefix: &str) -> &str {
        self.strip_prefix(prefix).unwrap_or(self)
    }

    fn concat_with_space<I>(&self, rest: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        concat(self, rest, " ")
    }

    fn concat_with_comma<I>(&self, rest: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        concat(self, rest, ", ")
    }

    fn to_int_or(&self, fallback: i32) -> i32 {
        parse_int(self).unwrap_or_else(|| {
            debug!("to_int: {self:?} is not an integer, using {fallback}");
            fallback
        })
    }

    fn to_decimal_or(&self, fallback: Decimal) -> Decimal {
        parse_decimal(self).unwrap_or_else(|| {
            debug!("to_decimal: {self:?} is not a decimal, using {fallback}");
            fallback
        })
    }

    fn to_enum<T: ParseEnum>(&self) -> Result<T> {
        parse_enum(self)
    }

    fn to_enum_or<T: ParseEnum>(&self, fallback: T) -> T {
        match parse_enum(self) {
            Ok(value) => value,
            Err(err) => {
                debug!("to_enum: {err}, using {}", fallback.variant_name());
                fallback
            }
        }
    }
}

fn concat<I>(initial: &str, rest: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let rest: Vec<I::Item> = rest.into_iter().collect();
    join_trimmed(
        std::iter::once(initial).chain(rest.iter().map(AsRef::as_ref)),
        separator,
    )
}
