//! Joining sequences of strings.

use std::fmt::Display;

/// Joining operators for iterators.
pub trait JoinExt: Iterator {
    /// Joins the items' `Display` output with `separator`.
    ///
    /// ```
    /// use clave_ext_text::JoinExt;
    ///
    /// assert_eq!([1, 2, 3].iter().join_with("-"), "1-2-3");
    /// ```
    fn join_with(self, separator: &str) -> String
    where
        Self: Sized,
        Self::Item: Display,
    {
        let mut out = String::new();
        for (index, item) in self.enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.to_string());
        }
        out
    }

    /// Trims the items and joins the non-blank ones with a single space.
    fn join_with_space(self) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        join_trimmed(self, " ")
    }

    /// Trims the items and joins the non-blank ones with `", "`.
    fn join_with_comma(self) -> String
    where
        Self: Sized,
        Self::Item: AsRef<str>,
    {
        join_trimmed(self, ", ")
    }
}

impl<I: Iterator + ?Sized> JoinExt for I {}

/// Joins `parts` with `separator`, skipping blank parts and trimming the rest.
pub(crate) fn join_trimmed<I>(parts: I, separator: &str) -> String
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_with_separator() {
        assert_eq!(["a", "b"].iter().join_with(", "), "a, b");
        assert_eq!(std::iter::empty::<u8>().join_with(","), "");
        assert_eq!(["", ""].iter().join_with("|"), "|");
    }

    #[test]
    fn join_with_space_skips_blanks() {
        assert_eq!(["some", " ", "thing", ""].iter().join_with_space(), "some thing");
        assert_eq!([" padded ", "words"].iter().join_with_space(), "padded words");
    }

    #[test]
    fn join_with_comma_skips_blanks() {
        let parts = vec![String::from("London"), String::new(), String::from(" UK ")];
        assert_eq!(parts.into_iter().join_with_comma(), "London, UK");
    }

    #[test]
    fn join_with_uses_display() {
        let amounts = [1.5, 2.0];
        assert_eq!(amounts.iter().join_with(" + "), "1.5 + 2");
        assert_eq!(['x'].iter().join_with(","), "x");
    }

    #[test]
    fn all_blank_joins_to_empty() {
        assert_eq!(["", "  ", "\t"].iter().join_with_space(), "");
    }
}
