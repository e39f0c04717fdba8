//! Calling a function with a value as its first argument.
//!
//! Mostly useful at the end of a method chain, or together with
//! `Option::map` when the value may be absent:
//!
//! ```
//! use clave_ext::Pipe;
//!
//! fn shout(s: &str) -> String {
//!     s.to_uppercase()
//! }
//!
//! assert_eq!("hi".pipe(shout), "HI");
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.map(|s| s.pipe(shout)), None);
//! ```

/// Postfix function application, available on every value.
pub trait Pipe: Sized {
    /// Returns `f(self)`.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Returns `f(self, b)`.
    fn pipe2<B, R, F>(self, f: F, b: B) -> R
    where
        F: FnOnce(Self, B) -> R,
    {
        f(self, b)
    }

    /// Returns `f(self, b, c)`.
    fn pipe3<B, C, R, F>(self, f: F, b: B, c: C) -> R
    where
        F: FnOnce(Self, B, C) -> R,
    {
        f(self, b, c)
    }
}

impl<T> Pipe for T {}
