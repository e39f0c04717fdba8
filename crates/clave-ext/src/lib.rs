//! # clave-ext - Extension methods for everyday Rust
//!
//! Small, composable helpers on top of the standard library:
//!
//! - [`seq`]: key-projection equality ([`seq::KeyEq`]) and lazy iterator
//!   operators (`distinct_by`, `group_by_prop`, `except_by`, `where_not`,
//!   `inner_join`, `tap`, ...)
//! - [`text`]: string joining, lenient number parsing and enum conversion
//! - [`Pipe`]: postfix function application
//! - [`AddItems`] and [`ReadOnlyMap`]: bulk insertion and read-only views for
//!   the std collections and [`IndexMap`](indexmap::IndexMap)
//! - [`FutureSeqExt`] and [`WhenAll`]: the sequence operators over futures
//!   (feature `async`, on by default)
//! - `#[derive(ParseEnum)]` (feature `macros`, on by default)
//!
//! Most code only needs the prelude:
//!
//! ```rust
//! use clave_ext::prelude::*;
//!
//! #[derive(Debug)]
//! struct Order {
//!     id: u32,
//!     city: &'static str,
//! }
//!
//! let orders = vec![
//!     Order { id: 1, city: "Oslo" },
//!     Order { id: 2, city: "Bergen" },
//!     Order { id: 3, city: "Oslo" },
//! ];
//!
//! let cities = orders
//!     .iter()
//!     .distinct_by(|o| o.city)
//!     .map(|o| o.city)
//!     .join_with_comma();
//! assert_eq!(cities, "Oslo, Bergen");
//!
//! let per_city: Vec<_> = orders
//!     .iter()
//!     .group_by_key(|o| o.city)
//!     .map(|g| (*g.key(), g.len()))
//!     .collect();
//! assert_eq!(per_city, [("Oslo", 2), ("Bergen", 1)]);
//!
//! assert_eq!("3".to_int().pipe(|n| n * 2), 6);
//! ```
//!
//! ## Enum conversion
//!
//! `#[derive(ParseEnum)]` generates the name table behind `to_enum`, plus
//! `FromStr` and `Display`. Variants can be renamed, given extra aliases,
//! or kept out of parsing:
//!
//! ```rust
//! # #[cfg(feature = "macros")]
//! # {
//! use clave_ext::prelude::*;
//! use clave_ext::ParseEnum;
//!
//! #[derive(Debug, PartialEq, ParseEnum)]
//! enum Status {
//!     Open,
//!     #[parse_enum(rename = "in-progress", alias = "InProgress")]
//!     InProgress,
//!     #[parse_enum(skip)]
//!     Unknown,
//! }
//!
//! assert_eq!("Open".to_enum::<Status>(), Ok(Status::Open));
//! assert_eq!("in-progress".parse::<Status>(), Ok(Status::InProgress));
//! assert_eq!("InProgress".to_enum::<Status>(), Ok(Status::InProgress));
//! assert_eq!(Status::InProgress.to_string(), "in-progress");
//! assert_eq!("Unknown".to_enum_or(Status::Open), Status::Open);
//! assert_eq!("blabla".to_enum_or(Status::Open), Status::Open);
//! # }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: parse
//! fallbacks are reported at `debug`, and the operators that materialize a
//! whole input report its size at `trace`. Nothing is printed unless the
//! application installs a logger.

mod collect;
#[cfg(feature = "async")]
mod future;
mod pipe;

/// Key-projection equality and lazy sequence operators.
pub mod seq {
    pub use clave_ext_seq::seq::{and, only, zip};
    pub use clave_ext_seq::*;
}

/// String, number and enum helpers.
pub mod text {
    pub use clave_ext_text::*;
}

pub use collect::{AddItems, ReadOnlyMap, ToReadOnlyMap};
#[cfg(feature = "async")]
pub use future::{FutureSeqExt, WhenAll};
pub use pipe::Pipe;

// Derive macro (requires `features = ["macros"]`)
#[cfg(feature = "macros")]
pub use clave_ext_macros::ParseEnum;

/// The extension traits, for glob import.
pub mod prelude {
    pub use crate::collect::{AddItems, ToReadOnlyMap};
    #[cfg(feature = "async")]
    pub use crate::future::{FutureSeqExt, WhenAll};
    pub use crate::pipe::Pipe;
    pub use clave_ext_seq::{IntoList, ItemExt, SeqExt};
    pub use clave_ext_text::{JoinExt, StrExt};
}
