//! Key-projection equality and lazy sequence adapters.
//!
//! This crate provides two things:
//!
//! - [`KeyEq`]: an equality and hash strategy for `T` built from a projection
//!   `Fn(&T) -> K`. Equality and hashing both delegate to `K`, so the
//!   "equal implies same hash" contract holds by construction.
//! - [`SeqExt`] and [`ItemExt`]: extension traits adding lazy operators to
//!   every iterator (`distinct_by`, `group_by_prop`, `except_by`,
//!   `where_not`, `inner_join`, `tap`, ...) and sequence constructors to
//!   every value (`only`, `followed_by`).
//!
//! # Quick Start
//!
//! ```rust
//! use clave_ext_seq::{ItemExt, SeqExt};
//!
//! #[derive(Debug, Clone)]
//! struct Foo {
//!     prop: String,
//! }
//!
//! let foo = |s: &str| Foo { prop: s.to_string() };
//!
//! let distinct: Vec<_> = foo("1")
//!     .followed_by([foo("1"), foo("b"), foo("b")])
//!     .distinct_by(|f| f.prop.clone())
//!     .collect();
//! assert_eq!(distinct.len(), 2);
//!
//! let remaining: Vec<_> = ["12", "13", "22", "21"]
//!     .into_iter()
//!     .except_by(["13"], |s| s.to_string())
//!     .collect();
//! assert_eq!(remaining, ["12", "22", "21"]);
//! ```
//!
//! # Laziness
//!
//! Building an adapter never pulls from its source. Adapters that need a
//! whole second input (`except_by`, `inner_join`) or the whole source
//! (`group_by_prop`) drain it on their first `next` call, not before.
//!
//! | Operator | Notes |
//! |----------|-------|
//! | `not_any`, `not_any_matching` | Short-circuit |
//! | `where_not`, `where_not_none`, `where_not_none_by` | Streaming |
//! | `distinct_by` | Streaming, first item per key wins |
//! | `except_by` | Drains `second` on first pull |
//! | `group_by_prop`, `group_by_key` | Drains source on first pull |
//! | `inner_join` | Drains `right` on first pull |
//! | `map2`, `map3`, `tap` | Streaming |
//! | `to_list`, `each` | Eager |

mod distinct;
mod ext;
mod filter;
mod group;
mod join;
mod key_eq;
mod list;
pub mod seq;
mod tap;
mod tuple;

// Re-export public API
pub use distinct::{DistinctBy, ExceptBy};
pub use ext::{ItemExt, SeqExt};
pub use filter::{WhereNot, WhereNotNone, WhereNotNoneBy};
pub use group::{GroupByProp, Grouping};
pub use join::InnerJoin;
pub use key_eq::{compare_by, Compare, KeyEq, Keyed};
pub use list::IntoList;
pub use tap::Tap;
pub use tuple::{Map2, Map3};
