//! String joining, lenient number parsing and enum name conversion.
//!
//! - [`JoinExt`]: `join_with`, `join_with_space`, `join_with_comma` on any
//!   iterator of strings or displayable items.
//! - [`StrExt`]: `none_if_empty`, `skip_prefix`, `concat_with_*` and the
//!   `to_int`, `to_decimal`, `to_enum` conversions on `str`. Conversions that
//!   fail fall back to a default and log the input at `debug` level.
//! - [`ParseEnum`]: the name table behind `to_enum`, usually derived.
//!
//! ```
//! use clave_ext_text::{JoinExt, StrExt};
//!
//! assert_eq!(["Main St", "", " Springfield "].iter().join_with_comma(), "Main St, Springfield");
//! assert_eq!(" 42 ".to_int(), 42);
//! assert_eq!("n/a".to_int_or(-1), -1);
//! assert_eq!("".none_if_empty(), None);
//! ```

mod error;
mod join;
mod number;
mod str_ext;
mod variant;

// Re-export public API
pub use error::{ParseEnumError, Result};
pub use join::JoinExt;
pub use number::{parse_decimal, parse_int};
pub use rust_decimal::Decimal;
pub use str_ext::StrExt;
pub use variant::{parse_enum, ParseEnum};
