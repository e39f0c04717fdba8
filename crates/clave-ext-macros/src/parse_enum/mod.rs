//! Implementation of the `#[derive(ParseEnum)]` macro.

mod attrs;
mod derive;

pub use derive::parse_enum_derive_impl;
