//! TOML manifest parsing and validation for joinery.
//!
//! A `joinery.toml` declares the source types that need builders, their
//! members, and per-type generation options. Parsing produces a
//! [`Manifest`]; [`Manifest::requests`] turns it into the neutral
//! generation requests the engine consumes.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{Manifest, MemberSpec, TypeSpec};
