//! Type-description model for the joinery builder generator.
//!
//! These types are the complete input contract of the generation engine.
//! Any discovery front-end able to produce them (a schema file, a compiler
//! plugin, a CLI-supplied description) can drive generation; the extractor
//! and renderer depend on nothing else.

mod name;
mod request;

pub use name::QualifiedName;
pub use request::{DEFAULT_BUILD_METHOD, GenerationOptions, GenerationRequest, Member, MemberKind};
