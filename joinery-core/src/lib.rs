//! Core utilities for the joinery builder generator.
//!
//! This crate provides the artifact output abstraction and the naming
//! helpers shared across the joinery ecosystem.

mod file;
mod utils;

// Artifact output
pub use file::{ArtifactSink, SourceTree};
// Naming helpers
pub use utils::{capitalize_first, setter_name};
