//! Builder class generation engine for joinery.
//!
//! The engine turns [`joinery_ir::GenerationRequest`]s into Java builder
//! sources in three steps: extract the field model from the request's
//! member list, render it into source text, and hand the text to an
//! [`joinery_core::ArtifactSink`]. Batches are processed one request at a
//! time with per-request failure isolation.

mod batch;
mod code_builder;
mod error;
mod extract;
mod render;

pub use batch::{BatchReport, RequestOutcome, RequestStatus, render_request, run_batch};
pub use code_builder::{CodeBuilder, Indent};
pub use error::GenerateError;
pub use extract::extract_fields;
pub use render::{RenderedArtifact, render_builder};
