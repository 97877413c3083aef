//! Per-request generation errors.

use thiserror::Error;

/// Failure of a single generation request.
///
/// Every variant is caught at the per-request boundary by the batch
/// orchestrator and recorded; one failing request never stops the rest of
/// the batch. Contract violations (empty type or method names) are not
/// errors of this kind, they panic in the caller's face instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A declared data member has no printable type descriptor.
    #[error("member `{member}` has no printable type")]
    MissingType { member: String },

    /// Two data members share a name within one type.
    #[error("duplicate field `{name}`")]
    DuplicateField { name: String },

    /// The output artifact could not be created or written.
    #[error("could not write artifact: {0}")]
    Sink(#[from] std::io::Error),
}
