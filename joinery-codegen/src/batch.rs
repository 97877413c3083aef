//! Batch orchestration with per-request failure isolation.

use joinery_core::ArtifactSink;
use joinery_ir::{GenerationRequest, QualifiedName};

use crate::{GenerateError, RenderedArtifact, extract_fields, render_builder};

/// Render one request without touching any sink.
///
/// This is the pure half of the pipeline: split the qualified name, resolve
/// the effective builder name, extract the field model, render the source.
pub fn render_request(request: &GenerationRequest) -> Result<RenderedArtifact, GenerateError> {
    let type_name = QualifiedName::parse(&request.qualified_name);
    let builder_name = request.options.builder_name_for(type_name.simple());
    let fields = extract_fields(&request.members)?;
    Ok(render_builder(
        &type_name,
        &builder_name,
        &fields,
        &request.options.build_method,
    ))
}

/// Process every request in order, writing artifacts to the sink.
///
/// Requests are handled one at a time; a failing request is recorded with
/// its type and intended builder name and the batch moves on. The report
/// always covers the full input, one outcome per request, in input order.
pub fn run_batch(requests: &[GenerationRequest], sink: &impl ArtifactSink) -> BatchReport {
    let mut outcomes = Vec::with_capacity(requests.len());
    for request in requests {
        let type_name = QualifiedName::parse(&request.qualified_name);
        let builder_name = request.options.builder_name_for(type_name.simple());
        let status = match process(request, sink) {
            Ok(artifact) => RequestStatus::Written {
                qualified_builder: artifact.qualified_name,
            },
            Err(error) => RequestStatus::Failed(error),
        };
        outcomes.push(RequestOutcome {
            type_name: request.qualified_name.clone(),
            builder_name,
            status,
        });
    }
    BatchReport { outcomes }
}

fn process(
    request: &GenerationRequest,
    sink: &impl ArtifactSink,
) -> Result<RenderedArtifact, GenerateError> {
    let artifact = render_request(request)?;
    sink.write(&artifact.qualified_name, &artifact.source)?;
    Ok(artifact)
}

/// Outcome of one request within a batch.
#[derive(Debug)]
pub struct RequestOutcome {
    /// Qualified name of the source type.
    pub type_name: String,
    /// Builder class name the request intended to generate.
    pub builder_name: String,
    pub status: RequestStatus,
}

#[derive(Debug)]
pub enum RequestStatus {
    /// The artifact was rendered and fully written.
    Written { qualified_builder: String },
    /// The request failed; nothing was left at its output location.
    Failed(GenerateError),
}

/// Per-request outcomes for a completed batch.
///
/// The batch itself never aborts; every failure is attributable to exactly
/// one request.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RequestOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, RequestStatus::Written { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}
