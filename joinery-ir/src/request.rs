//! Generation requests and their member descriptors.

use serde::{Deserialize, Serialize};

/// Terminal method name used when a request does not pick its own.
pub const DEFAULT_BUILD_METHOD: &str = "build";

/// What kind of member a source type declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// A data member; contributes one entry to the field model.
    #[default]
    Field,
    /// A method; ignored by extraction.
    Method,
    /// Anything else (nested type, initializer, ...); ignored by extraction.
    Other,
}

/// One declared member of a source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    /// Printable, compilable spelling of the member's type.
    /// Only meaningful for fields; a field without one fails its request.
    pub type_descriptor: Option<String>,
}

impl Member {
    /// A data member with the given name and type.
    pub fn field(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Field,
            name: name.into(),
            type_descriptor: Some(ty.into()),
        }
    }

    /// A method member (carries no type descriptor).
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Method,
            name: name.into(),
            type_descriptor: None,
        }
    }
}

/// Options applied to a single generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Builder class name override; `<SimpleName>Builder` when unset or empty.
    pub builder_name: Option<String>,
    /// Name of the terminal method returning the built instance.
    pub build_method: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            builder_name: None,
            build_method: DEFAULT_BUILD_METHOD.to_string(),
        }
    }
}

impl GenerationOptions {
    /// Effective builder class name for a type with the given simple name.
    pub fn builder_name_for(&self, simple_name: &str) -> String {
        match self.builder_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{simple_name}Builder"),
        }
    }
}

/// One unit of generation work.
///
/// Built fresh per discovered type per pass and consumed exactly once;
/// it has no identity or mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Dot-separated namespace and simple name of the source type.
    pub qualified_name: String,
    /// Declared members, in declaration order.
    pub members: Vec<Member>,
    pub options: GenerationOptions,
}
