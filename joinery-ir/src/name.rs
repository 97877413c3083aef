//! Qualified type names.

/// A dot-separated type name split into namespace and simple name.
///
/// The split happens once, on the final separator; both halves are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    namespace: Option<String>,
    simple: String,
}

impl QualifiedName {
    /// Split a qualified name on its final `.`.
    ///
    /// A name with no separator is a top-level type with no namespace.
    /// An empty name or empty simple-name portion is a caller contract
    /// violation.
    pub fn parse(qualified: &str) -> Self {
        assert!(!qualified.is_empty(), "type name must not be empty");
        match qualified.rsplit_once('.') {
            Some((namespace, simple)) => {
                assert!(!simple.is_empty(), "type name `{qualified}` has no simple name");
                Self {
                    namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
                    simple: simple.to_string(),
                }
            }
            None => Self {
                namespace: None,
                simple: qualified.to_string(),
            },
        }
    }

    /// Namespace portion, absent for top-level types.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Simple (unqualified) type name.
    pub fn simple(&self) -> &str {
        &self.simple
    }

    /// Qualified name of a companion type living in the same namespace.
    pub fn sibling(&self, simple: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{simple}"),
            None => simple.to_string(),
        }
    }
}
