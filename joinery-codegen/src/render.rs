//! Java builder class rendering.

use indexmap::IndexMap;
use joinery_core::setter_name;
use joinery_ir::QualifiedName;

use crate::CodeBuilder;

/// Rendered builder source together with its persistence identity.
///
/// Opaque text to everything downstream; only the qualified name is
/// interpreted (by the sink, to place the artifact).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    /// Fully qualified name the artifact must be persisted under.
    pub qualified_name: String,
    /// Complete source text of the builder class.
    pub source: String,
}

/// Render the complete source of a builder class.
///
/// Pure and deterministic: identical inputs produce byte-identical text,
/// with setter methods emitted in the field model's iteration order. The
/// builder holds a default-constructed instance of the source type, each
/// field gets one chained method delegating to the matching setter, and
/// `build_method` returns the instance.
///
/// Empty builder or build-method names are caller contract violations and
/// panic rather than degrade into broken output.
pub fn render_builder(
    type_name: &QualifiedName,
    builder_name: &str,
    fields: &IndexMap<String, String>,
    build_method: &str,
) -> RenderedArtifact {
    assert!(!builder_name.is_empty(), "builder name must not be empty");
    assert!(!build_method.is_empty(), "build method name must not be empty");

    let simple = type_name.simple();
    let source = CodeBuilder::java()
        .when(type_name.namespace().is_some(), |b| {
            b.line(&format!(
                "package {};",
                type_name.namespace().unwrap_or_default()
            ))
            .blank()
        })
        .line(&format!("public class {builder_name} {{"))
        .indent()
        .line(&format!("private {simple} object = new {simple}();"))
        .blank()
        .each(fields, |b, (name, ty)| {
            b.line(&format!("public {builder_name} {name}({ty} value) {{"))
                .indent()
                .line(&format!("object.{}(value);", setter_name(name)))
                .line("return this;")
                .dedent()
                .line("}")
                .blank()
        })
        .line(&format!("public {simple} {build_method}() {{"))
        .indent()
        .line("return object;")
        .dedent()
        .line("}")
        .dedent()
        .line("}")
        .build();

    RenderedArtifact {
        qualified_name: type_name.sibling(builder_name),
        source,
    }
}
