//! Manifest types and parsing for joinery.toml files.

mod parse;
mod validate;

use indexmap::IndexMap;
use joinery_ir::{
    DEFAULT_BUILD_METHOD, GenerationOptions, GenerationRequest, Member, MemberKind,
};
use serde::Deserialize;

/// Root manifest for joinery.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Source types that need builders, keyed by qualified name and kept
    /// in declaration order.
    #[serde(default)]
    pub types: IndexMap<String, TypeSpec>,
}

/// One source type declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeSpec {
    /// Builder class name override.
    pub builder: Option<String>,

    /// Terminal method name on the generated builder (defaults to `build`).
    pub build_method: Option<String>,

    /// Declared members, in declaration order.
    #[serde(default)]
    pub members: IndexMap<String, MemberSpec>,
}

/// One declared member of a source type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberSpec {
    /// Member kind; plain entries are fields.
    #[serde(default)]
    pub kind: MemberKind,

    /// Printable type of the member (required for fields at generation time).
    #[serde(rename = "type")]
    pub ty: Option<String>,
}

impl Manifest {
    /// Expand the manifest into one generation request per declared type,
    /// in declaration order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.types
            .iter()
            .map(|(qualified_name, spec)| GenerationRequest {
                qualified_name: qualified_name.clone(),
                members: spec
                    .members
                    .iter()
                    .map(|(name, member)| Member {
                        kind: member.kind,
                        name: name.clone(),
                        type_descriptor: member.ty.clone(),
                    })
                    .collect(),
                options: GenerationOptions {
                    builder_name: spec.builder.clone(),
                    build_method: spec
                        .build_method
                        .clone()
                        .unwrap_or_else(|| DEFAULT_BUILD_METHOD.to_string()),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const VEHICLE_MANIFEST: &str = r#"
        [types."io.rama.vehicle.Vehicle"]

        [types."io.rama.vehicle.Vehicle".members.year]
        type = "int"

        [types."io.rama.vehicle.Vehicle".members.model]
        type = "java.lang.String"

        [types."io.rama.engine.Engine"]
        builder = "EngineAssembler"
        build-method = "assemble"

        [types."io.rama.engine.Engine".members.displacement]
        type = "double"

        [types."io.rama.engine.Engine".members.describe]
        kind = "method"
    "#;

    #[test]
    fn test_requests_cover_every_type_in_order() {
        let manifest = Manifest::from_str(VEHICLE_MANIFEST).unwrap();
        let requests = manifest.requests();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].qualified_name, "io.rama.vehicle.Vehicle");
        assert_eq!(requests[1].qualified_name, "io.rama.engine.Engine");
    }

    #[test]
    fn test_requests_default_options() {
        let manifest = Manifest::from_str(VEHICLE_MANIFEST).unwrap();
        let vehicle = &manifest.requests()[0];

        assert_eq!(vehicle.options.builder_name, None);
        assert_eq!(vehicle.options.build_method, "build");
        assert_eq!(vehicle.members.len(), 2);
        assert_eq!(vehicle.members[0].name, "year");
        assert_eq!(vehicle.members[0].type_descriptor.as_deref(), Some("int"));
    }

    #[test]
    fn test_requests_carry_overrides_and_kinds() {
        let manifest = Manifest::from_str(VEHICLE_MANIFEST).unwrap();
        let engine = &manifest.requests()[1];

        assert_eq!(engine.options.builder_name.as_deref(), Some("EngineAssembler"));
        assert_eq!(engine.options.build_method, "assemble");
        assert_eq!(engine.members[1].kind, MemberKind::Method);
        assert_eq!(engine.members[1].type_descriptor, None);
    }
}
