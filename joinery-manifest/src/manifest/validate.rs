//! Manifest validation.
//!
//! Names declared in the manifest become Java symbols in the generated
//! sources, so they are checked up front: every qualified-name segment,
//! member name, builder override, and build-method name must be a valid,
//! non-reserved Java identifier. Type descriptors are not checked; they
//! are emitted verbatim.

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Java language keywords plus the literals that cannot be identifiers.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "null", "package", "private", "protected", "public", "return",
    "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

fn is_reserved(name: &str) -> bool {
    JAVA_RESERVED.contains(&name)
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn validate_identifier(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    if !is_valid_identifier(name) {
        return Err(ctx.invalid_identifier_error(name, context));
    }
    if is_reserved(name) {
        return Err(ctx.reserved_keyword_error(name, context));
    }
    Ok(())
}

/// Validate the manifest after parsing.
pub fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    for (qualified_name, spec) in &manifest.types {
        if qualified_name.is_empty() {
            return Err(ctx.validation_error("type name must not be empty"));
        }
        for segment in qualified_name.split('.') {
            validate_identifier(segment, &format!("segment of type '{qualified_name}'"), ctx)?;
        }

        if let Some(builder) = spec.builder.as_deref()
            && !builder.is_empty()
        {
            validate_identifier(builder, &format!("builder for '{qualified_name}'"), ctx)?;
        }

        if let Some(build_method) = spec.build_method.as_deref() {
            validate_identifier(
                build_method,
                &format!("build method for '{qualified_name}'"),
                ctx,
            )?;
        }

        for name in spec.members.keys() {
            validate_identifier(name, &format!("member in '{qualified_name}'"), ctx)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::Error;

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("year"));
        assert!(is_valid_identifier("_internal"));
        assert!(is_valid_identifier("$gen0"));
        assert!(is_valid_identifier("fuelTankSize"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1year"));
        assert!(!is_valid_identifier("fuel-tank"));
        assert!(!is_valid_identifier("fuel tank"));
    }

    #[test]
    fn test_reserved_member_name_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [types.Vehicle.members.class]
            type = "int"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "class"));
    }

    #[test]
    fn test_invalid_type_segment_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [types."io.2rama.Vehicle".members.year]
            type = "int"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "2rama"));
    }

    #[test]
    fn test_empty_build_method_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [types.Vehicle]
            build-method = ""
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_empty_builder_override_is_allowed() {
        // An empty override means "use the default name" downstream.
        let manifest = Manifest::from_str(
            r#"
            [types.Vehicle]
            builder = ""
            "#,
        )
        .unwrap();
        assert_eq!(manifest.types["Vehicle"].builder.as_deref(), Some(""));
    }

    #[test]
    fn test_reserved_builder_override_is_rejected() {
        let err = Manifest::from_str(
            r#"
            [types.Vehicle]
            builder = "new"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "new"));
    }
}
