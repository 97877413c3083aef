//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::validate_manifest};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "joinery.toml")
    }
}

impl Manifest {
    /// Parse a joinery.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a joinery.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [types."io.rama.vehicle.Vehicle".members.year]
            type = "int"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.types.len(), 1);
        let spec = &manifest.types["io.rama.vehicle.Vehicle"];
        assert_eq!(spec.members["year"].ty.as_deref(), Some("int"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.types.is_empty());
    }

    #[test]
    fn test_parse_preserves_member_order() {
        let manifest = Manifest::from_str(
            r#"
            [types.Vehicle.members.year]
            type = "int"
            [types.Vehicle.members.model]
            type = "java.lang.String"
            [types.Vehicle.members.make]
            type = "java.lang.String"
            "#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.types["Vehicle"]
            .members
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, ["year", "model", "make"]);
    }

    #[test]
    fn test_parse_error_reports_toml_problem() {
        let err = Manifest::from_str("types = not-a-table").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Manifest::from_file("/nonexistent/joinery.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
