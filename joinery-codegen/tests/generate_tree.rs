//! End-to-end generation: manifest in, source tree out.

use std::fs;
use std::str::FromStr;

use joinery_codegen::run_batch;
use joinery_core::SourceTree;
use joinery_manifest::Manifest;
use tempfile::TempDir;

const MANIFEST: &str = r#"
    [types."io.rama.vehicle.Vehicle".members.year]
    type = "int"

    [types."io.rama.vehicle.Vehicle".members.model]
    type = "java.lang.String"

    [types.Standalone.members.id]
    type = "long"
"#;

#[test]
fn test_manifest_to_source_tree() {
    let temp = TempDir::new().unwrap();
    let manifest = Manifest::from_str(MANIFEST).unwrap();
    let sink = SourceTree::java(temp.path());

    let report = run_batch(&manifest.requests(), &sink);

    assert!(report.is_clean());
    assert_eq!(report.succeeded(), 2);

    let vehicle = fs::read_to_string(
        temp.path()
            .join("io")
            .join("rama")
            .join("vehicle")
            .join("VehicleBuilder.java"),
    )
    .unwrap();
    assert!(vehicle.starts_with("package io.rama.vehicle;\n"));
    assert!(vehicle.contains("public VehicleBuilder model(java.lang.String value) {"));

    let standalone = fs::read_to_string(temp.path().join("StandaloneBuilder.java")).unwrap();
    assert!(standalone.starts_with("public class StandaloneBuilder {"));
    assert!(standalone.contains("object.setId(value);"));
}

#[test]
fn test_blocked_output_fails_only_that_request() {
    let temp = TempDir::new().unwrap();
    // Occupy the `io` directory slot with a plain file so the namespaced
    // request cannot create its output path.
    fs::write(temp.path().join("io"), "in the way").unwrap();

    let manifest = Manifest::from_str(MANIFEST).unwrap();
    let sink = SourceTree::java(temp.path());

    let report = run_batch(&manifest.requests(), &sink);

    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    // The unaffected request still produced its artifact.
    assert!(temp.path().join("StandaloneBuilder.java").exists());
    // The failed request left no partial artifact behind.
    assert!(!temp.path().join("io").is_dir());
}
