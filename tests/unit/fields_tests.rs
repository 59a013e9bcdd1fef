//! Unit tests for field names and option defaults

use buildstamp::{Error, Field, VersionOptions};
use std::path::Path;

#[test]
fn test_field_names_round_trip() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        assert_eq!(field.to_string(), field.as_str());
    }
}

#[test]
fn test_canonical_order() {
    let names: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(names, ["version", "revision", "builtAt"]);
}

#[test]
fn test_unknown_field_is_invalid_input() {
    let err = "built_at".parse::<Field>().unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("built_at"));
}

#[test]
fn test_option_defaults() {
    let options = VersionOptions::default();
    assert_eq!(options.file_name, "version.json");
    assert_eq!(options.output_subdirectory, None);
    assert_eq!(options.fields, Field::ALL.to_vec());
    assert_eq!(options.fallback_revision, "unknown");
    assert!(options.pretty);
    assert_eq!(options.manifest_path, Path::new("package.json"));
    assert!(Field::ALL.into_iter().all(|f| options.wants(f)));
}
