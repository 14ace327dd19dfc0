use archetype::config::{load_config, parse_config, InputType, TransformationKind};
use archetype::error::Error;
use tempfile::TempDir;

const SPEC: &str = r#"
ignore:
  - ".git/**"
  - "transformations.yml"
inputs:
  - id: name
    text: Project name?
    type: text
    default: my-app
  - id: include_ci
    text: Include CI configuration?
    type: yesno
  - id: license
    text: License?
    type: select
    options: [MIT, Apache-2.0]
transformations:
  - name: ci
    type: include
    condition: include_ci
    files: [".github/**"]
  - name: readme ci section
    type: include
    condition: include_ci
    region_marker: CI
    files: ["README.md"]
  - name: project name
    type: replace
    pattern: sample-app
    replacement: "{{ name }}"
    files: ["**/*.md", "Cargo.toml"]
before:
  operations:
    - sh:
        - echo before
after:
  operations:
    - sh:
        - echo one
        - echo two
    - sh:
        - echo three
"#;

#[test]
fn test_parse_full_spec() {
    let spec = parse_config(SPEC).unwrap();

    assert_eq!(spec.ignore, vec![".git/**", "transformations.yml"]);
    assert_eq!(spec.inputs.len(), 3);
    assert_eq!(spec.inputs[0].default.as_deref(), Some("my-app"));
    assert_eq!(spec.inputs[1].input_type, InputType::YesNo);
    assert_eq!(spec.inputs[2].options, vec!["MIT", "Apache-2.0"]);

    assert_eq!(spec.transformations.len(), 3);
    match &spec.transformations[0].kind {
        TransformationKind::Include { condition, region_marker } => {
            assert_eq!(condition, "include_ci");
            assert!(region_marker.is_none());
        }
        other => panic!("Expected include, got {other:?}"),
    }
    match &spec.transformations[1].kind {
        TransformationKind::Include { region_marker, .. } => {
            assert_eq!(region_marker.as_deref(), Some("CI"));
        }
        other => panic!("Expected include, got {other:?}"),
    }
    match &spec.transformations[2].kind {
        TransformationKind::Replace { pattern, replacement } => {
            assert_eq!(pattern, "sample-app");
            assert_eq!(replacement, "{{ name }}");
        }
        other => panic!("Expected replace, got {other:?}"),
    }
    assert_eq!(spec.transformations[2].files, vec!["**/*.md", "Cargo.toml"]);

    assert_eq!(spec.before.operations.len(), 1);
    assert_eq!(spec.after.operations[0].sh, vec!["echo one", "echo two"]);
    assert_eq!(spec.after.operations[1].sh, vec!["echo three"]);
}

#[test]
fn test_empty_spec() {
    let spec = parse_config("{}").unwrap();
    assert!(spec.ignore.is_empty());
    assert!(spec.transformations.is_empty());
    assert!(spec.before.operations.is_empty());
}

#[test]
fn test_unknown_transformation_type() {
    let result = parse_config("transformations:\n  - name: x\n    type: rename\n");
    assert!(matches!(result, Err(Error::SpecParseError(_))));
}

#[test]
fn test_missing_required_fields() {
    let include_without_condition = "transformations:\n  - name: x\n    type: include\n";
    assert!(matches!(parse_config(include_without_condition), Err(Error::SpecParseError(_))));

    let replace_without_replacement =
        "transformations:\n  - name: x\n    type: replace\n    pattern: a\n";
    assert!(matches!(parse_config(replace_without_replacement), Err(Error::SpecParseError(_))));
}

#[test]
fn test_empty_replace_pattern() {
    let spec = "transformations:\n  - name: x\n    type: replace\n    pattern: \"\"\n    replacement: y\n";
    match parse_config(spec) {
        Err(Error::SpecParseError(reason)) => assert!(reason.contains("empty pattern")),
        other => panic!("Expected SpecParseError, got {other:?}"),
    }
}

#[test]
fn test_select_without_options() {
    let spec = "inputs:\n  - id: license\n    text: License?\n    type: select\n";
    assert!(matches!(parse_config(spec), Err(Error::SpecParseError(_))));
}

#[test]
fn test_malformed_yaml() {
    assert!(matches!(parse_config("ignore: [unclosed"), Err(Error::SpecParseError(_))));
}

#[test]
fn test_load_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("transformations.yml");
    std::fs::write(&path, SPEC).unwrap();

    let spec = load_config(&path).unwrap();
    assert_eq!(spec.transformations.len(), 3);

    let missing = load_config(temp_dir.path().join("missing.yml"));
    assert!(matches!(missing, Err(Error::ReadError { .. })));
}
