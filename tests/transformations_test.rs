use archetype::config::parse_config;
use archetype::error::Error;
use archetype::evaluator::{MiniJinjaEvaluator, Variables};
use archetype::file::File;
use archetype::transformations::Transformations;
use archetype::transformer::Transformer;

fn vars(pairs: &[(&str, &str)]) -> Variables {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn bound(spec: &str, vars: &Variables) -> Transformations {
    let mut transformations = Transformations::from_spec(&parse_config(spec).unwrap());
    transformations.template(&MiniJinjaEvaluator::new(), vars).unwrap();
    transformations
}

fn file(relative_path: &str, contents: &str) -> File {
    File::new(format!("/src/{relative_path}"), relative_path, contents)
}

const INCLUDE_FILE: &str = r#"
transformations:
  - name: docs
    type: include
    condition: include_docs
    files: ["docs/**"]
"#;

#[test]
fn test_include_keeps_file_when_truthy() {
    let transformations = bound(INCLUDE_FILE, &vars(&[("include_docs", "true")]));
    let input = file("docs/guide.md", "# Guide\n");

    let output = transformations.transform(input.clone()).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_include_discards_file_when_falsy() {
    let transformations = bound(INCLUDE_FILE, &vars(&[("include_docs", "false")]));

    let output = transformations.transform(file("docs/guide.md", "# Guide\n")).unwrap();
    assert!(output.discarded);
    assert!(output.contents.is_empty());
    assert_eq!(output.relative_path.to_str(), Some("docs/guide.md"));
    assert_eq!(output.full_path.to_str(), Some("/src/docs/guide.md"));
}

#[test]
fn test_non_matching_transformer_is_skipped() {
    let transformations = bound(INCLUDE_FILE, &vars(&[("include_docs", "false")]));

    let input = file("README.md", "# Readme\n");
    assert_eq!(transformations.transform(input.clone()).unwrap(), input);
    assert!(!transformations.is_transformed("README.md").unwrap());
    assert!(transformations.is_transformed("docs/a/b.md").unwrap());
}

#[test]
fn test_region_marker() {
    let spec = r#"
transformations:
  - name: optional section
    type: include
    condition: with_x
    region_marker: X
    files: ["*.txt"]
"#;
    let input = "keep-this\nBEGIN X\nonly-if-x\nEND X\nkeep-that\n";

    let kept = bound(spec, &vars(&[("with_x", "yes")])).transform(file("a.txt", input)).unwrap();
    assert_eq!(kept.contents, "keep-this\nonly-if-x\nkeep-that\n");
    assert!(!kept.discarded);

    let dropped = bound(spec, &vars(&[("with_x", "")])).transform(file("a.txt", input)).unwrap();
    assert_eq!(dropped.contents, "keep-this\nkeep-that\n");
    assert!(!dropped.discarded);
}

#[test]
fn test_region_marker_in_comments() {
    let spec = r#"
transformations:
  - name: ci section
    type: include
    condition: include_ci
    region_marker: ci config
    files: ["**/*"]
"#;
    let input = "a\n//BEGIN ci config\nb\n//END ci config\n<!--BEGIN ci config-->\nc\n<!--END ci config-->\nd\n";

    let dropped = bound(spec, &vars(&[("include_ci", "false")])).transform(file("a.txt", input)).unwrap();
    assert_eq!(dropped.contents, "a\nd\n");

    let kept = bound(spec, &vars(&[("include_ci", "true")])).transform(file("a.txt", input)).unwrap();
    assert_eq!(kept.contents, "a\nb\nc\nd\n");
}

#[test]
fn test_replace_every_occurrence() {
    let spec = r#"
transformations:
  - name: rename
    type: replace
    pattern: sample
    replacement: "{{ name }}"
    files: ["**/*"]
"#;
    let transformations = bound(spec, &vars(&[("name", "acme")]));
    let input = "sample sample-app Sample\nsamplesample\n";

    let output = transformations.transform(file("src/lib.rs", input)).unwrap();
    assert_eq!(output.contents, "acme acme-app Sample\nacmeacme\n");
    assert_eq!(output.contents.matches("acme").count(), input.matches("sample").count());
    assert!(!output.contents.contains("sample"));
}

#[test]
fn test_replacement_rendered_once() {
    let spec = r#"
transformations:
  - name: rename
    type: replace
    pattern: old
    replacement: "{{ name | upper }}"
    files: ["*"]
"#;
    let transformations = bound(spec, &vars(&[("name", "new")]));
    match &transformations.transformers()[0] {
        Transformer::Replace(replacer) => assert_eq!(replacer.replacement(), Some("NEW")),
        other => panic!("Expected replace, got {other:?}"),
    }
}

#[test]
fn test_pipeline_order() {
    let spec = r#"
transformations:
  - name: first
    type: replace
    pattern: a
    replacement: b
    files: ["*"]
  - name: second
    type: replace
    pattern: b
    replacement: c
    files: ["*"]
"#;
    let transformations = bound(spec, &Variables::new());
    assert_eq!(transformations.transform(file("f", "ab")).unwrap().contents, "cc");
}

#[test]
fn test_discarded_file_skips_remaining_transformers() {
    let spec = r#"
transformations:
  - name: drop
    type: include
    condition: "false"
    files: ["*"]
  - name: would fail
    type: replace
    pattern: a
    replacement: b
    files: ["[invalid"]
"#;
    let transformations = bound(spec, &Variables::new());
    let output = transformations.transform(file("f", "a")).unwrap();
    assert!(output.discarded);
}

#[test]
fn test_ignore_patterns() {
    let spec = "ignore:\n  - \".git/**\"\n  - \"*.log\"\n";
    let transformations = bound(spec, &Variables::new());

    assert!(transformations.is_globally_ignored(".git/HEAD").unwrap());
    assert!(transformations.is_globally_ignored("debug.log").unwrap());
    assert!(!transformations.is_globally_ignored("logs/debug.log").unwrap());
    assert!(!transformations.is_globally_ignored("src/main.rs").unwrap());
}

#[test]
fn test_transform_before_template_fails() {
    let transformations = Transformations::from_spec(&parse_config(INCLUDE_FILE).unwrap());
    match transformations.transform(file("docs/a.md", "a")) {
        Err(Error::UnboundTransformerError(name)) => assert_eq!(name, "docs"),
        other => panic!("Expected UnboundTransformerError, got {other:?}"),
    }
}

#[test]
fn test_failed_template_binds_nothing() {
    let spec = r#"
transformations:
  - name: docs
    type: include
    condition: "true"
    files: ["docs/**"]
  - name: broken
    type: include
    condition: "undefined_variable"
    files: ["docs/**"]
"#;
    let mut transformations = Transformations::from_spec(&parse_config(spec).unwrap());
    let result = transformations.template(&MiniJinjaEvaluator::new(), &Variables::new());
    assert!(matches!(result, Err(Error::ConditionError { .. })));

    match &transformations.transformers()[0] {
        Transformer::Include(include) => assert_eq!(include.truthy(), None),
        other => panic!("Expected include, got {other:?}"),
    }
}

#[test]
fn test_hook_commands_are_rendered() {
    let spec = r#"
after:
  operations:
    - sh:
        - "cd {{ destination }} && git init"
"#;
    let transformations = bound(spec, &vars(&[("destination", "/tmp/out")]));
    assert_eq!(transformations.after()[0].command(), "cd /tmp/out && git init");
}
