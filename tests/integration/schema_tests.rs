//! Integration tests for schema field extraction
//!
//! These tests load schema files and directories from disk.

use graphql_unused_resolver::{Config, RootType, SchemaError, SchemaField, SchemaFieldExtractor};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn extract(path: &Path) -> Result<Vec<SchemaField>, SchemaError> {
    let config = Config::default();
    SchemaFieldExtractor::new(&config).extract(path)
}

fn full_names(fields: &[SchemaField]) -> HashSet<String> {
    fields.iter().map(|f| f.full_name().to_string()).collect()
}

#[test]
fn test_single_file() {
    let fields = extract(&fixtures_path().join("simple/schema.graphql")).unwrap();

    // user, users, __schema, __type on Query; createUser on Mutation
    assert_eq!(fields.len(), 5);

    let names = full_names(&fields);
    for expected in ["Query.user", "Query.users", "Mutation.createUser", "Query.__schema", "Query.__type"] {
        assert!(names.contains(expected), "missing {}", expected);
    }
}

#[test]
fn test_directory_merges_files() {
    let fields = extract(&fixtures_path().join("multi-schema")).unwrap();

    assert_eq!(fields.len(), 7);

    let query_count = fields.iter().filter(|f| f.type_name() == RootType::Query).count();
    let mutation_count = fields.iter().filter(|f| f.type_name() == RootType::Mutation).count();
    assert_eq!(query_count, 5, "3 declared Query fields plus 2 introspection fields");
    assert_eq!(mutation_count, 2);

    let names = full_names(&fields);
    for expected in [
        "Query.user",
        "Query.users",
        "Query.post",
        "Mutation.createUser",
        "Mutation.updateUser",
    ] {
        assert!(names.contains(expected), "missing {}", expected);
    }
}

#[test]
fn test_directory_merge_is_additive() {
    let dir = tempfile::tempdir().unwrap();
    let a = "type Query { a: Int shared: String }";
    let b = "type Mutation { b(id: ID!): Boolean }";
    fs::write(dir.path().join("a.graphql"), a).unwrap();
    fs::write(dir.path().join("b.graphql"), b).unwrap();

    let merged = full_names(&extract(dir.path()).unwrap());
    let alone_a = full_names(&extract(&dir.path().join("a.graphql")).unwrap());
    let alone_b = full_names(&extract(&dir.path().join("b.graphql")).unwrap());

    let union: HashSet<String> = alone_a.union(&alone_b).cloned().collect();
    assert_eq!(merged, union);
}

#[test]
fn test_duplicate_field_across_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.graphql"), "type Query { user: Int }").unwrap();
    fs::write(dir.path().join("b.graphql"), "extend type Query { user: Int }").unwrap();

    let err = extract(dir.path()).unwrap_err();

    assert!(matches!(err, SchemaError::Invalid(_)), "{:?}", err);
}

#[test]
fn test_root_type_redefined_across_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.graphql"), "type Query { a: Int }").unwrap();
    fs::write(dir.path().join("b.graphql"), "type Query { b: Int }").unwrap();

    let err = extract(dir.path()).unwrap_err();

    assert!(err.to_string().contains("cannot redeclare type Query"), "{}", err);
}

#[test]
fn test_field_order_follows_sorted_file_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("c.graphql"), "extend type Query { third: Int }").unwrap();
    fs::write(dir.path().join("a.graphql"), "extend type Query { first: Int }").unwrap();
    fs::write(dir.path().join("b.graphql"), "type Query { root: Int } extend type Query { second: Int }").unwrap();

    let fields = extract(dir.path()).unwrap();
    let names: Vec<_> = fields.iter().map(|f| f.field_name()).collect();

    assert_eq!(names, vec!["root", "first", "second", "third", "__schema", "__type"]);
}

#[test]
fn test_syntax_error_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.graphql"), "type Query { a: Int }").unwrap();
    fs::write(dir.path().join("b.graphql"), "type Mutation { b: }").unwrap();

    let err = extract(dir.path()).unwrap_err();

    match err {
        SchemaError::Parse { name, .. } => assert!(name.ends_with("b.graphql"), "{}", name),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_directory_not_found() {
    let err = extract(&fixtures_path().join("nonexistent")).unwrap_err();
    assert!(matches!(err, SchemaError::PathNotFound(_)));
}

#[test]
fn test_directory_without_schema_files() {
    let err = extract(&fixtures_path().join("simple/resolvers")).unwrap_err();

    assert!(matches!(err, SchemaError::NoSchemaFiles(_)));
    assert!(err.to_string().contains("no schema files found in directory"));
}

#[test]
fn test_custom_schema_extension() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.graphqls"), "type Query { a: Int }").unwrap();

    let config = Config {
        schema_extensions: vec!["graphqls".to_string()],
        ..Config::default()
    };
    let fields = SchemaFieldExtractor::new(&config).extract(dir.path()).unwrap();

    assert_eq!(fields.len(), 3);
    assert!(matches!(extract(dir.path()), Err(SchemaError::NoSchemaFiles(_))));
}

#[test]
fn test_comment_only_file_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.graphql"), "type Query { a: Int }").unwrap();
    fs::write(dir.path().join("b.graphql"), "# nothing here yet\n").unwrap();

    let fields = extract(dir.path()).unwrap();

    assert_eq!(fields.len(), 3);
}

#[cfg(unix)]
#[test]
fn test_unreadable_schema_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.graphql"), "type Query { a: Int }").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone.graphql"), dir.path().join("broken.graphql")).unwrap();

    let err = extract(dir.path()).unwrap_err();

    match err {
        SchemaError::Io { path, .. } => assert!(path.ends_with("broken.graphql"), "{}", path.display()),
        other => panic!("expected io error, got {:?}", other),
    }
}
