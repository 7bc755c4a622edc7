//! Integration tests for the full analysis pipeline
//!
//! These tests run schema extraction, resolver extraction and detection
//! together against the committed fixtures and scratch directories.

use graphql_unused_resolver::{AnalysisError, Analyzer, ResolverError, SchemaError};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn test_simple_fixture_reports_removed_fields() {
    let fixtures = fixtures_path();
    let result = Analyzer::default()
        .analyze(
            &fixtures.join("simple/schema.graphql"),
            &fixtures.join("simple/resolvers"),
        )
        .expect("analysis should succeed");

    // user, users, __schema, __type, createUser
    assert_eq!(result.total_fields, 5);
    assert_eq!(result.total_resolvers, 6);

    let unused: Vec<_> = result
        .unused_resolvers
        .iter()
        .map(|r| r.graphql_name())
        .collect();
    assert_eq!(unused, vec!["Query.orders", "Query.legacyField", "Mutation.deleteUser"]);

    let orders = &result.unused_resolvers[0];
    assert_eq!(orders.receiver_type(), "*queryResolver");
    assert_eq!(orders.method_name(), "Orders");
    assert_eq!(orders.line(), 33);
    assert!(orders.file_path().ends_with("resolver.go"));
    assert!(!result.is_clean());
}

#[test]
fn test_analysis_is_idempotent() {
    let fixtures = fixtures_path();
    let analyzer = Analyzer::default();
    let schema = fixtures.join("multi-schema");
    let resolvers = fixtures.join("simple/resolvers");

    let first = analyzer.analyze(&schema, &resolvers).unwrap();
    let second = analyzer.analyze(&schema, &resolvers).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_resolver_directory() {
    let dir = tempfile::tempdir().unwrap();
    let resolvers = dir.path().join("resolvers");
    fs::create_dir(&resolvers).unwrap();

    let result = Analyzer::default()
        .analyze(&fixtures_path().join("simple/schema.graphql"), &resolvers)
        .unwrap();

    assert_eq!(result.total_resolvers, 0);
    assert!(result.unused_resolvers.is_empty());
    assert!(result.is_clean());
}

#[test]
fn test_non_resolver_receivers_only() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "handler.go",
        r#"package server

type fooHandler struct{}

func (h *fooHandler) ServeHTTP() {}

func (h fooHandler) Orders() {}
"#,
    );

    let result = Analyzer::default()
        .analyze(&fixtures_path().join("simple/schema.graphql"), dir.path())
        .unwrap();

    assert_eq!(result.total_resolvers, 0);
    assert!(result.is_clean());
}

#[test]
fn test_schema_directory_without_schema_files() {
    let err = Analyzer::default()
        .analyze(
            &fixtures_path().join("simple/resolvers"),
            &fixtures_path().join("simple/resolvers"),
        )
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Schema(SchemaError::NoSchemaFiles(_))));
    let message = err.to_string();
    assert!(message.starts_with("schema parse error: "), "{}", message);
    assert!(message.contains("no schema files found"), "{}", message);

    // The stage error is rendered in the message only, not again as a cause
    assert!(std::error::Error::source(&err).is_none());
}

#[test]
fn test_missing_schema_path() {
    let dir = tempfile::tempdir().unwrap();

    let err = Analyzer::default()
        .analyze(&dir.path().join("missing.graphql"), dir.path())
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Schema(SchemaError::PathNotFound(_))));
}

#[test]
fn test_resolver_path_is_a_file() {
    let fixtures = fixtures_path();

    let err = Analyzer::default()
        .analyze(
            &fixtures.join("simple/schema.graphql"),
            &fixtures.join("simple/resolvers/resolver.go"),
        )
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Resolver(ResolverError::NotADirectory(_))));
    assert!(err.to_string().starts_with("resolver analysis error: "));
}

#[test]
fn test_missing_resolver_directory() {
    let dir = tempfile::tempdir().unwrap();

    let err = Analyzer::default()
        .analyze(
            &fixtures_path().join("simple/schema.graphql"),
            &dir.path().join("missing"),
        )
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Resolver(ResolverError::PathNotFound(_))));
}

#[test]
fn test_invalid_schema_fails_before_resolvers() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "schema.graphql", "type Query { user: User }");

    let err = Analyzer::default()
        .analyze(&dir.path().join("schema.graphql"), &dir.path().join("missing"))
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Schema(SchemaError::Invalid(_))));
}

#[test]
fn test_source_parse_error_fails_resolver_stage() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "a_ok.go",
        "package graph\n\nfunc (r *queryResolver) User() {}\n",
    );
    write(
        dir.path(),
        "b_broken.go",
        "package graph\n\nfunc (r *queryResolver) Broken( {\n",
    );

    let err = Analyzer::default()
        .analyze(&fixtures_path().join("simple/schema.graphql"), dir.path())
        .unwrap_err();

    match err {
        AnalysisError::Resolver(ResolverError::SourceParse(partial)) => {
            assert!(partial.first.path.ends_with("b_broken.go"));
            assert_eq!(partial.suppressed, 0);
            assert_eq!(partial.methods.len(), 1);
            assert_eq!(partial.methods[0].graphql_name(), "Query.user");
        }
        other => panic!("expected a source parse failure, got {:?}", other),
    }
}

#[test]
fn test_nested_resolver_packages_in_walk_order() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "schema/schema.graphql",
        "type Query { a: Int b: Int } type Mutation { c: Int }",
    );
    write(
        dir.path(),
        "graph/z.go",
        "package graph\n\nfunc (r *queryResolver) Zed() {}\n",
    );
    write(
        dir.path(),
        "graph/a/a.go",
        "package a\n\nfunc (r *queryResolver) A() {}\nfunc (r *queryResolver) Old() {}\n",
    );
    write(
        dir.path(),
        "graph/m.go",
        "package graph\n\nfunc (r *mutationResolver) C() {}\nfunc (r *mutationResolver) Gone() {}\n",
    );

    let result = Analyzer::default()
        .analyze(&dir.path().join("schema"), &dir.path().join("graph"))
        .unwrap();

    let unused: Vec<_> = result
        .unused_resolvers
        .iter()
        .map(|r| r.graphql_name())
        .collect();
    assert_eq!(unused, vec!["Query.old", "Mutation.gone", "Query.zed"]);
    assert_eq!(result.total_resolvers, 5);
    assert_eq!(result.total_fields, 5);
}
