//! GraphQL schema field extraction.
//!
//! One or more schema documents are parsed, merged into a single logical
//! schema, validated, and reduced to the fields of the root `Query` and
//! `Mutation` types.

mod extractor;
mod loader;
mod registry;
mod validation;

pub use extractor::SchemaFieldExtractor;
pub use loader::SchemaSource;

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Schema loading errors. None of them leave a usable partial schema.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    #[error("schema path does not exist: {}", .0.display())]
    #[diagnostic(code(unused_resolver::schema::not_found))]
    PathNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(unused_resolver::schema::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no schema files found in directory: {}", .0.display())]
    #[diagnostic(
        code(unused_resolver::schema::no_files),
        help("schema files are matched by extension, see `schema_extensions`")
    )]
    NoSchemaFiles(PathBuf),

    #[error("failed to parse {name}: {message}")]
    #[diagnostic(code(unused_resolver::schema::syntax))]
    Parse { name: String, message: String },

    #[error("invalid schema: {0}")]
    #[diagnostic(code(unused_resolver::schema::invalid))]
    Invalid(String),
}

/// Root operation type a schema field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootType {
    Query,
    Mutation,
}

impl RootType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootType::Query => "Query",
            RootType::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for RootType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of the root `Query` or `Mutation` type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SchemaField {
    type_name: RootType,
    field_name: String,
    full_name: String,
}

impl SchemaField {
    pub fn new(type_name: RootType, field_name: impl Into<String>) -> Self {
        let field_name = field_name.into();
        let full_name = format!("{}.{}", type_name, field_name);
        Self {
            type_name,
            field_name,
            full_name,
        }
    }

    pub fn type_name(&self) -> RootType {
        self.type_name
    }

    /// Field name as declared in the schema
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// `Type.field`, e.g. `Query.user`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}
