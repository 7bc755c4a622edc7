//! Resolver method extraction from Go sources.
//!
//! Every method whose receiver type ends in `resolver` (any case) is treated
//! as a GraphQL resolver and mapped to the schema field it presumably
//! implements, see [`naming`].

mod extractor;
pub mod naming;

pub use extractor::{PartialExtraction, ResolverExtraction, ResolverExtractor};

use crate::config::InvalidPattern;
use crate::parser::MethodDecl;
use miette::Diagnostic;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Resolver extraction errors
#[derive(Error, Debug, Diagnostic)]
pub enum ResolverError {
    #[error("resolver directory does not exist: {}", .0.display())]
    #[diagnostic(code(unused_resolver::resolver::not_found))]
    PathNotFound(PathBuf),

    #[error("resolver path is not a directory: {}", .0.display())]
    #[diagnostic(code(unused_resolver::resolver::not_a_directory))]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    #[diagnostic(code(unused_resolver::resolver::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Exclude(#[from] InvalidPattern),

    #[error("failed to walk directory: {0}")]
    #[diagnostic(code(unused_resolver::resolver::walk))]
    Walk(#[from] walkdir::Error),

    #[error("failed to load Go grammar: {0}")]
    #[diagnostic(code(unused_resolver::resolver::grammar))]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    SourceParse(#[from] PartialExtraction),
}

/// A resolver method found in Go code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverMethod {
    receiver_type: String,
    method_name: String,
    graphql_name: String,
    file_path: PathBuf,
    line: usize,
}

impl ResolverMethod {
    /// Build a resolver method, inferring its GraphQL name.
    ///
    /// Returns `None` when the receiver does not follow the resolver naming
    /// convention.
    pub fn new(
        receiver_type: impl Into<String>,
        method_name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        line: usize,
    ) -> Option<Self> {
        let receiver_type = receiver_type.into();
        if !naming::is_resolver_receiver(&receiver_type) {
            return None;
        }

        let method_name = method_name.into();
        let graphql_name = naming::infer_graphql_name(&receiver_type, &method_name);

        Some(Self {
            receiver_type,
            method_name,
            graphql_name,
            file_path: file_path.into(),
            line,
        })
    }

    pub(crate) fn from_decl(path: &Path, decl: MethodDecl) -> Option<Self> {
        Self::new(decl.receiver_type, decl.method_name, path, decl.line)
    }

    /// Receiver type as declared, e.g. `*queryResolver`
    pub fn receiver_type(&self) -> &str {
        &self.receiver_type
    }

    /// Go method name, e.g. `CreateUser`
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Inferred `Type.field` identifier, e.g. `Mutation.createUser`
    pub fn graphql_name(&self) -> &str {
        &self.graphql_name
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// 1-based line of the method declaration
    pub fn line(&self) -> usize {
        self.line
    }
}
