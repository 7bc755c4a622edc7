//! Analysis orchestration: schema fields and resolver methods in, unused
//! resolvers out.

mod detector;

pub use detector::detect_unused;

use crate::config::Config;
use crate::resolver::{ResolverError, ResolverExtractor, ResolverMethod};
use crate::schema::{SchemaError, SchemaFieldExtractor};
use miette::Diagnostic;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// A failed analysis, tagged with the stage that failed.
///
/// The stage error is part of the message and is not repeated as the
/// `source()`, so a rendered report shows it once.
#[derive(Error, Debug, Diagnostic)]
pub enum AnalysisError {
    #[error("schema parse error: {0}")]
    #[diagnostic(transparent)]
    Schema(SchemaError),

    #[error("resolver analysis error: {0}")]
    #[diagnostic(transparent)]
    Resolver(ResolverError),
}

impl From<SchemaError> for AnalysisError {
    fn from(err: SchemaError) -> Self {
        AnalysisError::Schema(err)
    }
}

impl From<ResolverError> for AnalysisError {
    fn from(err: ResolverError) -> Self {
        AnalysisError::Resolver(err)
    }
}

/// Outcome of a complete analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Resolvers with no matching schema field, in discovery order
    pub unused_resolvers: Vec<ResolverMethod>,

    /// Number of resolver methods found
    pub total_resolvers: usize,

    /// Number of schema fields, introspection fields included
    pub total_fields: usize,
}

impl AnalysisResult {
    pub fn unused_count(&self) -> usize {
        self.unused_resolvers.len()
    }

    /// No unused resolvers were found
    pub fn is_clean(&self) -> bool {
        self.unused_resolvers.is_empty()
    }
}

/// Runs the schema and resolver extractors and diffs their output
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze the schema at `schema_path` against the Go resolvers below
    /// `resolver_dir`.
    ///
    /// The first failure of either stage aborts the run; a source file that
    /// fails to parse fails the resolver stage even though other files parsed.
    pub fn analyze(
        &self,
        schema_path: &Path,
        resolver_dir: &Path,
    ) -> Result<AnalysisResult, AnalysisError> {
        info!("Loading GraphQL schema from {}", schema_path.display());
        let fields = SchemaFieldExtractor::new(&self.config).extract(schema_path)?;
        info!("Found {} schema fields", fields.len());

        info!("Analyzing resolvers in {}", resolver_dir.display());
        let methods = ResolverExtractor::new(&self.config)
            .extract(resolver_dir)?
            .into_result()
            .map_err(ResolverError::from)?;

        let unused_resolvers = detect_unused(&fields, &methods);
        info!(
            "{} of {} resolvers have no schema field",
            unused_resolvers.len(),
            methods.len()
        );

        Ok(AnalysisResult {
            unused_resolvers,
            total_resolvers: methods.len(),
            total_fields: fields.len(),
        })
    }
}
