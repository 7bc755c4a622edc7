use super::registry::SchemaRegistry;
use super::validation::validate_merged;
use super::{RootType, SchemaError, SchemaField, SchemaSource};
use crate::config::Config;
use std::path::Path;
use tracing::{debug, info};

/// Fields every schema exposes on its query root for introspection
const INTROSPECTION_FIELDS: [&str; 2] = ["__schema", "__type"];

/// Extracts root `Query` and `Mutation` fields from schema documents
pub struct SchemaFieldExtractor<'a> {
    config: &'a Config,
}

impl<'a> SchemaFieldExtractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Load, merge and extract the schema at `path` (a file or a directory)
    pub fn extract(&self, path: &Path) -> Result<Vec<SchemaField>, SchemaError> {
        let sources = SchemaSource::load_all(path, self.config)?;
        info!("Loaded {} schema source(s) from {}", sources.len(), path.display());
        Self::extract_sources(&sources)
    }

    /// Merge in-memory schema documents and extract their root fields.
    ///
    /// Query fields come first (declared, then extension, then introspection
    /// fields), followed by Mutation fields.
    pub fn extract_sources(sources: &[SchemaSource]) -> Result<Vec<SchemaField>, SchemaError> {
        let mut registry = SchemaRegistry::new();
        let mut merged = Vec::with_capacity(sources.len());

        for source in sources {
            if is_empty_document(&source.input) {
                debug!("Skipping empty schema source {}", source.name);
                continue;
            }

            let document = graphql_parser::parse_schema::<String>(&source.input).map_err(|err| {
                SchemaError::Parse {
                    name: source.name.clone(),
                    message: err.to_string(),
                }
            })?;
            registry.add_document(&source.name, &document)?;
            merged.push(source);
        }

        validate_merged(&merged)?;
        let roots = registry.finish()?;
        let mut fields = Vec::new();

        if let Some(query) = roots.query {
            fields.extend(query.into_iter().map(|name| SchemaField::new(RootType::Query, name)));
            fields.extend(
                INTROSPECTION_FIELDS
                    .iter()
                    .map(|name| SchemaField::new(RootType::Query, *name)),
            );
        }

        if let Some(mutation) = roots.mutation {
            fields.extend(
                mutation
                    .into_iter()
                    .map(|name| SchemaField::new(RootType::Mutation, name)),
            );
        }

        debug!("Extracted {} schema fields", fields.len());
        Ok(fields)
    }
}

/// A source with nothing but whitespace and `#` comments
fn is_empty_document(input: &str) -> bool {
    input
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
