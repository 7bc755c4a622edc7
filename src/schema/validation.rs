use super::{SchemaError, SchemaSource};
use tracing::debug;

/// Validate the merged schema with `graphql-schema-validation`.
///
/// The sources are validated as one document so that references may cross
/// files. Positions in the resulting messages refer to the merged text, so
/// only the messages are kept.
pub(super) fn validate_merged(sources: &[&SchemaSource]) -> Result<(), SchemaError> {
    if sources.is_empty() {
        return Ok(());
    }

    let sdl = sources
        .iter()
        .map(|source| source.input.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let diagnostics = graphql_schema_validation::validate(&sdl);
    if !diagnostics.has_errors() {
        debug!("Merged schema of {} source(s) is valid", sources.len());
        return Ok(());
    }

    let messages: Vec<String> = diagnostics.iter().map(|error| error.to_string()).collect();
    Err(SchemaError::Invalid(messages.join("; ")))
}
