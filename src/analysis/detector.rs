use crate::resolver::ResolverMethod;
use crate::schema::SchemaField;
use std::collections::HashSet;

/// Resolver methods whose inferred GraphQL name is not a schema field.
///
/// The result keeps the input order of `methods`.
pub fn detect_unused(fields: &[SchemaField], methods: &[ResolverMethod]) -> Vec<ResolverMethod> {
    let known: HashSet<&str> = fields.iter().map(|f| f.full_name()).collect();

    methods
        .iter()
        .filter(|method| !known.contains(method.graphql_name()))
        .cloned()
        .collect()
}
