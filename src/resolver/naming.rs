//! Naming-convention inference from gqlgen-style Go resolvers to GraphQL
//! field identifiers.
//!
//! Nothing in the Go source links a method to a schema field, so the field is
//! guessed from names alone: `(*queryResolver).CreateUser` becomes
//! `Query.createUser`. Fields whose Go name diverges from the GraphQL name
//! cannot be recognised.

const RESOLVER_SUFFIX: &str = "Resolver";

/// Whether a receiver type follows the `<type>Resolver` convention
/// (case-insensitive, pointer marker allowed).
pub fn is_resolver_receiver(receiver_type: &str) -> bool {
    receiver_type
        .to_lowercase()
        .ends_with(&RESOLVER_SUFFIX.to_lowercase())
}

/// `*queryResolver` -> `Query`, `userResolver` -> `User`
pub fn infer_type_name(receiver_type: &str) -> String {
    let name = receiver_type.strip_prefix('*').unwrap_or(receiver_type);
    let name = name.strip_suffix(RESOLVER_SUFFIX).unwrap_or(name);
    upper_first(name)
}

/// `CreateUser` -> `createUser`
pub fn infer_field_name(method_name: &str) -> String {
    lower_first(method_name)
}

/// Full `Type.field` identifier for a resolver method
pub fn infer_graphql_name(receiver_type: &str, method_name: &str) -> String {
    format!(
        "{}.{}",
        infer_type_name(receiver_type),
        infer_field_name(method_name)
    )
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
