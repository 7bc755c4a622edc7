//! graphql-unused-resolver - find Go GraphQL resolvers the schema no longer uses
//!
//! gqlgen-style projects implement each root field as a method on a
//! `<type>Resolver` receiver. When a field is removed from the schema, its
//! method usually stays behind. This library finds those methods.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **Schema extraction** - Parse and merge `.graphql` documents, collect
//!    the fields of the root `Query` and `Mutation` types
//! 2. **Resolver extraction** - Parse Go files with tree-sitter and infer a
//!    `Type.field` name for every method on a resolver receiver
//! 3. **Detection** - Report resolvers whose inferred name is not a field
//! 4. **Reporting** - Output results as a terminal report or JSON

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod schema;

pub use analysis::{detect_unused, AnalysisError, AnalysisResult, Analyzer};
pub use config::Config;
pub use discovery::FileFinder;
pub use report::{ReportFormat, Reporter};
pub use resolver::{ResolverError, ResolverExtraction, ResolverExtractor, ResolverMethod};
pub use schema::{RootType, SchemaError, SchemaField, SchemaFieldExtractor};
