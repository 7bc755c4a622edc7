mod common;
mod go;

pub use common::{Position, SourceParseError};
pub use go::{GoParser, MethodDecl};
