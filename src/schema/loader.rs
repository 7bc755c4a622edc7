use super::SchemaError;
use crate::config::Config;
use crate::discovery::FileFinder;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A schema document read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    /// Path the document was read from, used in error messages
    pub name: String,
    pub input: String,
}

impl SchemaSource {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
        }
    }

    /// Read every schema document `path` resolves to, in file name order
    pub fn load_all(path: &Path, config: &Config) -> Result<Vec<Self>, SchemaError> {
        FileFinder::new(config)
            .schema_sources(path)?
            .iter()
            .map(|file| Self::load(file))
            .collect()
    }

    fn load(path: &Path) -> Result<Self, SchemaError> {
        let input = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded schema source {} ({} bytes)", path.display(), input.len());
        Ok(Self::new(path.display().to_string(), input))
    }
}
