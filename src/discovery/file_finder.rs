use crate::config::Config;
use crate::resolver::ResolverError;
use crate::schema::SchemaError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

const GO_EXTENSION: &[u8] = b".go";
const GO_TEST_SUFFIX: &[u8] = b"_test.go";

/// Type of a discovered file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    GoSource,
    GoTest,
    Schema,
}

impl FileType {
    /// Determine file type from path
    ///
    /// Names are compared as bytes, so file names that are not valid UTF-8
    /// are still classified.
    pub fn from_path(path: &Path, config: &Config) -> Option<Self> {
        let file_name = path.file_name()?;
        let bytes = file_name.as_encoded_bytes();

        if bytes.ends_with(GO_TEST_SUFFIX) {
            Some(FileType::GoTest)
        } else if bytes.ends_with(GO_EXTENSION) {
            Some(FileType::GoSource)
        } else if config.is_schema_file_name(file_name) {
            Some(FileType::Schema)
        } else {
            None
        }
    }
}

/// File finder for the schema and resolver inputs.
///
/// Directory entries are always sorted by file name so results do not depend
/// on the order the platform lists them in.
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Resolve a schema path to the list of schema documents to load.
    ///
    /// A file is its own single source. A directory contributes its direct
    /// children with a schema extension; subdirectories are not searched.
    pub fn schema_sources(&self, path: &Path) -> Result<Vec<PathBuf>, SchemaError> {
        let metadata = fs::metadata(path).map_err(|err| schema_access_error(path, err))?;

        if !metadata.is_dir() {
            return Ok(vec![path.to_path_buf()]);
        }

        let mut sources = Vec::new();
        let entries = fs::read_dir(path).map_err(|err| schema_access_error(path, err))?;

        for entry in entries {
            let entry = entry.map_err(|err| schema_access_error(path, err))?;
            let entry_path = entry.path();

            if entry_path.is_dir() {
                continue;
            }

            if FileType::from_path(&entry_path, self.config) != Some(FileType::Schema) {
                trace!("Skipping non-schema file: {}", entry_path.display());
                continue;
            }

            sources.push(entry_path);
        }

        if sources.is_empty() {
            return Err(SchemaError::NoSchemaFiles(path.to_path_buf()));
        }

        sources.sort();
        debug!("Found {} schema files in {}", sources.len(), path.display());
        Ok(sources)
    }

    /// Find all non-test Go files below `dir`, depth-first in file name order.
    ///
    /// Symlinks to regular files are included; symlinked directories are not
    /// followed. A symlink that cannot be resolved is an `Io` error.
    pub fn go_sources(&self, dir: &Path) -> Result<Vec<PathBuf>, ResolverError> {
        let metadata = fs::metadata(dir).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ResolverError::PathNotFound(dir.to_path_buf())
            } else {
                ResolverError::Io {
                    path: dir.to_path_buf(),
                    source: err,
                }
            }
        })?;

        if !metadata.is_dir() {
            return Err(ResolverError::NotADirectory(dir.to_path_buf()));
        }

        let excludes = self.config.exclude_set()?;
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let file_type = entry.file_type();
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            let path = entry.path();
            match FileType::from_path(path, self.config) {
                Some(FileType::GoSource) => {}
                Some(FileType::GoTest) => {
                    trace!("Skipping test file: {}", path.display());
                    continue;
                }
                _ => continue,
            }

            let relative = path.strip_prefix(dir).unwrap_or(path);
            if excludes.is_excluded(relative) {
                trace!("Excluding: {}", path.display());
                continue;
            }

            if file_type.is_symlink() {
                let target = fs::metadata(path).map_err(|source| ResolverError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                if !target.is_file() {
                    trace!("Skipping symlink to non-file: {}", path.display());
                    continue;
                }
            }

            files.push(path.to_path_buf());
        }

        debug!("Found {} Go files in {}", files.len(), dir.display());
        Ok(files)
    }
}

fn schema_access_error(path: &Path, err: io::Error) -> SchemaError {
    if err.kind() == io::ErrorKind::NotFound {
        SchemaError::PathNotFound(path.to_path_buf())
    } else {
        SchemaError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
