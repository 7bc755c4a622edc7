use super::{ResolverError, ResolverMethod};
use crate::config::Config;
use crate::discovery::FileFinder;
use crate::parser::{GoParser, Position, SourceParseError};
use miette::Diagnostic;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Everything a resolver scan produced, including per-file parse failures
#[derive(Debug, Default)]
pub struct ResolverExtraction {
    /// Resolver methods in walk order, then declaration order within a file
    pub methods: Vec<ResolverMethod>,

    /// One entry per Go file that failed to parse, in walk order
    pub parse_errors: Vec<SourceParseError>,
}

impl ResolverExtraction {
    pub fn has_errors(&self) -> bool {
        !self.parse_errors.is_empty()
    }

    /// Collapse the scan into a single outcome.
    ///
    /// Any parse failure fails the scan with the first error; the methods
    /// from the files that did parse travel along in the error.
    pub fn into_result(self) -> Result<Vec<ResolverMethod>, PartialExtraction> {
        let mut errors = self.parse_errors.into_iter();
        match errors.next() {
            None => Ok(self.methods),
            Some(first) => Err(PartialExtraction {
                first,
                suppressed: errors.len(),
                methods: self.methods,
            }),
        }
    }
}

/// A resolver scan that hit at least one unparsable file
#[derive(Debug, Error, Diagnostic)]
#[error("{first}{}", suppressed_note(.suppressed))]
#[diagnostic(
    code(unused_resolver::source_parse),
    help("fix the syntax error or exclude the file from the resolver scan")
)]
pub struct PartialExtraction {
    /// First file that failed to parse, in walk order
    pub first: SourceParseError,

    /// How many further files failed to parse
    pub suppressed: usize,

    /// Methods extracted from the files that parsed
    pub methods: Vec<ResolverMethod>,
}

fn suppressed_note(suppressed: &usize) -> String {
    match suppressed {
        0 => String::new(),
        1 => " (1 more file failed to parse)".to_string(),
        n => format!(" ({} more files failed to parse)", n),
    }
}

/// Extracts resolver methods from a directory of Go sources
pub struct ResolverExtractor<'a> {
    config: &'a Config,
}

impl<'a> ResolverExtractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Scan `dir` recursively for resolver methods.
    ///
    /// Missing or unreadable inputs are returned as `Err`. Files that fail to
    /// parse are skipped and recorded in [`ResolverExtraction::parse_errors`].
    pub fn extract(&self, dir: &Path) -> Result<ResolverExtraction, ResolverError> {
        let files = FileFinder::new(self.config).go_sources(dir)?;
        info!("Scanning {} Go files for resolvers", files.len());

        let mut parser = GoParser::new()?;
        let mut extraction = ResolverExtraction::default();

        for path in &files {
            let bytes = fs::read(path).map_err(|source| ResolverError::Io {
                path: path.clone(),
                source,
            })?;

            let Ok(contents) = String::from_utf8(bytes) else {
                let err = SourceParseError::new(
                    path,
                    Position { line: 1, column: 1 },
                    "file is not valid UTF-8",
                );
                warn!("{}", err);
                extraction.parse_errors.push(err);
                continue;
            };

            match parser.parse(path, &contents) {
                Ok(decls) => {
                    let before = extraction.methods.len();
                    extraction.methods.extend(
                        decls
                            .into_iter()
                            .filter_map(|decl| ResolverMethod::from_decl(path, decl)),
                    );
                    debug!(
                        "{}: {} resolver methods",
                        path.display(),
                        extraction.methods.len() - before
                    );
                }
                Err(err) => {
                    warn!("{}", err);
                    extraction.parse_errors.push(err);
                }
            }
        }

        info!(
            "Found {} resolver methods ({} files failed to parse)",
            extraction.methods.len(),
            extraction.parse_errors.len()
        );
        Ok(extraction)
    }
}
