use glob::{MatchOptions, Pattern};
use miette::{Diagnostic, IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration for an unused-resolver analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GraphQL schema file or directory of schema files
    pub schema: Option<PathBuf>,

    /// Directory containing the Go resolver sources
    pub resolvers: Option<PathBuf>,

    /// File extensions (without the dot) loaded from a schema directory
    pub schema_extensions: Vec<String>,

    /// Glob patterns, relative to the resolver directory, to leave out of the scan
    pub exclude: Vec<String>,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Where the JSON report is written (stdout when unset)
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            resolvers: None,
            schema_extensions: vec!["graphql".to_string()],
            exclude: vec![],
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            output: None,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config")?,
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config")?,
            _ => {
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    config
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")?
                }
            }
        };

        config
            .exclude_set()
            .wrap_err_with(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Try to load configuration from default locations in `dir`
    pub fn from_default_locations(dir: &Path) -> Result<Self> {
        let default_names = [
            ".unused-resolver.yml",
            ".unused-resolver.yaml",
            ".unused-resolver.toml",
            "unused-resolver.yml",
            "unused-resolver.yaml",
            "unused-resolver.toml",
        ];

        for name in &default_names {
            let path = dir.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Compile the `exclude` patterns
    pub fn exclude_set(&self) -> Result<ExcludeSet, InvalidPattern> {
        let patterns = self
            .exclude
            .iter()
            .map(|pattern| {
                let compiled = Pattern::new(pattern).map_err(|reason| InvalidPattern {
                    pattern: pattern.clone(),
                    reason,
                })?;
                Ok((compiled, pattern.contains('/')))
            })
            .collect::<Result<_, InvalidPattern>>()?;

        Ok(ExcludeSet { patterns })
    }

    /// Check whether a file name carries one of the schema extensions
    pub fn is_schema_file_name(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        self.schema_extensions.iter().any(|ext| {
            let ext = ext.trim_start_matches('.').as_bytes();
            name.strip_suffix(ext)
                .is_some_and(|stem| stem.ends_with(b"."))
        })
    }
}

/// An `exclude` entry that is not a valid glob
#[derive(Debug, Error, Diagnostic)]
#[error("invalid exclude pattern `{pattern}`: {reason}")]
#[diagnostic(
    code(unused_resolver::config::exclude),
    help("exclude entries are glob patterns such as `generated/**` or `*_gen.go`")
)]
pub struct InvalidPattern {
    pub pattern: String,
    pub reason: glob::PatternError,
}

/// Compiled exclude patterns.
///
/// A pattern with a `/` is matched against the whole path relative to the
/// resolver directory, where `*` stays within one segment and `**` spans
/// segments. A pattern without `/` is matched against every segment, so
/// `*_gen.go` excludes generated files at any depth.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    patterns: Vec<(Pattern, bool)>,
}

impl ExcludeSet {
    pub fn is_excluded(&self, relative: &Path) -> bool {
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        let path = relative.to_string_lossy().replace('\\', "/");

        self.patterns.iter().any(|(pattern, anchored)| {
            if *anchored {
                pattern.matches_with(&path, options)
            } else {
                relative
                    .iter()
                    .any(|segment| pattern.matches_with(&segment.to_string_lossy(), options))
            }
        })
    }
}
