use crate::analysis::AnalysisResult;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, result: &AnalysisResult) -> Result<()> {
        let json = self.render(result)?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }

    pub fn render(&self, result: &AnalysisResult) -> Result<String> {
        serde_json::to_string_pretty(&JsonReport::from_result(result)).into_diagnostic()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    summary: JsonSummary,
    unused_resolvers: Vec<JsonResolver<'a>>,
}

#[derive(Serialize)]
struct JsonSummary {
    total_fields: usize,
    total_resolvers: usize,
    unused_resolvers: usize,
}

#[derive(Serialize)]
struct JsonResolver<'a> {
    graphql_name: &'a str,
    receiver_type: &'a str,
    method_name: &'a str,
    file: String,
    line: usize,
}

impl<'a> JsonReport<'a> {
    fn from_result(result: &'a AnalysisResult) -> Self {
        Self {
            version: "1.0",
            summary: JsonSummary {
                total_fields: result.total_fields,
                total_resolvers: result.total_resolvers,
                unused_resolvers: result.unused_count(),
            },
            unused_resolvers: result
                .unused_resolvers
                .iter()
                .map(|r| JsonResolver {
                    graphql_name: r.graphql_name(),
                    receiver_type: r.receiver_type(),
                    method_name: r.method_name(),
                    file: r.file_path().to_string_lossy().to_string(),
                    line: r.line(),
                })
                .collect(),
        }
    }
}
