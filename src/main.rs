use clap::Parser;
use graphql_unused_resolver::{Analyzer, Config, ReportFormat, Reporter};
use miette::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

/// Detect unused GraphQL resolvers in Go code.
///
/// Compares the root Query and Mutation fields of your GraphQL schema with
/// the resolver methods in your Go backend and lists the resolvers whose
/// field has been removed from the schema.
#[derive(Parser, Debug)]
#[command(name = "graphql-unused-resolver")]
#[command(author, version, about, long_about)]
struct Cli {
    /// Path to a GraphQL schema file or a directory of schema files
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Path to the resolver directory
    #[arg(long)]
    resolvers: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("graphql-unused-resolver v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run_analysis(config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::from_default_locations(&cwd)?
    };

    // CLI arguments take precedence over the config file
    if cli.schema.is_some() {
        config.schema = cli.schema.clone();
    }
    if cli.resolvers.is_some() {
        config.resolvers = cli.resolvers.clone();
    }
    if cli.output.is_some() {
        config.report.output = cli.output.clone();
    }

    Ok(config)
}

/// Check both inputs before any parsing starts
fn validate_inputs(schema: &Path, resolvers: &Path) -> Result<()> {
    if !schema.exists() {
        miette::bail!("schema file does not exist: {}", schema.display());
    }

    if !resolvers.exists() {
        miette::bail!("resolver directory does not exist: {}", resolvers.display());
    }
    if !resolvers.is_dir() {
        miette::bail!("resolver path is not a directory: {}", resolvers.display());
    }

    Ok(())
}

fn run_analysis(config: Config, cli: &Cli) -> Result<()> {
    let Some(schema) = config.schema.clone() else {
        miette::bail!("no schema given: pass --schema or set `schema` in the config file");
    };
    let Some(resolvers) = config.resolvers.clone() else {
        miette::bail!("no resolver directory given: pass --resolvers or set `resolvers` in the config file");
    };

    validate_inputs(&schema, &resolvers)?;

    let format = match cli.format.clone() {
        Some(format) => format.into(),
        None => ReportFormat::from_name(&config.report.format).ok_or_else(|| {
            miette::miette!("unknown report format in config: {}", config.report.format)
        })?,
    };
    let output = config.report.output.clone();

    let analyzer = Analyzer::new(config);
    let result = analyzer
        .analyze(&schema, &resolvers)
        .wrap_err("analysis failed")?;

    Reporter::new(format, output).report(&result)
}
