//! `papercheck` command line.
//!
//! ```text
//! papercheck <ORIGINAL> <CANDIDATE> <RESULT> [--config FILE] [--metric hamming|cosine]
//!            [--cosine-unit token|char] [--verbose]
//! papercheck print-default-config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use papercheck::{CosineUnit, MetricId, PapercheckConfig, run_check};
use tracing_subscriber::EnvFilter;

/// SimHash plagiarism checker
#[derive(Parser)]
#[command(name = "papercheck", version)]
#[command(about = "Compare a candidate document against an original and record the verdict")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,
}

#[derive(Args)]
struct CheckArgs {
    /// Original document
    original: Option<String>,

    /// Document checked against the original
    candidate: Option<String>,

    /// Result file; records are appended
    result: Option<String>,

    /// YAML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Scoring metric (overrides the config file)
    #[arg(long, value_enum)]
    metric: Option<MetricArg>,

    /// Vector unit for the cosine metric (overrides the config file)
    #[arg(long, value_enum)]
    cosine_unit: Option<UnitArg>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Hamming,
    Cosine,
}

impl From<MetricArg> for MetricId {
    fn from(value: MetricArg) -> Self {
        match value {
            MetricArg::Hamming => MetricId::Hamming,
            MetricArg::Cosine => MetricId::Cosine,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Token,
    Char,
}

impl From<UnitArg> for CosineUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Token => CosineUnit::Token,
            UnitArg::Char => CosineUnit::Char,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version print to stdout and succeed.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.check.verbose);

    let result = match cli.command {
        Some(Command::PrintDefaultConfig) => print_default_config(),
        None => check(cli.check),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_default_config() -> anyhow::Result<()> {
    let yaml = PapercheckConfig::default().to_yaml()?;
    print!("{yaml}");
    Ok(())
}

fn load_config(args: &CheckArgs) -> anyhow::Result<PapercheckConfig> {
    let mut config = match &args.config {
        Some(path) => PapercheckConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PapercheckConfig::default(),
    };

    if let Some(metric) = args.metric {
        config.matcher = config.matcher.with_metric(metric.into());
    }
    if let Some(unit) = args.cosine_unit {
        config.matcher = config.matcher.with_cosine_unit(unit.into());
    }
    config.validate()?;
    Ok(config)
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let (original, candidate, result) = match (&args.original, &args.candidate, &args.result) {
        (Some(o), Some(c), Some(r)) => (o.as_str(), c.as_str(), r.as_str()),
        _ => bail!("expected three paths: <ORIGINAL> <CANDIDATE> <RESULT>"),
    };
    for (name, value) in [("original", original), ("candidate", candidate), ("result", result)] {
        if value.trim().is_empty() {
            bail!("{name} path is empty");
        }
    }

    let config = load_config(&args)?;
    let summary = run_check(original, candidate, result, &config)?;
    let outcome = &summary.comparison.outcome;

    println!("similarity: {}", outcome.percent());
    println!(
        "verdict: {} ({})",
        outcome.verdict.label(),
        outcome.verdict.description()
    );
    if let Some(distance) = outcome.distance {
        println!("hamming distance: {distance}");
    }
    println!("elapsed: {} ms", summary.elapsed_ms);
    println!("result appended to {result}");
    Ok(())
}
