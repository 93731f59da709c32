//! Judgment CLI
//!
//! Command-line interface for claim scoring.
//!
//! ## Usage
//!
//! ```bash
//! # Score a claim with every check
//! judgment score --claim "There are many different perspectives on this issue."
//!
//! # Pipe from stdin
//! cat claim.txt | judgment score
//!
//! # JSON output, selected checks only
//! judgment score --input claim.txt --check scalability --check implementability --format json
//!
//! # Run one check
//! judgment check value_pluralism --claim "Truth is absolute."
//!
//! # Validate a config
//! judgment config validate judgment.yaml
//! ```
//!
//! ## Exit Codes
//!
//! - 0: Success
//! - 3: Error

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use judgment_core::{CheckName, Dimension, Judgment, JudgmentConfig};

/// Judgment: deterministic claim scoring
#[derive(Parser)]
#[command(name = "judgment")]
#[command(version)]
#[command(about = "Score claims along ethical, aesthetic and practical dimensions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a claim and aggregate the results into a judgment
    Score {
        #[command(flatten)]
        source: ClaimSource,

        /// Check to run (can be specified multiple times; overrides the config)
        #[arg(long = "check", value_parser = parse_check)]
        checks: Vec<CheckName>,

        /// Path to a judgment config (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Show every check's score and reason
        #[arg(long)]
        explain: bool,

        /// Explicit timestamp for deterministic output (RFC 3339).
        /// Example: --evaluated-at 2025-12-20T00:00:00Z
        #[arg(long, value_parser = parse_datetime)]
        evaluated_at: Option<DateTime<Utc>>,
    },

    /// Run a single check and print its result as JSON
    Check {
        /// Name of the check (see `judgment checks`)
        #[arg(value_parser = parse_check)]
        name: CheckName,

        #[command(flatten)]
        source: ClaimSource,
    },

    /// List available checks
    Checks,

    /// Config management commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args)]
struct ClaimSource {
    /// Claim text (reads --input or stdin if not provided)
    #[arg(long, conflicts_with = "input")]
    claim: Option<String>,

    /// Path to a file containing the claim
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Validate {
        /// Path to the config file
        path: PathBuf,
    },

    /// Print the effective config as YAML
    Show {
        /// Path to the config file (defaults are shown if omitted)
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_check(s: &str) -> Result<CheckName, String> {
    s.parse::<CheckName>().map_err(|e| {
        let known: Vec<_> = CheckName::ALL.iter().map(|c| c.as_str()).collect();
        format!("{}. Expected one of: {}", e, known.join(", "))
    })
}

/// Parse RFC 3339 datetime string to DateTime<Utc>.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid datetime format: {}. Expected RFC 3339 (e.g., 2025-12-20T00:00:00Z)", e))
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(3)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            source,
            checks,
            config,
            format,
            explain,
            evaluated_at,
        } => score_command(source, checks, config, format, explain, evaluated_at),

        Commands::Check { name, source } => check_command(name, source),

        Commands::Checks => list_checks(),

        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => validate_config(path),
            ConfigAction::Show { path } => show_config(path),
        },
    }
}

fn read_claim(source: ClaimSource) -> Result<String> {
    let content = match (source.claim, source.input) {
        (Some(claim), _) => return Ok(claim),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read claim from {:?}", path))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}

fn load_config(path: Option<&PathBuf>) -> Result<JudgmentConfig> {
    match path {
        Some(path) => JudgmentConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => Ok(JudgmentConfig::default()),
    }
}

fn score_command(
    source: ClaimSource,
    checks: Vec<CheckName>,
    config_path: Option<PathBuf>,
    format: OutputFormat,
    explain: bool,
    evaluated_at: Option<DateTime<Utc>>,
) -> Result<ExitCode> {
    let mut config = load_config(config_path.as_ref())?;
    if !checks.is_empty() {
        config = config.with_checks(checks);
    }

    let claim = read_claim(source)?;
    tracing::debug!(checks = config.checks.len(), "Scoring claim");

    let judgment = match evaluated_at {
        Some(timestamp) => judgment_core::evaluate_at(&claim, &config, timestamp),
        None => judgment_core::evaluate(&claim, &config),
    }
    .context("Evaluation failed")?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&judgment)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print_text_judgment(&judgment, explain);
        }
    }

    Ok(ExitCode::from(0))
}

fn print_text_judgment(judgment: &Judgment, explain: bool) {
    println!("{}", judgment.verdict.as_str());
    println!();
    println!("Average score: {:.2}", judgment.average_score);
    println!(
        "Consensus: {:?} ({:.2})",
        judgment.consensus.level, judgment.consensus.score
    );
    println!();

    println!("Dimensions:");
    for (dimension, dim_score) in &judgment.dimensions {
        println!(
            "  {}: {:.2} ({} checks)",
            dimension, dim_score.score, dim_score.checks
        );
    }

    if explain {
        println!();
        println!("--- Checks ---");
        println!();

        for result in &judgment.results {
            println!("{}: {:.1}", result.check, result.score);
            println!("  {}", result.reason);
        }
    }
}

fn check_command(name: CheckName, source: ClaimSource) -> Result<ExitCode> {
    let claim = read_claim(source)?;
    let result = judgment_core::run_check(name, &claim);

    let json = serde_json::to_string_pretty(&result)?;
    println!("{}", json);

    Ok(ExitCode::from(0))
}

fn list_checks() -> Result<ExitCode> {
    for dimension in Dimension::ALL {
        println!("{}:", dimension);
        for check in dimension.checks() {
            println!("  {:<24} {}", check.as_str(), check.description());
        }
    }

    Ok(ExitCode::from(0))
}

fn validate_config(path: PathBuf) -> Result<ExitCode> {
    match JudgmentConfig::from_file(&path) {
        Ok(config) => {
            println!("Config is valid: {:?}", path);
            println!();
            println!("Checks: {}", config.checks.len());
            println!(
                "Weights: ethical {} / aesthetic {} / practical {}",
                config.weights.ethical, config.weights.aesthetic, config.weights.practical
            );
            println!(
                "Verdict thresholds: supported >= {}, qualified >= {}",
                config.thresholds.supported, config.thresholds.qualified
            );
            Ok(ExitCode::from(0))
        }
        Err(e) => {
            eprintln!("Config validation failed: {}", e);
            Ok(ExitCode::from(3))
        }
    }
}

fn show_config(path: Option<PathBuf>) -> Result<ExitCode> {
    let config = load_config(path.as_ref())?;
    let yaml = serde_yaml::to_string(&config).context("Failed to render config")?;
    print!("{}", yaml);

    Ok(ExitCode::from(0))
}
