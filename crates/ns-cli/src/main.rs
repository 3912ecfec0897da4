//! NextStat configuration CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ns-config")]
#[command(about = "NextStat - analysis configuration validation and histogram planning")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file and print a summary
    Validate {
        /// Input configuration (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List the histograms the configuration needs
    Plan {
        /// Input configuration (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a region definition
    Region {
        /// Input configuration (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Region name
        #[arg(long)]
        name: String,
    },

    /// Print the bundled configuration JSON schema
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { config } => cmd_validate(&config),
        Commands::Plan { config, output } => cmd_plan(&config, output.as_ref()),
        Commands::Region { config, name } => cmd_region(&config, &name),
        Commands::Schema => cmd_schema(),
    }
}

fn cmd_validate(path: &PathBuf) -> Result<()> {
    let config = ns_config::load(path)?;
    let overview = ns_config::print_overview(&config);

    let output_json = serde_json::json!({
        "valid": true,
        "config": path.display().to_string(),
        "overview": overview,
    });
    write_json(None, output_json)
}

fn cmd_plan(path: &PathBuf, output: Option<&PathBuf>) -> Result<()> {
    let config = ns_config::load(path)?;
    let histograms = ns_config::required_histograms(&config)?;
    tracing::info!(n_histograms = histograms.len(), "histogram plan complete");

    write_json(output, serde_json::to_value(&histograms)?)
}

fn cmd_region(path: &PathBuf, name: &str) -> Result<()> {
    let config = ns_config::load(path)?;
    let region = ns_config::get_region(&config, name)?;
    write_json(None, serde_json::to_value(region)?)
}

fn cmd_schema() -> Result<()> {
    let schema = ns_config::ConfigSchema::bundled()?;
    write_json(None, schema.document().clone())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
