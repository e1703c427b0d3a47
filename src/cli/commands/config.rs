//! Config command implementation.

use crate::core::config::Config;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration operations.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate configuration file.
    Validate {
        /// Config file path.
        #[arg(value_name = "CONFIG")]
        path: PathBuf,
    },
    /// Print configuration with defaults filled in.
    Show {
        /// Config file path. Shows defaults if omitted.
        #[arg(value_name = "CONFIG")]
        path: Option<PathBuf>,
        /// Output format (toml, json).
        #[arg(long, default_value = "toml")]
        format: String,
    },
    /// Generate a configuration template.
    Generate {
        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the config command.
pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Validate { path } => validate_config(&path),
        ConfigCommand::Show { path, format } => show_config(path.as_deref(), &format),
        ConfigCommand::Generate { output } => generate_config(output.as_deref()),
    }
}

fn validate_config(path: &Path) -> Result<()> {
    Config::from_file(path)?;
    println!("✓ Configuration is valid: {}", path.display());
    Ok(())
}

fn show_config(path: Option<&Path>, format: &str) -> Result<()> {
    let config = Config::load(path)?;
    println!("{}", render(&config, format)?);
    Ok(())
}

fn render(config: &Config, format: &str) -> Result<String> {
    match format {
        "json" => serde_json::to_string_pretty(config).context("failed to serialize config"),
        "toml" => config.to_toml(),
        other => anyhow::bail!("unknown format '{}', expected toml or json", other),
    }
}

fn generate_config(output: Option<&Path>) -> Result<()> {
    let template = template();
    match output {
        Some(path) => {
            std::fs::write(path, template)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Generated config template: {}", path.display());
        }
        None => println!("{}", template),
    }
    Ok(())
}

fn template() -> &'static str {
    r#"# sqlannotation configuration

[annotation]
# Counter incremented for every DML statement without exactly one keyspace id.
unfriendly_counter = "FilteredReplicationUnfriendlyStatementsCount"
# Prefix of the rate-limited warning about such statements.
throttled_logger = "FilteredReplicationUnfriendlyStatement"
# At most one warning per interval.
log_interval_ms = 5000

[telemetry]
log_level = "info"
json_output = false
"#
}
