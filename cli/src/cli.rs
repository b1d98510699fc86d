use clap::{Parser, Subcommand};

use std::path::PathBuf;

use sqlweave::Dialect;

use super::config::OutputFormat;
use super::constants::{ENV_CONFIG, ENV_DIALECT, ENV_MAX_REQUEST_BYTES, ENV_OUTPUT};

#[derive(Parser)]
#[command(name = "sqlweave")]
#[command(
    version,
    about = "Compile JSON statement descriptions into parameterized SQL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Target dialect (mysql, sqlite, postgres, mssql)
    #[arg(long, short = 'd', global = true, env = ENV_DIALECT, value_parser = parse_dialect)]
    pub dialect: Option<Dialect>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, short = 'o', global = true, env = ENV_OUTPUT, value_parser = parse_output_format)]
    pub output: Option<OutputFormat>,

    /// Maximum size of a JSON request in bytes
    #[arg(long, global = true, env = ENV_MAX_REQUEST_BYTES)]
    pub max_request_bytes: Option<usize>,
}

/// Parse dialect from CLI/env string
fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse::<Dialect>().map_err(|_| {
        format!(
            "Invalid dialect '{}'. Valid options: mysql, sqlite, postgres, mssql",
            s
        )
    })
}

/// Parse output format from CLI/env string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format '{}'. Valid options: text, json",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Compile a JSON statement (default command, reads stdin)
    Compile {
        /// Request file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },
    /// List supported dialects and their placeholder formats
    Dialects,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub dialect: Option<Dialect>,
    pub config: Option<PathBuf>,
    pub output: Option<OutputFormat>,
    pub max_request_bytes: Option<usize>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        dialect: cli.dialect,
        config: cli.config,
        output: cli.output,
        max_request_bytes: cli.max_request_bytes,
    };
    (config, cli.command)
}
