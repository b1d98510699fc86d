//! Command dispatch

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sqlweave::{CompiledQuery, Compiler, Dialect, parse_statement};

use crate::cli::{self, Commands};
use crate::config::{AppConfig, OutputFormat};
use crate::constants::{APP_NAME_LOWER, ENV_LOG, STDIN_PATH};

pub struct App;

impl App {
    /// Run the application with CLI argument parsing
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::Dialects) => {
                print!("{}", Self::render_dialects());
                Ok(())
            }
            Some(Commands::Compile { input }) => {
                let config = AppConfig::load(&cli_config)?;
                Self::compile(&config, input.as_deref())
            }
            None => {
                let config = AppConfig::load(&cli_config)?;
                Self::compile(&config, None)
            }
        }
    }

    /// Logs go to stderr so stdout carries only compiled output
    fn init_logging() {
        let default_filter = format!("warn,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    fn compile(config: &AppConfig, input: Option<&Path>) -> Result<()> {
        let request = Self::read_input(input)?;
        let statement = parse_statement(&request, config.max_request_bytes)
            .context("Failed to parse statement request")?;
        let compiled = Compiler::new(config.dialect)
            .compile(&statement)
            .with_context(|| format!("Failed to compile statement for {}", config.dialect))?;

        tracing::info!(
            dialect = %config.dialect,
            args = compiled.args.len(),
            "Statement compiled"
        );
        println!("{}", Self::render(&compiled, config.output)?);
        Ok(())
    }

    fn read_input(input: Option<&Path>) -> Result<String> {
        match input {
            Some(path) if path != Path::new(STDIN_PATH) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file: {}", path.display())),
            _ => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read request from stdin")?;
                Ok(buffer)
            }
        }
    }

    fn render(compiled: &CompiledQuery, output: OutputFormat) -> Result<String> {
        match output {
            OutputFormat::Text => {
                let args = serde_json::to_string(&compiled.args)
                    .context("Failed to serialize arguments")?;
                Ok(format!("{}\n{}", compiled.sql, args))
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(compiled).context("Failed to serialize output")
            }
        }
    }

    fn render_dialects() -> String {
        Dialect::ALL
            .iter()
            .map(|dialect| {
                let style = dialect.dialect().placeholder_style();
                format!(
                    "{:<10} {}, {}, ...\n",
                    dialect.name(),
                    style.token(style.start()),
                    style.token(style.start() + 1)
                )
            })
            .collect()
    }
}
