//! Command-line surface for `showroomctl`.

pub mod catalog;
pub mod check;
pub mod preview;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::loader::ConfigLoader;

pub use preview::{PreviewOptions, PreviewReport, run_preview};

#[derive(Debug, Parser)]
#[command(
    name = "showroomctl",
    version,
    about = "Showroom carousel configuration and headless preview"
)]
pub struct Cli {
    /// TOML config file; overrides $SHOWROOM_CONFIG_PATH and showroom.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// .env file loaded before the environment is read
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate configuration and print the effective values
    Check,
    /// Print the content the carousels rotate through
    Catalog {
        /// Emit JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Mount the carousels headless and log every transition
    Preview {
        /// How long to let the timers run, e.g. 30s or 1m
        #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
        duration: Duration,
        /// Product category to sweep the pointer across
        #[arg(long)]
        category: Option<String>,
        /// Pointer positions sampled across the product viewer
        #[arg(long, default_value_t = 12)]
        sweep_steps: usize,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::new()
        .with_explicit_path(cli.config)
        .with_env_file(cli.env_file);

    match cli.command {
        Command::Check => {
            let loaded = loader.load().context("configuration check failed")?;
            print!("{}", check::render(&loaded)?);
        }
        Command::Catalog { json } => {
            if json {
                println!("{}", catalog::render_json()?);
            } else {
                print!("{}", catalog::render_text()?);
            }
        }
        Command::Preview {
            duration,
            category,
            sweep_steps,
        } => {
            let loaded = loader.load().context("failed to load configuration")?;
            let options = PreviewOptions {
                duration,
                category,
                sweep_steps,
            };
            let report = run_preview(&loaded.config, &options).await?;
            println!("{report}");
        }
    }

    Ok(())
}
