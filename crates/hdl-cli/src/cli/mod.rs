//! CLI for the HDL batch HTML downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hdl_core::config;
use std::path::PathBuf;

use commands::{run_config, run_get, run_name, GetArgs};

/// Top-level CLI for the HDL downloader.
#[derive(Debug, Parser)]
#[command(name = "hdl")]
#[command(about = "HDL: polite sequential HTML page downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download pages one after another into the save directory.
    Get {
        /// HTTP/HTTPS URLs to download, in order.
        urls: Vec<String>,

        /// Read additional URLs from a file (one per line, `#` starts a comment).
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathBuf>,

        /// Directory to save pages into (overrides config).
        #[arg(long, value_name = "DIR")]
        save_dir: Option<PathBuf>,

        /// Seconds to wait between requests (overrides config).
        #[arg(long, value_name = "SECS")]
        delay: Option<f64>,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the filename each URL would be saved under.
    Name {
        /// URLs to name.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                urls,
                input,
                save_dir,
                delay,
                json,
            } => run_get(
                &cfg,
                GetArgs {
                    urls,
                    input,
                    save_dir,
                    delay,
                    json,
                },
            )?,
            CliCommand::Name { urls } => run_name(&urls),
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
