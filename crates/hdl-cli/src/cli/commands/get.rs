//! `hdl get <url>...` – download pages sequentially.

use anyhow::{Context, Result};
use hdl_core::batch;
use hdl_core::config::{self, HdlConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Arguments of the `get` subcommand.
#[derive(Debug, Default)]
pub struct GetArgs {
    pub urls: Vec<String>,
    pub input: Option<PathBuf>,
    pub save_dir: Option<PathBuf>,
    pub delay: Option<f64>,
    pub json: bool,
}

pub fn run_get(cfg: &HdlConfig, args: GetArgs) -> Result<()> {
    let mut opts = cfg.batch_options()?;
    if let Some(dir) = args.save_dir {
        opts.save_dir = dir;
    }
    if let Some(secs) = args.delay {
        opts.delay = config::delay_from_secs(secs)?;
    }

    let mut urls = args.urls;
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read URL list {}", path.display()))?;
        urls.extend(parse_url_list(&text));
    }
    if urls.is_empty() {
        anyhow::bail!("no URLs given (pass them as arguments or with --input)");
    }

    println!("Downloading {} URLs into {}", urls.len(), opts.save_dir.display());
    let (progress_tx, progress_rx) = mpsc::channel::<batch::UrlStatus>();
    // Keep stdout clean for the JSON document.
    let to_stderr = args.json;
    let progress_handle = thread::spawn(move || {
        for status in progress_rx {
            if to_stderr {
                eprintln!("{}", status);
            } else {
                println!("{}", status);
            }
        }
    });
    let result = batch::download_urls(&urls, &opts, Some(&progress_tx));
    drop(progress_tx);
    let _ = progress_handle.join();
    let summary = result?;
    println!();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }

    if !summary.is_complete_success() {
        anyhow::bail!("{} of {} URLs failed", summary.failed, summary.total);
    }
    Ok(())
}

/// One URL per line; blank lines and `#` comments are skipped.
fn parse_url_list(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
}
