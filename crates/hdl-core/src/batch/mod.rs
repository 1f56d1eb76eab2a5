//! Sequential batch downloader.
//!
//! Walks the URL list in order: fetch, decode, save, then pause before the
//! next URL. Each failure is logged and counted; none of them stops the batch.

mod status;
mod summary;

pub use status::UrlStatus;
pub use summary::{BatchSummary, DownloadOutcome};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use crate::fetch::{CurlFetcher, FetchError, FetchOptions, Fetcher};
use crate::storage;

/// Default destination directory.
pub const DEFAULT_SAVE_DIR: &str = "./site_raw_html";

/// Default pause between requests.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Blocking pause between requests.
pub trait Sleeper {
    fn sleep(&mut self, delay: Duration);
}

/// `Sleeper` that blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Settings for one `download_urls` call.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub save_dir: PathBuf,
    /// Pause between consecutive requests (not after the last one).
    pub delay: Duration,
    pub fetch: FetchOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            delay: DEFAULT_DELAY,
            fetch: FetchOptions::default(),
        }
    }
}

/// Downloads every URL with a fresh `CurlFetcher` scoped to this call.
///
/// Creates `save_dir` first. Only setup failures are returned as `Err`;
/// per-URL failures end up in the summary (and on `progress_tx`).
pub fn download_urls<U: AsRef<str>>(
    urls: &[U],
    opts: &BatchOptions,
    progress_tx: Option<&mpsc::Sender<UrlStatus>>,
) -> Result<BatchSummary> {
    storage::ensure_dir(&opts.save_dir)
        .with_context(|| format!("failed to create save dir {}", opts.save_dir.display()))?;
    let mut fetcher = CurlFetcher::new(&opts.fetch).context("failed to configure HTTP client")?;
    Ok(download_all(
        urls,
        &opts.save_dir,
        opts.delay,
        &mut fetcher,
        &mut ThreadSleeper,
        progress_tx,
    ))
}

/// Processes `urls` strictly in order, one request at a time.
///
/// `sleeper` is called with `delay` between consecutive URLs: never before the
/// first fetch and never after the last. `save_dir` must already exist.
/// If `progress_tx` is `Some`, a `UrlStatus` is sent for every fetch attempt,
/// save and failure at the time it happens.
pub fn download_all<U, F, S>(
    urls: &[U],
    save_dir: &Path,
    delay: Duration,
    fetcher: &mut F,
    sleeper: &mut S,
    progress_tx: Option<&mpsc::Sender<UrlStatus>>,
) -> BatchSummary
where
    U: AsRef<str>,
    F: Fetcher,
    S: Sleeper,
{
    let total = urls.len();
    tracing::info!(total, save_dir = %save_dir.display(), "starting batch");

    let summary = urls
        .iter()
        .enumerate()
        .fold(BatchSummary::default(), |summary, (i, url)| {
            let url = url.as_ref();
            tracing::info!("[{}/{}] fetching {}", i + 1, total, url);
            report(
                progress_tx,
                UrlStatus::Fetching {
                    index: i + 1,
                    total,
                    url: url.to_string(),
                },
            );
            let outcome = process_one(fetcher, save_dir, url, progress_tx);
            if i + 1 < total {
                sleeper.sleep(delay);
            }
            summary.record(url, &outcome)
        });

    tracing::info!(
        success = summary.success,
        failed = summary.failed,
        "batch finished"
    );
    summary
}

fn report(progress_tx: Option<&mpsc::Sender<UrlStatus>>, status: UrlStatus) {
    if let Some(tx) = progress_tx {
        let _ = tx.send(status);
    }
}

fn process_one<F: Fetcher>(
    fetcher: &mut F,
    save_dir: &Path,
    url: &str,
    progress_tx: Option<&mpsc::Sender<UrlStatus>>,
) -> DownloadOutcome {
    let failed = |reason: String| {
        report(
            progress_tx,
            UrlStatus::Failed {
                url: url.to_string(),
                reason,
            },
        );
        DownloadOutcome::Failed
    };

    let text = match fetch_text(fetcher, url) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(url, error = %e, "download failed");
            return failed(e.to_string());
        }
    };
    let chars = text.chars().count();
    tracing::info!(url, chars, "downloaded");

    match storage::save_page(save_dir, url, &text) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "saved");
            report(
                progress_tx,
                UrlStatus::Saved {
                    url: url.to_string(),
                    path: path.clone(),
                    chars,
                },
            );
            DownloadOutcome::Saved(path)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "save failed");
            failed(format!("save failed: {}", e))
        }
    }
}

fn fetch_text<F: Fetcher>(fetcher: &mut F, url: &str) -> Result<String, FetchError> {
    let page = fetcher.fetch(url)?;
    let text = page.text().into_owned();
    if text.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(text)
}
