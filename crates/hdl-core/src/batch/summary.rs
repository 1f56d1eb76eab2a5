//! Per-URL outcomes and the aggregated batch summary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result of processing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Page fetched and written to this path.
    Saved(PathBuf),
    /// Fetch or save failed; the reason was logged when it happened.
    Failed,
}

/// Aggregate counts for one batch.
///
/// `success + failed == total` and `failed_urls.len() == failed` hold after
/// every `record`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// Failed URLs in input order.
    pub failed_urls: Vec<String>,
}

impl BatchSummary {
    /// Folds one outcome into the summary and returns it.
    pub fn record(mut self, url: &str, outcome: &DownloadOutcome) -> Self {
        self.total += 1;
        match outcome {
            DownloadOutcome::Saved(_) => self.success += 1,
            DownloadOutcome::Failed => {
                self.failed += 1;
                self.failed_urls.push(url.to_string());
            }
        }
        self
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total:   {}", self.total)?;
        writeln!(f, "Success: {}", self.success)?;
        write!(f, "Failed:  {}", self.failed)?;
        if !self.failed_urls.is_empty() {
            write!(f, "\n\nFailed URLs:")?;
            for url in &self.failed_urls {
                write!(f, "\n  - {}", url)?;
            }
        }
        Ok(())
    }
}
