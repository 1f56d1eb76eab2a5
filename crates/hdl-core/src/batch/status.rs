//! Per-URL status lines streamed to the caller while a batch runs.

use std::fmt;
use std::path::PathBuf;

/// One step of the batch, sent as it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// About to fetch the `index`-th (1-based) of `total` URLs.
    Fetching {
        index: usize,
        total: usize,
        url: String,
    },
    Saved {
        url: String,
        path: PathBuf,
        /// Decoded length in characters.
        chars: usize,
    },
    /// Fetch or save failed; `reason` is the underlying error message.
    Failed { url: String, reason: String },
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlStatus::Fetching { index, total, url } => {
                write!(f, "[{}/{}] fetching {}", index, total, url)
            }
            UrlStatus::Saved { url, path, chars } => {
                write!(f, "  saved {} ({} chars) -> {}", url, chars, path.display())
            }
            UrlStatus::Failed { url, reason } => write!(f, "  FAILED {}: {}", url, reason),
        }
    }
}
