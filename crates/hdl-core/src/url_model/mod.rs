//! URL modeling and filename derivation.
//!
//! Derives deterministic, human-traceable local filenames of the form
//! `{host}_{path}.html` from page URLs.

mod path;
mod sanitize;

pub use path::{split_url, UrlParts};
pub use sanitize::{sanitize_host, sanitize_path};

use crate::checksum::url_fingerprint;

/// Path token used when the URL has no path (or only `/`).
pub const INDEX_TOKEN: &str = "index";

/// Sanitized paths longer than this (in characters) are truncated.
pub const MAX_PATH_CHARS: usize = 50;

/// Characters of the sanitized path kept before the fingerprint.
pub const TRUNCATED_PATH_CHARS: usize = 30;

/// Extension of every generated filename.
pub const EXTENSION: &str = "html";

/// Derives the filename a page fetched from `url` is saved under.
///
/// The same URL always yields the same name. Paths whose sanitized form is
/// longer than [`MAX_PATH_CHARS`] keep their first [`TRUNCATED_PATH_CHARS`]
/// characters followed by `_` and a fingerprint of the complete URL.
///
/// # Examples
///
/// - `generate_filename("https://example.com/")` → `"example.com_index.html"`
/// - `generate_filename("https://example.com/a/b")` → `"example.com_a_b.html"`
pub fn generate_filename(url: &str) -> String {
    let UrlParts { host, path } = split_url(url);

    let path = if path.is_empty() {
        INDEX_TOKEN.to_string()
    } else {
        path
    };

    let mut safe_path = sanitize_path(&path);
    if safe_path.chars().count() > MAX_PATH_CHARS {
        let head: String = safe_path.chars().take(TRUNCATED_PATH_CHARS).collect();
        safe_path = format!("{}_{}", head, url_fingerprint(url));
    }

    format!("{}_{}.{}", sanitize_host(&host), safe_path, EXTENSION)
}
