//! Page persistence.
//!
//! Every saved page starts with a two-line provenance header (source URL and
//! local download time). Files are written as UTF-8 and overwrite any earlier
//! file of the same name.

use crate::url_model;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Timestamp format used in the provenance header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create the destination directory (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the file contents: provenance header, blank line, then `content`.
pub fn render_page(url: &str, timestamp: &str, content: &str) -> String {
    format!(
        "<!-- Downloaded from: {} -->\n<!-- Download time: {} -->\n\n{}",
        url, timestamp, content
    )
}

/// Writes `content` for `url` into `dir` under its generated filename.
/// Returns the path written.
pub fn save_page(dir: &Path, url: &str, content: &str) -> io::Result<PathBuf> {
    let path = dir.join(url_model::generate_filename(url));
    fs::write(&path, render_page(url, &timestamp_now(), content))?;
    Ok(path)
}
