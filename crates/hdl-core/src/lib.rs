//! Core engine for the HDL batch HTML downloader.
//!
//! [`batch::download_urls`] fetches a list of pages one at a time, saves each
//! under a name derived by [`url_model::generate_filename`] and returns a
//! [`batch::BatchSummary`].

pub mod config;
pub mod logging;

pub mod batch;
pub mod checksum;
pub mod fetch;
pub mod storage;
pub mod url_model;

pub use batch::{
    download_all, download_urls, BatchOptions, BatchSummary, DownloadOutcome, UrlStatus,
};
pub use url_model::generate_filename;
