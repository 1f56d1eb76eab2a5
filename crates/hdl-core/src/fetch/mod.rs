//! Blocking page fetching.
//!
//! `Fetcher` is the seam the batch loop talks to. `CurlFetcher` is the real
//! implementation: one curl easy handle, configured once and reused for every
//! request so libcurl can keep connections alive across the batch.

mod decode;
mod parse;

pub use decode::{charset_from_content_type, decode_body};

use std::borrow::Cow;
use std::str;
use std::time::Duration;

/// Browser-like User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Why a single fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, TLS, timeout, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response decoded to an empty document.
    #[error("empty response body")]
    EmptyBody,
}

/// A successfully fetched (2xx) response.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub body: Vec<u8>,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
}

impl Page {
    /// Body decoded per the declared charset, lossy UTF-8 otherwise.
    pub fn text(&self) -> Cow<'_, str> {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Header fields the downloader cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResponseHeaders {
    pub content_type: Option<String>,
}

/// Performs one blocking GET.
pub trait Fetcher {
    fn fetch(&mut self, url: &str) -> Result<Page, FetchError>;
}

/// Transport settings for `CurlFetcher`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(15),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

/// `Fetcher` backed by a single persistent curl easy handle.
///
/// Connections are released when the fetcher is dropped.
pub struct CurlFetcher {
    easy: curl::easy::Easy,
}

impl CurlFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.useragent(&opts.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(opts.max_redirects)?;
        easy.connect_timeout(opts.connect_timeout)?;
        easy.timeout(opts.timeout)?;
        // Empty string: advertise every encoding libcurl can decode.
        easy.accept_encoding("")?;
        Ok(Self { easy })
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&mut self, url: &str) -> Result<Page, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        self.easy.url(url)?;
        self.easy.get(true)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = self.easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let parsed = parse::parse_headers(&headers);
        Ok(Page {
            body,
            content_type: parsed.content_type,
        })
    }
}
