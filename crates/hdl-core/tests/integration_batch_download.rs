//! Integration tests: real `CurlFetcher` against a local HTTP server, and the
//! full `download_urls` batch writing into a temp directory.

mod common;

use common::page_server::{self, Route};
use hdl_core::batch::{download_urls, BatchOptions, UrlStatus};
use hdl_core::fetch::{CurlFetcher, FetchError, FetchOptions, Fetcher, DEFAULT_USER_AGENT};
use std::fs;
use std::sync::mpsc;
use std::time::Duration;
use tempfile::tempdir;

fn fast_options(save_dir: &std::path::Path) -> BatchOptions {
    BatchOptions {
        save_dir: save_dir.to_path_buf(),
        delay: Duration::ZERO,
        fetch: FetchOptions {
            timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..FetchOptions::default()
        },
    }
}

#[test]
fn curl_fetcher_returns_body_and_content_type() {
    let base = page_server::start(vec![("/page", Route::html("<html>hi</html>"))]);
    let mut fetcher = CurlFetcher::new(&FetchOptions::default()).unwrap();

    let page = fetcher.fetch(&format!("{}/page", base)).unwrap();
    assert_eq!(page.body, b"<html>hi</html>");
    assert_eq!(
        page.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
}

#[test]
fn curl_fetcher_reused_across_requests() {
    let base = page_server::start(vec![
        ("/one", Route::html("one")),
        ("/two", Route::status("500 Internal Server Error")),
        ("/three", Route::html("three")),
    ]);
    let mut fetcher = CurlFetcher::new(&FetchOptions::default()).unwrap();

    assert_eq!(fetcher.fetch(&format!("{}/one", base)).unwrap().text(), "one");
    assert!(matches!(
        fetcher.fetch(&format!("{}/two", base)),
        Err(FetchError::Http(500))
    ));
    assert_eq!(
        fetcher.fetch(&format!("{}/three", base)).unwrap().text(),
        "three"
    );
}

#[test]
fn curl_fetcher_sends_browser_user_agent() {
    let base = page_server::start(vec![]);
    let mut fetcher = CurlFetcher::new(&FetchOptions::default()).unwrap();
    let page = fetcher.fetch(&format!("{}/echo-ua", base)).unwrap();
    assert_eq!(page.text(), DEFAULT_USER_AGENT);
}

#[test]
fn curl_fetcher_follows_redirects() {
    let base = page_server::start(vec![
        ("/old", Route::redirect("/new")),
        ("/new", Route::with_type("text/html; charset=iso-8859-1", b"caf\xe9")),
    ]);
    let mut fetcher = CurlFetcher::new(&FetchOptions::default()).unwrap();
    let page = fetcher.fetch(&format!("{}/old", base)).unwrap();
    assert_eq!(
        page.content_type.as_deref(),
        Some("text/html; charset=iso-8859-1")
    );
    assert_eq!(page.text(), "café");
}

#[test]
fn curl_fetcher_transport_error() {
    let base = page_server::closed_port_url();
    let mut fetcher = CurlFetcher::new(&FetchOptions::default()).unwrap();
    assert!(matches!(
        fetcher.fetch(&format!("{}/", base)),
        Err(FetchError::Transport(_))
    ));
}

#[test]
fn download_urls_end_to_end() {
    let base = page_server::start(vec![
        ("/", Route::html("<html>root</html>")),
        ("/a/b", Route::html("<html>ab</html>")),
        ("/broken", Route::status("500 Internal Server Error")),
    ]);
    let work = tempdir().unwrap();
    let save_dir = work.path().join("site_raw_html");
    let urls = vec![
        format!("{}/", base),
        format!("{}/a/b", base),
        format!("{}/broken", base),
    ];

    let summary = download_urls(&urls, &fast_options(&save_dir), None).unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.success, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failed_urls, vec![urls[2].clone()]);

    let port = base.rsplit(':').next().unwrap();
    let index = save_dir.join(format!("127.0.0.1_{}_index.html", port));
    let nested = save_dir.join(format!("127.0.0.1_{}_a_b.html", port));
    let index_text = fs::read_to_string(&index).unwrap();
    assert!(index_text.starts_with(&format!("<!-- Downloaded from: {} -->\n", urls[0])));
    assert!(index_text.ends_with("\n\n<html>root</html>"));
    assert!(fs::read_to_string(&nested).unwrap().ends_with("<html>ab</html>"));
    assert_eq!(fs::read_dir(&save_dir).unwrap().count(), 2);
}

#[test]
fn download_urls_empty_list_creates_dir_only() {
    let work = tempdir().unwrap();
    let save_dir = work.path().join("out");
    let urls: Vec<String> = Vec::new();
    let summary = download_urls(&urls, &fast_options(&save_dir), None).unwrap();
    assert_eq!(summary.total, 0);
    assert!(summary.failed_urls.is_empty());
    assert!(save_dir.is_dir());
}

#[test]
fn download_urls_unusable_save_dir_is_setup_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let save_dir = file.path().join("sub");
    let urls = vec!["http://127.0.0.1:1/".to_string()];
    assert!(download_urls(&urls, &fast_options(&save_dir), None).is_err());
}

#[test]
fn download_urls_reports_failures_as_they_happen() {
    let base = page_server::start(vec![("/ok", Route::html("<html>ok</html>"))]);
    let work = tempdir().unwrap();
    let urls = vec![format!("{}/ok", base), format!("{}/missing", base)];
    let (tx, rx) = mpsc::channel();

    let summary = download_urls(&urls, &fast_options(work.path()), Some(&tx)).unwrap();
    drop(tx);

    assert_eq!(summary.failed, 1);
    let failures: Vec<UrlStatus> = rx
        .iter()
        .filter(|s| matches!(s, UrlStatus::Failed { .. }))
        .collect();
    assert_eq!(
        failures,
        vec![UrlStatus::Failed {
            url: urls[1].clone(),
            reason: "HTTP 404".to_string(),
        }]
    );
}
