//! `hdl name <url>...` – show generated filenames.

use hdl_core::url_model;

pub fn run_name(urls: &[String]) {
    for url in urls {
        println!("{}  {}", url_model::generate_filename(url), url);
    }
}
