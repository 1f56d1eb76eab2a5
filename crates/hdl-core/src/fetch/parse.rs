//! Parse HTTP response header lines into `ResponseHeaders`.

use super::ResponseHeaders;

/// Parse collected header lines into `ResponseHeaders`.
///
/// When redirects were followed the lines of every hop are present; only the
/// block after the last status line is considered.
pub(crate) fn parse_headers(lines: &[String]) -> ResponseHeaders {
    let last_hop = lines
        .iter()
        .rposition(|l| l.trim_start().starts_with("HTTP/"))
        .map(|i| &lines[i + 1..])
        .unwrap_or(lines);

    let mut content_type = None;
    for line in last_hop {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    ResponseHeaders { content_type }
}
