//! Path sanitization for generated filenames.

/// Turns a URL path into a filename-safe token.
///
/// - `/`, `\` and `:` become `_`
/// - any other character that is not alphanumeric, `.`, `_` or `-` is dropped
pub fn sanitize_path(path: &str) -> String {
    path.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            other => other,
        })
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Sanitizes the host segment: only the port separator is rewritten.
pub fn sanitize_host(host: &str) -> String {
    host.replace(':', "_")
}
