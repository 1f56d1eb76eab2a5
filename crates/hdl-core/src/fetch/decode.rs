//! Response body decoding.

use encoding_rs::Encoding;
use std::borrow::Cow;

/// Extracts the `charset` parameter from a `Content-Type` value.
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then_some(value)
    })
}

/// Decodes a body using the charset declared in `content_type`.
///
/// Undeclared or unknown charsets fall back to UTF-8. Malformed sequences are
/// replaced with U+FFFD in both paths, so this never fails.
pub fn decode_body<'a>(body: &'a [u8], content_type: Option<&str>) -> Cow<'a, str> {
    let declared = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match declared {
        Some(encoding) => {
            let (text, _, had_errors) = encoding.decode(body);
            if had_errors {
                tracing::debug!(encoding = encoding.name(), "replaced malformed bytes");
            }
            text
        }
        None => String::from_utf8_lossy(body),
    }
}
