//! Character encoding detection and transcoding.
//!
//! Detail pages are served as UTF-8, but saved pages and mirrors sometimes
//! declare a legacy charset. The declared charset is honoured; anything
//! undeclared is read as UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Charset label declared in the head of `html`, if any.
fn declared_charset(head: &str) -> Option<&str> {
    HTTP_EQUIV_CHARSET
        .captures(head)
        .or_else(|| META_CHARSET.captures(head))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Encoding declared by the page, UTF-8 when absent or unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes a response body to UTF-8.
///
/// Malformed sequences become U+FFFD rather than failing.
///
/// ```
/// use eh_detail::encoding::transcode_to_utf8;
///
/// let body = b"<meta charset=\"Shift_JIS\"><h1 id=\"gj\">\x93\xfa\x96\x7b</h1>";
/// assert!(transcode_to_utf8(body).contains("日本"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let decoded: Cow<'_, str> = if encoding == UTF_8 {
        String::from_utf8_lossy(html)
    } else {
        let (decoded, _, had_errors) = encoding.decode(html);
        if had_errors {
            log::debug!("body had bytes invalid in {}", encoding.name());
        }
        decoded
    };
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_is_utf8() {
        assert_eq!(detect_encoding(b"<html><h1 id=\"gn\">Title</h1></html>"), UTF_8);
        assert_eq!(detect_encoding(b"<meta charset=\"no-such-charset\">"), UTF_8);
    }

    #[test]
    fn meta_charset_variants() {
        assert_eq!(detect_encoding(b"<meta charset=\"Shift_JIS\">").name(), "Shift_JIS");
        assert_eq!(detect_encoding(b"<META CHARSET=euc-jp>").name(), "EUC-JP");
        assert_eq!(
            detect_encoding(br#"<meta http-equiv="Content-Type" content="text/html; charset=GBK">"#).name(),
            "GBK"
        );
    }

    #[test]
    fn declaration_past_sniff_window_is_ignored() {
        let mut body = vec![b' '; SNIFF_LEN];
        body.extend_from_slice(b"<meta charset=\"Shift_JIS\">");
        assert_eq!(detect_encoding(&body), UTF_8);
    }

    #[test]
    fn legacy_japanese_title_is_decoded() {
        let body = b"<meta charset=\"Shift_JIS\"><h1 id=\"gj\">\x93\xfa\x96\x7b</h1>";
        assert!(transcode_to_utf8(body).contains("<h1 id=\"gj\">日本</h1>"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let decoded = transcode_to_utf8(b"<h1>Title \xFF</h1>");
        assert_eq!(decoded, "<h1>Title \u{FFFD}</h1>");
    }
}
