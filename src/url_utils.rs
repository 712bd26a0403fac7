//! URL Utility Functions
//!
//! Gallery detail link parsing and thumbnail URL completion.

use url::Url;

use crate::options::{Options, Site};
use crate::patterns::GALLERY_TOKEN;

/// Hosts that serve gallery detail pages.
const GALLERY_HOSTS: &[&str] = &["e-hentai.org", "exhentai.org"];

pub const URL_PREFIX_THUMB_E: &str = "https://ehgt.org/";
pub const URL_PREFIX_THUMB_EX: &str = "https://s.exhentai.org/";
const URL_PREFIX_V1_THUMB_EX: &str = "https://s.exhentai.org/t/";
const URL_PREFIX_V1_THUMB_EX_OLD: &str = "https://exhentai.org/t/";

/// Identity carried by a gallery detail link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryDetailUrl {
    pub gid: i64,
    pub token: String,
}

/// Extracts gid and token from a gallery detail link.
///
/// Accepts `/g/{gid}/{token}/` and `/mpv/{gid}/{token}/` paths on either
/// site, optionally below `/lofi/`. Returns `None` for anything else.
///
/// # Example
///
/// ```rust
/// use eh_detail::url_utils::parse_detail_url;
///
/// let parsed = parse_detail_url("https://e-hentai.org/g/12345/0123456789/").unwrap();
/// assert_eq!(parsed.gid, 12345);
/// assert_eq!(parsed.token, "0123456789");
/// assert!(parse_detail_url("https://e-hentai.org/s/aa/12345-1").is_none());
/// ```
#[must_use]
pub fn parse_detail_url(url_str: &str) -> Option<GalleryDetailUrl> {
    let url = Url::parse(url_str.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if !GALLERY_HOSTS.contains(&host) {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty()).peekable();
    if segments.peek() == Some(&"lofi") {
        segments.next();
    }
    if !matches!(segments.next(), Some("g" | "mpv")) {
        return None;
    }

    let gid = segments.next()?.parse::<i64>().ok().filter(|gid| *gid > 0)?;
    let token = segments.next()?;
    if !GALLERY_TOKEN.is_match(token) {
        return None;
    }

    Some(GalleryDetailUrl {
        gid,
        token: token.to_string(),
    })
}

/// Completes a thumbnail URL for the configured site.
///
/// Known CDN prefixes are stripped first; the remaining path is re-prefixed
/// with the CDN matching `options`. Foreign absolute URLs pass through.
#[must_use]
pub fn thumb_url(thumb: &str, options: &Options) -> String {
    let path = [
        URL_PREFIX_THUMB_E,
        URL_PREFIX_V1_THUMB_EX_OLD,
        URL_PREFIX_V1_THUMB_EX,
        URL_PREFIX_THUMB_EX,
    ]
    .iter()
    .fold(thumb.trim(), |acc, prefix| acc.strip_prefix(prefix).unwrap_or(acc));

    if path.starts_with("https:") {
        return path.to_string();
    }

    let prefix = if options.site == Site::ExHentai && !options.force_eh_thumb {
        if path.ends_with("webp") {
            URL_PREFIX_THUMB_EX
        } else {
            URL_PREFIX_V1_THUMB_EX
        }
    } else {
        URL_PREFIX_THUMB_E
    };
    format!("{prefix}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detail_url_variants() {
        let expected = Some(GalleryDetailUrl {
            gid: 2_345_678,
            token: "abcdef0123".to_string(),
        });
        assert_eq!(parse_detail_url("https://e-hentai.org/g/2345678/abcdef0123/"), expected);
        assert_eq!(parse_detail_url("https://exhentai.org/g/2345678/abcdef0123"), expected);
        assert_eq!(parse_detail_url("http://e-hentai.org/lofi/g/2345678/abcdef0123/"), expected);
        assert_eq!(parse_detail_url("https://exhentai.org/mpv/2345678/abcdef0123/"), expected);
    }

    #[test]
    fn test_parse_detail_url_rejects_others() {
        assert!(parse_detail_url("").is_none());
        assert!(parse_detail_url("/g/2345678/abcdef0123/").is_none());
        assert!(parse_detail_url("https://example.com/g/2345678/abcdef0123/").is_none());
        assert!(parse_detail_url("https://e-hentai.org/g/0/abcdef0123/").is_none());
        assert!(parse_detail_url("https://e-hentai.org/g/2345678/XYZ/").is_none());
        assert!(parse_detail_url("https://e-hentai.org/s/abcdef0123/2345678-1").is_none());
    }

    #[test]
    fn test_thumb_url_eh() {
        let opts = Options::default();
        assert_eq!(
            thumb_url("https://ehgt.org/w/01/234/56789-abc.webp", &opts),
            "https://ehgt.org/w/01/234/56789-abc.webp"
        );
        assert_eq!(
            thumb_url("https://s.exhentai.org/t/01/234/x.jpg", &opts),
            "https://ehgt.org/01/234/x.jpg"
        );
    }

    #[test]
    fn test_thumb_url_ex() {
        let opts = Options {
            site: Site::ExHentai,
            ..Options::default()
        };
        assert_eq!(
            thumb_url("https://ehgt.org/w/01/x.webp", &opts),
            "https://s.exhentai.org/w/01/x.webp"
        );
        assert_eq!(thumb_url("https://ehgt.org/01/x.jpg", &opts), "https://s.exhentai.org/t/01/x.jpg");

        let forced = Options {
            force_eh_thumb: true,
            ..opts
        };
        assert_eq!(thumb_url("https://exhentai.org/t/01/x.jpg", &forced), "https://ehgt.org/01/x.jpg");
    }

    #[test]
    fn test_thumb_url_foreign_passthrough() {
        let opts = Options::default();
        assert_eq!(
            thumb_url("https://abc.hath.network/x/y.webp", &opts),
            "https://abc.hath.network/x/y.webp"
        );
    }
}
