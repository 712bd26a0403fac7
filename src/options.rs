//! Configuration options for detail page parsing.
//!
//! The `Options` struct carries the display settings and the comment policy
//! that influence how a detail page is turned into a record.

/// Which of the two gallery sites the page was fetched from.
///
/// Only affects how relative thumbnail URLs are completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Site {
    #[default]
    EHentai,
    ExHentai,
}

/// Configuration options for detail page parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use eh_detail::{Options, Site};
///
/// let options = Options {
///     site: Site::ExHentai,
///     comment_threshold: 0,
///     ..Options::default()
/// };
/// assert!(!options.force_eh_thumb);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Non-uploader comments scoring at or below this value are dropped.
    ///
    /// Default: `-101`
    pub comment_threshold: i32,

    /// Site the page came from.
    ///
    /// Default: `Site::EHentai`
    pub site: Site,

    /// Always complete relative thumbnails against the E-Hentai CDN.
    ///
    /// Default: `false`
    pub force_eh_thumb: bool,

    /// Commenter names to hide (case-insensitive exact match).
    ///
    /// Default: `None`
    pub commenter_blacklist: Option<Vec<String>>,

    /// Comment bodies containing any of these strings (case-insensitive) are hidden.
    ///
    /// Default: `None`
    pub comment_blacklist: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            comment_threshold: -101,
            site: Site::EHentai,
            force_eh_thumb: false,
            commenter_blacklist: None,
            comment_blacklist: None,
        }
    }
}
