//! # eh-detail
//!
//! Parser for E-Hentai / ExHentai gallery detail pages.
//!
//! A detail page is turned into a [`GalleryDetail`]: identity and API
//! credentials, display and provenance metadata, favorite state, download
//! links, newer versions, tag groups, comments and the preview tiles of the
//! current preview page.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eh_detail::parse;
//!
//! let body = std::fs::read_to_string("detail.html")?;
//! let gallery = parse(&body)?;
//! println!("{} {:?}", gallery.gid, gallery.title);
//! for group in &gallery.tags {
//!     println!("{}: {}", group.namespace, group.tags.join(", "));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Failure model
//!
//! Only a few conditions abort a parse: the content warning interstitial,
//! removed galleries, error pages reported by the site, and pages without
//! the identity script or preview tiles. Every other piece of missing or
//! malformed markup falls back to a default value and is reported through
//! the `log` facade.

mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers on top of `dom_query`.
pub mod dom;

/// Gallery metadata: identity, `.gm` block, info table, newer versions.
pub mod metadata;

/// Tag groups.
pub mod tags;

/// Comment list.
pub mod comments;

/// Preview pagination and tiles.
pub mod preview;

/// Error page classification.
pub mod sentinel;

/// Gallery categories.
pub mod category;

/// Caller-provided collaborators.
pub mod filter;

/// Simple language codes.
pub mod language;

/// Cache keys for previews and thumbnails.
pub mod cache_key;

/// Gallery URL parsing and thumbnail URL normalisation.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use category::Category;
pub use error::{Error, ErrorKind, Result};
pub use filter::{AllowAll, CommentFilter, LocalFavorites, NoLocalFavorites};
pub use options::{Options, Site};
pub use preview::{parse_pages, parse_preview_page, parse_preview_set};
pub use result::{
    Clip, Comment, CommentList, GalleryDetail, GalleryInfo, GalleryPreview, LargePreview,
    NormalPreview, PreviewSet, TagGroup, ANONYMOUS, FAV_SLOT_LOCAL, FAV_SLOT_UNSET, NOT_RATED,
};
pub use url_utils::{parse_detail_url, GalleryDetailUrl};

/// Parses a detail page using default options.
///
/// # Example
///
/// ```rust
/// use eh_detail::{parse, ErrorKind};
///
/// let body = "<p>This gallery is pining for the fjords.</p>";
/// let err = parse(body).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Unavailable);
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse(body: &str) -> Result<GalleryDetail> {
    parse_with_options(body, &Options::default())
}

/// Parses a detail page with custom options.
///
/// The options double as the comment filter through their blacklists.
///
/// # Example
///
/// ```rust
/// use eh_detail::{parse_with_options, Options};
///
/// let options = Options {
///     comment_threshold: -20,
///     commenter_blacklist: Some(vec!["spammer".to_string()]),
///     ..Options::default()
/// };
/// assert!(parse_with_options("<html></html>", &options).is_err());
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_with_options(body: &str, options: &Options) -> Result<GalleryDetail> {
    DetailParser::new(options).parse(body)
}

/// Parses a detail page from raw bytes with automatic charset detection.
///
/// The charset is taken from `<meta charset>` or an `http-equiv`
/// declaration, defaulting to UTF-8. Undecodable bytes become U+FFFD.
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes(body: &[u8]) -> Result<GalleryDetail> {
    parse(&encoding::transcode_to_utf8(body))
}

/// Raw-text preview-page count, without a full parse.
#[allow(clippy::missing_errors_doc)]
pub fn parse_preview_pages(body: &str) -> Result<i32> {
    preview::parse_preview_pages_raw(body)
}

/// Detail page parser with caller-supplied collaborators.
///
/// ```rust
/// use eh_detail::{DetailParser, Options};
///
/// let options = Options::default();
/// let local = [1_i64, 2, 3];
/// let is_local = |gid: i64| local.contains(&gid);
/// let parser = DetailParser::new(&options).with_local_favorites(&is_local);
/// assert!(parser.parse("<html></html>").is_err());
/// ```
pub struct DetailParser<'a> {
    options: &'a Options,
    favorites: &'a dyn LocalFavorites,
    filter: &'a dyn CommentFilter,
}

impl<'a> DetailParser<'a> {
    /// Parser using the blacklists of `options` and no local favorites.
    #[must_use]
    pub fn new(options: &'a Options) -> Self {
        Self {
            options,
            favorites: &NoLocalFavorites,
            filter: options,
        }
    }

    /// Membership test for galleries kept in the local favorites.
    #[must_use]
    pub fn with_local_favorites(mut self, favorites: &'a dyn LocalFavorites) -> Self {
        self.favorites = favorites;
        self
    }

    /// Replaces the blacklist-based comment filter.
    #[must_use]
    pub fn with_comment_filter(mut self, filter: &'a dyn CommentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Runs the full pipeline over one detail page body.
    ///
    /// Error pages are rejected before any markup is parsed. Metadata, tags
    /// and comments degrade to defaults; identity, the preview-page count and
    /// the preview tiles are required.
    #[allow(clippy::missing_errors_doc)]
    pub fn parse(&self, body: &str) -> Result<GalleryDetail> {
        sentinel::check(body)?;

        let doc = dom::parse(body);
        let root = dom::root(&doc);

        let mut gd = metadata::extract_metadata(&root, body, self.favorites)?;
        gd.tags = tags::parse_tag_groups(&root);
        gd.comments = comments::parse_comments(&root, self.options.comment_threshold, self.filter);
        gd.preview_pages = preview::parse_preview_pages(&root)?;
        gd.preview_set = preview::parse_preview_set(body)?;
        gd.simple_language = language::simple_language(&gd.language, gd.title.as_deref());

        log::debug!(
            "gallery {}: {} tag groups, {} comments, {} previews",
            gd.gid,
            gd.tags.len(),
            gd.comments.comments.len(),
            gd.preview_set.len()
        );
        Ok(gd)
    }
}
