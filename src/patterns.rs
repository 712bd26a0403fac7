//! Compiled regex patterns for data living outside the tag structure.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! The detail page carries several values only in inline scripts, inline
//! styles or onclick handlers, so they are read from the raw body text rather
//! than from the parsed tree.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Page State Patterns
// =============================================================================

/// Generic inline error box: `<div class="d">\n<p>message</p>`.
pub static SITE_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("<div class=\"d\">\n<p>([^<]+)</p>").expect("SITE_ERROR regex")
});

// =============================================================================
// Identity and Download Patterns
// =============================================================================

/// The four identity variables of the inline page script.
///
/// Captures: gid, token, apiuid, apikey.
pub static DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)var gid = (\d+);.+?var token = "([a-f0-9]+)";.+?var apiuid = ([\-\d]+);.+?var apikey = "([a-f0-9]+)";"#,
    )
    .expect("DETAIL regex")
});

/// Torrent popup link. Captures: popup URL, torrent count.
pub static TORRENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a[^<>]*onclick="return popUp\('([^']+)'[^)]+\)">Torrent Download \((\d+)\)</a>"#)
        .expect("TORRENT regex")
});

/// Archive popup link. Captures: popup URL.
pub static ARCHIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a[^<>]*onclick="return popUp\('([^']+)'[^)]+\)">Archive Download</a>"#)
        .expect("ARCHIVE regex")
});

// =============================================================================
// Style Attribute Patterns
// =============================================================================

/// Cover style: `width:250px; height:354px; background:... url(https://...)`.
///
/// Captures: width, height, URL.
pub static COVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"width:(\d+)px; height:(\d+)px.+?url\((.+?)\)").expect("COVER regex")
});

/// Vertical sprite offset of the favorite slot icon.
///
/// Captures: offset in pixels (without the minus sign).
pub static FAVORITE_SLOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/fav\.png\); background-position:0px -(\d+)px").expect("FAVORITE_SLOT regex")
});

/// Posting date of each listed newer version: `, added 2020-01-01 10:00<br />`.
pub static NEWER_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r", added (.+?)<br />").expect("NEWER_DATE regex")
});

// =============================================================================
// Pagination Patterns
// =============================================================================

/// Info table row with the page count. Captures: page count (may contain commas).
pub static PAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<tr><td[^<>]*>Length:</td><td[^<>]*>([\d,]+) pages</td></tr>").expect("PAGES regex")
});

/// Last numbered cell of the preview pager, followed by the `>` cell.
///
/// Captures: preview page count (may contain commas).
pub static PREVIEW_PAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<td[^>]+><a[^>]+>([\d,]+)</a></td><td[^>]+>(?:<a[^>]+>)?&gt;(?:</a>)?</td>")
        .expect("PREVIEW_PAGES regex")
});

/// One preview tile.
///
/// Captures: page URL, 1-based page number, width, height, image or sprite
/// URL, optional horizontal sprite offset (present only for sprite tiles).
pub static PREVIEW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<a href="([^"]+)">(?:<div>)?<div title="Page (\d+)(?:[^"]+"){2}\D+(\d+)\D+(\d+)[^(]+\(([^)]+)\)(?: -(\d+))?"#,
    )
    .expect("PREVIEW regex")
});

// =============================================================================
// URL Patterns
// =============================================================================

/// Sprite URL signature used for normal preview cache keys.
///
/// Captures: sprite kind (`c1`, `c2`, `cm`), `gid-index` pair.
pub static NORMAL_PREVIEW_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(c[12m])/[^/]+/(\d+-\d+)").expect("NORMAL_PREVIEW_KEY regex")
});

/// Ten lowercase hex characters, the gallery token format.
pub static GALLERY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{10}$").expect("GALLERY_TOKEN regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});
