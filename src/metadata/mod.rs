//! Gallery metadata extraction.
//!
//! Identity comes from the inline page script and is mandatory. Everything
//! else is read from the `.gm` block and the info table, and falls back to
//! a default when the markup is missing or malformed.

pub mod info_table;
pub mod newer_versions;

use dom_query::Selection;

use crate::category::Category;
use crate::dom;
use crate::error::{Error, Result};
use crate::filter::LocalFavorites;
use crate::patterns::{ARCHIVE, COVER, DETAIL, FAVORITE_SLOT, TORRENT};
use crate::result::{GalleryDetail, FAV_SLOT_LOCAL, FAV_SLOT_UNSET, NOT_RATED};

pub use info_table::{parse_info_table, InfoLabel, InfoTable};
pub use newer_versions::parse_newer_versions;

/// Identity variables of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub gid: i64,
    pub token: String,
    pub api_uid: i64,
    pub api_key: String,
}

/// Favorite state shown by the `#gdf` button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteState {
    pub is_favorited: bool,
    pub name: Option<String>,
    pub slot: i32,
}

impl Default for FavoriteState {
    fn default() -> Self {
        Self {
            is_favorited: false,
            name: None,
            slot: FAV_SLOT_UNSET,
        }
    }
}

/// Extract all metadata from a detail page.
///
/// Fails only when the identity variables cannot be read. The returned
/// record has its tag, comment and preview fields left at their defaults.
pub fn extract_metadata(
    root: &Selection,
    body: &str,
    favorites: &dyn LocalFavorites,
) -> Result<GalleryDetail> {
    let identity = parse_identity(body)?;
    let mut gd = GalleryDetail {
        gid: identity.gid,
        token: identity.token,
        api_uid: identity.api_uid,
        api_key: identity.api_key,
        ..GalleryDetail::default()
    };

    if let Some((url, count)) = parse_torrent(body) {
        gd.torrent_url = Some(url);
        gd.torrent_count = count;
    }
    gd.archive_url = parse_archive(body);

    if let Some(gm) = dom::first_by_class(root, "gm") {
        gd = extract_gm(&gm, body, gd);
    } else {
        log::warn!("gallery {}: no .gm block, keeping default metadata", gd.gid);
    }

    if gd.favorite_slot == FAV_SLOT_UNSET && favorites.contains(gd.gid) {
        gd.favorite_slot = FAV_SLOT_LOCAL;
    }

    if let Some(gnd) = dom::by_id(root, "gnd") {
        gd.newer_versions = parse_newer_versions(&gnd, body);
    }

    Ok(gd)
}

/// Fields living inside the `.gm` block.
fn extract_gm(gm: &Selection, body: &str, mut gd: GalleryDetail) -> GalleryDetail {
    gd.thumb = parse_thumb(gm);
    gd.title = non_empty_text(gm, "gn");
    gd.title_jpn = non_empty_text(gm, "gj");
    gd.category = parse_category(gm);

    let (uploader, disowned) = parse_uploader(gm);
    gd.uploader = uploader;
    gd.disowned = disowned;

    match dom::by_id(gm, "gdd").and_then(|gdd| parse_info_table(&gdd)) {
        Some(info) => {
            gd.posted = info.posted;
            gd.parent = info.parent;
            gd.visible = info.visible;
            gd.language = info.language;
            gd.size = info.size;
            gd.pages = info.pages;
            gd.favorite_count = info.favorite_count;
        }
        None => log::warn!("gallery {}: info table missing", gd.gid),
    }

    gd.rating_count = parse_rating_count(gm);
    gd.rating = parse_rating(gm);

    let favorite = parse_favorite(gm, body);
    gd.is_favorited = favorite.is_favorited;
    gd.favorite_name = favorite.name;
    gd.favorite_slot = favorite.slot;

    gd
}

/// Reads gid, token, apiuid and apikey from the inline script.
///
/// A missing match or a non-positive gid is fatal for the whole record.
pub fn parse_identity(body: &str) -> Result<Identity> {
    let caps = DETAIL
        .captures(body)
        .ok_or_else(|| Error::parse("Can't parse gallery detail"))?;

    let gid = caps[1]
        .parse::<i64>()
        .ok()
        .filter(|gid| *gid > 0)
        .ok_or_else(|| Error::parse("Can't parse gallery detail"))?;

    Ok(Identity {
        gid,
        token: caps[2].to_string(),
        api_uid: caps[3].parse().unwrap_or(-1),
        api_key: caps[4].to_string(),
    })
}

/// Torrent popup URL and torrent count, when the link is present.
#[must_use]
pub fn parse_torrent(body: &str) -> Option<(String, i32)> {
    TORRENT.captures(body).map(|caps| {
        (
            unescape_xml(caps[1].trim()),
            caps[2].parse().unwrap_or(0),
        )
    })
}

/// Archive popup URL, when the link is present.
#[must_use]
pub fn parse_archive(body: &str) -> Option<String> {
    ARCHIVE.captures(body).map(|caps| unescape_xml(caps[1].trim()))
}

/// Cover URL from the inline style of the first child of `#gd1`.
#[must_use]
pub fn parse_thumb(gm: &Selection) -> Option<String> {
    let style = dom::by_id(gm, "gd1")
        .and_then(|gd1| dom::child(&gd1, 0))
        .and_then(|cover| dom::attr(&cover, "style"))?;
    COVER
        .captures(style.trim())
        .map(|caps| caps[3].to_string())
}

/// Category from the `.cn` (or older `.cs`) badge inside `#gdc`.
#[must_use]
pub fn parse_category(gm: &Selection) -> Category {
    dom::by_id(gm, "gdc")
        .and_then(|gdc| dom::first_by_class(&gdc, "cn").or_else(|| dom::first_by_class(&gdc, "cs")))
        .map_or(Category::Unknown, |badge| Category::resolve(&dom::text(&badge)))
}

/// Uploader name and whether the gallery has been disowned.
#[must_use]
pub fn parse_uploader(gm: &Selection) -> (String, bool) {
    match dom::by_id(gm, "gdn") {
        Some(gdn) => {
            let disowned = dom::attr(&gdn, "style").is_some_and(|style| style.contains("opacity:0.5"));
            (dom::text(&gdn), disowned)
        }
        None => (String::new(), false),
    }
}

#[must_use]
pub fn parse_rating_count(gm: &Selection) -> i32 {
    dom::by_id(gm, "rating_count")
        .and_then(|e| dom::text(&e).parse().ok())
        .unwrap_or(0)
}

/// Average rating from `#rating_label`; [`NOT_RATED`] when missing.
#[must_use]
pub fn parse_rating(gm: &Selection) -> f32 {
    dom::by_id(gm, "rating_label").map_or(NOT_RATED, |label| rating_from_label(&dom::text(&label)))
}

/// `"Not Yet Rated"` → -1.0, `"Average: 4.5"` → 4.5, malformed → 0.0.
#[must_use]
pub fn rating_from_label(label: &str) -> f32 {
    if label == "Not Yet Rated" {
        return NOT_RATED;
    }
    label
        .split_once(' ')
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Favorite state from the `#gdf` button and the slot icon in the raw body.
#[must_use]
pub fn parse_favorite(gm: &Selection, body: &str) -> FavoriteState {
    let Some(gdf) = dom::by_id(gm, "gdf") else {
        return FavoriteState::default();
    };

    let name = dom::text(&gdf);
    if name == "Add to Favorites" {
        return FavoriteState::default();
    }

    FavoriteState {
        is_favorited: true,
        name: Some(name),
        slot: favorite_slot(body).unwrap_or(FAV_SLOT_UNSET),
    }
}

/// Slot index encoded by the vertical offset of the favorite icon sprite.
///
/// Each slot is 19px tall starting at 2px, so `slot = (offset - 2) / 19`.
/// An unreadable offset counts as 2px (slot 0).
#[must_use]
pub fn favorite_slot(body: &str) -> Option<i32> {
    FAVORITE_SLOT.captures(body).map(|caps| {
        let offset = caps[1].parse::<i32>().unwrap_or(2);
        (offset - 2) / 19
    })
}

/// Title-like element text, `None` when the element is missing or blank.
fn non_empty_text(gm: &Selection, id: &str) -> Option<String> {
    dom::by_id(gm, id)
        .map(|e| dom::text(&e))
        .filter(|text| !text.is_empty())
}

/// Reverses the XML escaping applied to URLs inside onclick attributes.
fn unescape_xml(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
