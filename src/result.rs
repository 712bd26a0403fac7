//! Result types for detail page parsing.
//!
//! This module defines the structured record produced from a gallery detail
//! page, together with its tag groups, comments and preview tiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache_key;
use crate::category::Category;
use crate::options::Options;
use crate::url_utils;

/// Favorite slot of a gallery that is not favorited, or not yet determined.
pub const FAV_SLOT_UNSET: i32 = -2;

/// Favorite slot of a gallery only kept in the local favorites.
pub const FAV_SLOT_LOCAL: i32 = -1;

/// Rating of a gallery nobody has rated yet.
pub const NOT_RATED: f32 = -1.0;

/// Minimal reference to another gallery, used for newer versions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryInfo {
    pub gid: i64,
    pub token: String,
    pub title: String,
    /// Posting date as printed by the site.
    pub posted: String,
}

/// Record parsed from a gallery detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryDetail {
    // === Identity ===
    pub gid: i64,
    pub token: String,
    pub api_uid: i64,
    pub api_key: String,

    // === Display ===
    pub title: Option<String>,
    pub title_jpn: Option<String>,
    pub category: Category,
    pub uploader: String,
    /// The uploader account no longer owns the gallery.
    pub disowned: bool,
    /// Raw thumbnail URL as found in the cover style; see [`GalleryDetail::thumb_url`].
    pub thumb: Option<String>,

    // === Info table ===
    /// Posting date exactly as displayed.
    pub posted: String,
    /// Link to the parent gallery, empty when there is none.
    pub parent: String,
    pub visible: String,
    pub language: String,
    /// File size exactly as displayed (e.g. `"48.41 MiB"`).
    pub size: String,
    pub pages: i32,
    pub favorite_count: i32,

    // === Rating ===
    /// Average rating, [`NOT_RATED`] when unrated.
    pub rating: f32,
    pub rating_count: i32,

    // === Favorites ===
    pub is_favorited: bool,
    pub favorite_name: Option<String>,
    /// [`FAV_SLOT_UNSET`], [`FAV_SLOT_LOCAL`] or a remote slot index.
    pub favorite_slot: i32,

    // === Downloads ===
    pub torrent_url: Option<String>,
    pub torrent_count: i32,
    pub archive_url: Option<String>,

    // === Related records ===
    pub newer_versions: Vec<GalleryInfo>,
    pub tags: Vec<TagGroup>,
    pub comments: CommentList,
    pub preview_pages: i32,
    pub preview_set: PreviewSet,

    /// Short language code derived from `language` or the title.
    pub simple_language: Option<String>,
}

impl Default for GalleryDetail {
    fn default() -> Self {
        Self {
            gid: -1,
            token: String::new(),
            api_uid: -1,
            api_key: String::new(),
            title: None,
            title_jpn: None,
            category: Category::Unknown,
            uploader: String::new(),
            disowned: false,
            thumb: None,
            posted: String::new(),
            parent: String::new(),
            visible: String::new(),
            language: String::new(),
            size: String::new(),
            pages: 0,
            favorite_count: 0,
            rating: NOT_RATED,
            rating_count: 0,
            is_favorited: false,
            favorite_name: None,
            favorite_slot: FAV_SLOT_UNSET,
            torrent_url: None,
            torrent_count: 0,
            archive_url: None,
            newer_versions: Vec::new(),
            tags: Vec::new(),
            comments: CommentList::default(),
            preview_pages: 0,
            preview_set: PreviewSet::Large(Vec::new()),
            simple_language: None,
        }
    }
}

impl GalleryDetail {
    /// Thumbnail URL completed for the configured site.
    #[must_use]
    pub fn thumb_url(&self, options: &Options) -> Option<String> {
        self.thumb.as_deref().map(|thumb| url_utils::thumb_url(thumb, options))
    }

    /// Cache key of the cover thumbnail.
    #[must_use]
    pub fn thumb_key(&self) -> String {
        cache_key::thumb_key(self.gid)
    }
}

/// One namespace of the tag list (e.g. `female`) with its tags.
///
/// Tags carry their state as prefixes, see [`TagGroup::UPVOTED`] and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    pub namespace: String,
    pub tags: Vec<String>,
}

impl TagGroup {
    /// Prefix of a tag the current user voted up.
    pub const UPVOTED: &'static str = "_U";
    /// Prefix of a tag the current user voted down.
    pub const DOWNVOTED: &'static str = "_D";
    /// Prefix of a weak (low-confidence) tag.
    pub const WEAK: &'static str = "_W";
    /// Prefix of a tag highlighted by the user's watch list.
    pub const ACTIVE: &'static str = "_L";

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Name shown for comments posted without an account name.
pub const ANONYMOUS: &str = "Anonymous";

/// A gallery comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Comment {
    pub id: i64,
    pub user: String,
    pub time: DateTime<Utc>,
    pub last_edited: Option<DateTime<Utc>>,
    /// Body markup after tag normalisation.
    pub comment: String,
    pub score: i32,
    pub uploader: bool,
    pub vote_up_able: bool,
    pub vote_up_ed: bool,
    pub vote_down_able: bool,
    pub vote_down_ed: bool,
    pub editable: bool,
    /// Vote breakdown text as displayed (e.g. `"Base +3, user +5"`).
    pub vote_state: Option<String>,
}

/// Comments of a detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentList {
    pub comments: Vec<Comment>,
    /// Only part of the thread is shown; the full list needs another request.
    pub has_more: bool,
}

/// Preview tile showing a whole image of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargePreview {
    /// Zero-based page position.
    pub position: usize,
    pub url: String,
    pub page_url: String,
}

/// Preview tile cut out of a shared sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalPreview {
    /// Zero-based page position.
    pub position: usize,
    /// Sprite sheet URL.
    pub url: String,
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: i32,
    pub height: i32,
    pub page_url: String,
}

/// Crop rectangle inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Uniform view of a single preview tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryPreview {
    pub position: usize,
    pub url: String,
    pub page_url: String,
    /// `Some` for sprite tiles.
    pub clip: Option<Clip>,
    /// Key under which the decoded preview image is cached.
    pub image_key: String,
}

/// Preview tiles of one preview page.
///
/// A page uses exactly one of the two layouts, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "previews")]
pub enum PreviewSet {
    Large(Vec<LargePreview>),
    Normal(Vec<NormalPreview>),
}

impl Default for PreviewSet {
    fn default() -> Self {
        Self::Large(Vec::new())
    }
}

impl PreviewSet {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Large(items) => items.len(),
            Self::Normal(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Zero-based page position of the tile at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<usize> {
        match self {
            Self::Large(items) => items.get(index).map(|p| p.position),
            Self::Normal(items) => items.get(index).map(|p| p.position),
        }
    }

    /// Link to the page viewer for the tile at `index`.
    #[must_use]
    pub fn page_url(&self, index: usize) -> Option<&str> {
        match self {
            Self::Large(items) => items.get(index).map(|p| p.page_url.as_str()),
            Self::Normal(items) => items.get(index).map(|p| p.page_url.as_str()),
        }
    }

    /// Uniform preview of the tile at `index` of gallery `gid`.
    #[must_use]
    pub fn preview(&self, gid: i64, index: usize) -> Option<GalleryPreview> {
        match self {
            Self::Large(items) => items.get(index).map(|p| GalleryPreview {
                position: p.position,
                url: p.url.clone(),
                page_url: p.page_url.clone(),
                clip: None,
                image_key: cache_key::large_preview_key(gid, p.position),
            }),
            Self::Normal(items) => items.get(index).map(|p| GalleryPreview {
                position: p.position,
                url: p.url.clone(),
                page_url: p.page_url.clone(),
                clip: Some(Clip {
                    x: p.offset_x,
                    y: p.offset_y,
                    width: p.width,
                    height: p.height,
                }),
                image_key: cache_key::normal_preview_key(&p.url),
            }),
        }
    }

    /// All tiles as uniform previews, in page order of the markup.
    #[must_use]
    pub fn previews(&self, gid: i64) -> Vec<GalleryPreview> {
        (0..self.len()).filter_map(|i| self.preview(gid, i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_detail_has_sentinels() {
        let gd = GalleryDetail::default();
        assert_eq!(gd.gid, -1);
        assert_eq!(gd.favorite_slot, FAV_SLOT_UNSET);
        assert_eq!(gd.rating, NOT_RATED);
        assert_eq!(gd.category, Category::Unknown);
        assert!(gd.preview_set.is_empty());
    }

    #[test]
    fn normal_preview_exposes_clip_and_sprite_key() {
        let set = PreviewSet::Normal(vec![NormalPreview {
            position: 3,
            url: "https://a.hath.network/cm/tok/123-0.webp".to_string(),
            offset_x: 200,
            offset_y: 0,
            width: 100,
            height: 142,
            page_url: "https://e-hentai.org/s/aa/123-4".to_string(),
        }]);

        let preview = set.preview(123, 0).expect("preview");
        assert_eq!(preview.position, 3);
        assert_eq!(preview.clip, Some(Clip { x: 200, y: 0, width: 100, height: 142 }));
        assert_eq!(preview.image_key, "preview:normal:cm:123-0");
        assert!(set.preview(123, 1).is_none());
    }

    #[test]
    fn large_preview_keys_by_position() {
        let set = PreviewSet::Large(vec![LargePreview {
            position: 7,
            url: "https://a.hath.network/x/y.webp".to_string(),
            page_url: "https://e-hentai.org/s/bb/9-8".to_string(),
        }]);

        assert_eq!(set.position(0), Some(7));
        assert_eq!(set.page_url(0), Some("https://e-hentai.org/s/bb/9-8"));
        let previews = set.previews(9);
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].image_key, "preview:large:9:7");
        assert!(previews[0].clip.is_none());
    }
}
