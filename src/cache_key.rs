//! Cache keys for gallery images and previews.
//!
//! Sprite sheets are shared by every tile cut out of them, so normal preview
//! keys are derived from the sprite URL rather than from the page position.

use crate::patterns::NORMAL_PREVIEW_KEY;

/// Key of the full image at `index` of gallery `gid`.
#[must_use]
pub fn image_key(gid: i64, index: usize) -> String {
    format!("image:{gid}:{index}")
}

/// Key of the cover thumbnail, shared with the first large preview.
#[must_use]
pub fn thumb_key(gid: i64) -> String {
    large_preview_key(gid, 0)
}

#[must_use]
pub fn large_preview_key(gid: i64, index: usize) -> String {
    format!("preview:large:{gid}:{index}")
}

/// Key of a sprite sheet. URLs without the H@H sprite signature are their own key.
#[must_use]
pub fn normal_preview_key(url: &str) -> String {
    NORMAL_PREVIEW_KEY.captures(url).map_or_else(
        || url.to_string(),
        |caps| format!("preview:normal:{}:{}", &caps[1], &caps[2]),
    )
}

#[must_use]
pub fn is_normal_preview_key(key: &str) -> bool {
    key.starts_with("preview:normal:")
}
