//! "There are newer versions of this gallery available" block (`#gnd`).

use dom_query::Selection;

use crate::dom;
use crate::patterns::NEWER_DATE;
use crate::result::GalleryInfo;
use crate::url_utils::parse_detail_url;

/// Pairs each listed link with its posting date.
///
/// Dates only exist in the raw body (`, added <date><br />`), one per
/// listed version, in the same order as the links. Links that are not
/// gallery detail URLs are skipped.
#[must_use]
pub fn parse_newer_versions(gnd: &Selection, body: &str) -> Vec<GalleryInfo> {
    let dates = NEWER_DATE.captures_iter(body).map(|caps| caps[1].to_string());

    gnd.select("a")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .zip(dates)
        .filter_map(|(link, posted)| {
            let href = dom::attr(&link, "href").unwrap_or_default();
            let Some(parsed) = parse_detail_url(&href) else {
                log::debug!("skipping newer version with unrecognised link {href:?}");
                return None;
            };
            Some(GalleryInfo {
                gid: parsed.gid,
                token: parsed.token,
                title: dom::text(&link),
                posted,
            })
        })
        .collect()
}
