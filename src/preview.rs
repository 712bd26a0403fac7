//! Preview pagination and preview tiles.
//!
//! The preview-page count is available both from the parsed pager table and
//! from the raw body; the tiles themselves are only ever read from the raw
//! body, since their geometry lives in inline styles.

use dom_query::Selection;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{PAGES, PREVIEW, PREVIEW_PAGES};
use crate::result::{LargePreview, NormalPreview, PreviewSet};

/// Preview-page count from the `.ptt` pager of a parsed document.
///
/// The last cell is the "next" arrow, so the count sits in the cell before
/// it. Any deviation from that shape is an error.
pub fn parse_preview_pages(root: &Selection) -> Result<i32> {
    let cells = dom::first_by_class(root, "ptt")
        .and_then(|ptt| dom::descend(&ptt, &[0, 0]))
        .map(|row| dom::children(&row))
        .ok_or_else(|| Error::parse("Can't parse preview pages"))?;

    cells
        .len()
        .checked_sub(2)
        .and_then(|index| cells.get(index))
        .and_then(|cell| parse_count(&dom::text(cell)))
        .ok_or_else(|| Error::parse("Can't parse preview pages"))
}

/// Preview-page count read straight from the body text.
pub fn parse_preview_pages_raw(body: &str) -> Result<i32> {
    PREVIEW_PAGES
        .captures(body)
        .and_then(|caps| parse_count(&caps[1]))
        .ok_or_else(|| Error::parse("Parse preview page count error"))
}

/// Total page count from the `Length:` row of the body text.
pub fn parse_pages(body: &str) -> Result<i32> {
    PAGES
        .captures(body)
        .and_then(|caps| parse_count(&caps[1]))
        .ok_or_else(|| Error::parse("Parse pages error"))
}

/// Integer with optional thousands separators.
fn parse_count(text: &str) -> Option<i32> {
    text.replace(',', "").trim().parse().ok()
}

/// Accumulates tiles of both layouts while scanning the body.
#[derive(Debug, Default)]
struct PreviewSetBuilder {
    large: Vec<LargePreview>,
    normal: Vec<NormalPreview>,
}

impl PreviewSetBuilder {
    fn push(&mut self, caps: &regex::Captures<'_>) {
        let Some(position) = caps[2].parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            log::debug!("skipping preview tile with page number {:?}", &caps[2]);
            return;
        };
        let page_url = caps[1].to_string();
        let url = caps[5].to_string();

        match caps.get(6) {
            None => self.large.push(LargePreview {
                position,
                url,
                page_url,
            }),
            Some(offset) => {
                let geometry = (
                    offset.as_str().parse::<i32>(),
                    caps[3].parse::<i32>(),
                    caps[4].parse::<i32>(),
                );
                let (Ok(offset_x), Ok(width), Ok(height)) = geometry else {
                    log::debug!("skipping preview tile {position} with oversized geometry");
                    return;
                };
                self.normal.push(NormalPreview {
                    position,
                    url,
                    offset_x,
                    offset_y: 0,
                    width,
                    height,
                    page_url,
                });
            }
        }
    }

    /// Large tiles win whenever there are any; the layouts never mix.
    fn build(self) -> Result<PreviewSet> {
        if !self.large.is_empty() {
            Ok(PreviewSet::Large(self.large))
        } else if !self.normal.is_empty() {
            Ok(PreviewSet::Normal(self.normal))
        } else {
            Err(Error::parse("Can't parse preview"))
        }
    }
}

/// Every preview tile of the body, as exactly one layout.
///
/// Fails when no tile of either layout is found.
pub fn parse_preview_set(body: &str) -> Result<PreviewSet> {
    let mut builder = PreviewSetBuilder::default();
    for caps in PREVIEW.captures_iter(body) {
        builder.push(&caps);
    }
    builder.build()
}

/// Tiles and preview-page count of one preview pagination page.
pub fn parse_preview_page(body: &str) -> Result<(PreviewSet, i32)> {
    let set = parse_preview_set(body)?;
    let pages = parse_preview_pages_raw(body)?;
    Ok((set, pages))
}
