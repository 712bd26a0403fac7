//! Tag list extraction (`#taglist`).
//!
//! Each table row is one namespace. Vote, weak and watched state are folded
//! into the tag string as prefixes; the vote prefix ends up outermost when
//! several apply, e.g. `_U_Wbig breasts` is upvoted and weak.

use dom_query::Selection;

use crate::dom;
use crate::result::TagGroup;

/// Parse tag groups from the document.
///
/// Missing or malformed containers yield an empty list. A group that fails
/// to parse is skipped on its own.
#[must_use]
pub fn parse_tag_groups(root: &Selection) -> Vec<TagGroup> {
    let Some(taglist) = dom::by_id(root, "taglist") else {
        log::debug!("no #taglist container");
        return Vec::new();
    };
    if dom::children(&taglist).is_empty() {
        return Vec::new();
    }
    let Some(rows) = dom::descend(&taglist, &[0, 0]) else {
        log::warn!("#taglist has no table body");
        return Vec::new();
    };

    dom::children(&rows)
        .iter()
        .filter_map(|row| match parse_tag_group(row) {
            Ok(group) if group.is_empty() => None,
            Ok(group) => Some(group),
            Err(reason) => {
                log::warn!("skipping tag group: {reason}");
                None
            }
        })
        .collect()
}

/// Parse one `<tr><td>namespace:</td><td>tags</td></tr>` row.
///
/// The returned group may be empty; callers drop those.
pub fn parse_tag_group(row: &Selection) -> Result<TagGroup, &'static str> {
    let label = dom::child(row, 0).ok_or("row has no namespace cell")?;
    let cell = dom::child(row, 1).ok_or("row has no tag cell")?;

    let label = dom::text(&label);
    let namespace = label.strip_suffix(':').unwrap_or(&label).to_string();

    let tags = dom::children(&cell)
        .iter()
        .map(parse_tag)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TagGroup { namespace, tags })
}

/// Parse one tag `<div class="gt"><a class="tup">name</a></div>`.
pub fn parse_tag(tag_cell: &Selection) -> Result<String, &'static str> {
    let mut tag = dom::text(tag_cell);
    // Parody tags may carry an English translation after '|'
    if let Some(index) = tag.find('|') {
        tag = tag[..index].trim().to_string();
    }

    let link = dom::child(tag_cell, 0).ok_or("tag cell has no link")?;

    // Innermost first: active, weak, then the vote marker.
    if tag_cell.has_class("gtl") {
        tag.insert_str(0, TagGroup::ACTIVE);
    }
    if tag_cell.has_class("gtw") {
        tag.insert_str(0, TagGroup::WEAK);
    }
    if link.has_class("tup") {
        tag.insert_str(0, TagGroup::UPVOTED);
    } else if link.has_class("tdn") {
        tag.insert_str(0, TagGroup::DOWNVOTED);
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_of(html: &str) -> Vec<TagGroup> {
        let doc = dom::parse(html);
        parse_tag_groups(&dom::root(&doc))
    }

    fn tag_of(html: &str) -> Result<String, &'static str> {
        let doc = dom::parse(html);
        let cell = doc.select("div.gt, div.gtl, div.gtw");
        parse_tag(&cell)
    }

    #[test]
    fn plain_tag_is_bare_text() {
        assert_eq!(tag_of(r#"<div class="gt"><a>big breasts</a></div>"#), Ok("big breasts".to_string()));
    }

    #[test]
    fn markers_compose_in_fixed_order() {
        assert_eq!(
            tag_of(r#"<div class="gtw"><a class="tup">sole female</a></div>"#),
            Ok("_U_Wsole female".to_string())
        );
        assert_eq!(
            tag_of(r#"<div class="gtl"><a class="tdn">glasses</a></div>"#),
            Ok("_D_Lglasses".to_string())
        );
    }

    #[test]
    fn translation_suffix_is_removed() {
        assert_eq!(
            tag_of(r#"<div class="gt"><a>touhou project | 東方</a></div>"#),
            Ok("touhou project".to_string())
        );
    }

    #[test]
    fn groups_in_order_and_empty_groups_dropped() {
        let groups = groups_of(
            r#"<div id="taglist"><table><tr><td class="tc">parody:</td><td>
                 <div class="gt"><a>touhou project</a></div></td></tr>
               <tr><td class="tc">female:</td><td>
                 <div class="gt"><a class="tup">sole female</a></div>
                 <div class="gtw"><a>glasses</a></div></td></tr>
               <tr><td class="tc">male:</td><td></td></tr></table></div>"#,
        );

        assert_eq!(
            groups,
            vec![
                TagGroup {
                    namespace: "parody".to_string(),
                    tags: vec!["touhou project".to_string()],
                },
                TagGroup {
                    namespace: "female".to_string(),
                    tags: vec!["_Usole female".to_string(), "_Wglasses".to_string()],
                },
            ]
        );
    }

    #[test]
    fn broken_group_is_skipped_alone() {
        let groups = groups_of(
            r#"<div id="taglist"><table><tr><td class="tc">parody:</td></tr>
               <tr><td class="tc">artist:</td><td><div class="gt"></div></td></tr>
               <tr><td class="tc">group:</td><td><div class="gt"><a>circle</a></div></td></tr></table></div>"#,
        );

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].namespace, "group");
    }

    #[test]
    fn namespace_without_colon_keeps_its_tags() {
        let groups = groups_of(
            r#"<div id="taglist"><table><tr><td class="tc">misc</td><td>
                 <div class="gt"><a>full color</a></div></td></tr></table></div>"#,
        );

        assert_eq!(
            groups,
            vec![TagGroup {
                namespace: "misc".to_string(),
                tags: vec!["full color".to_string()],
            }]
        );
    }

    #[test]
    fn empty_or_missing_taglist() {
        assert!(groups_of(r#"<div id="taglist"></div>"#).is_empty());
        assert!(groups_of(r#"<div id="other"></div>"#).is_empty());
    }
}
