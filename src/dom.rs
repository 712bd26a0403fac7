//! DOM Operations Adapter
//!
//! Provides the small set of tree primitives the detail parsers need on top of
//! the `dom_query` crate: lookup by id and class, indexed children, attribute
//! access, whitespace-normalised text and inner markup serialisation.
//!
//! Lookups return `Option` instead of empty selections so that callers can
//! decide per field whether absence is a default or a failure.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Root `<html>` element of a parsed document.
///
/// The HTML5 tree builder always synthesises one, even for fragments.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    doc.select("html")
}

// === Querying ===

/// Returns the selection if it matched at least one node.
#[inline]
fn non_empty(sel: Selection<'_>) -> Option<Selection<'_>> {
    if sel.exists() {
        Some(sel)
    } else {
        None
    }
}

/// First descendant with the given `id`.
#[must_use]
pub fn by_id<'a>(root: &Selection<'a>, id: &str) -> Option<Selection<'a>> {
    non_empty(root.select_single(&format!("#{id}")))
}

/// All descendants carrying `class`, in document order.
#[must_use]
pub fn by_class<'a>(root: &Selection<'a>, class: &str) -> Vec<Selection<'a>> {
    root.select(&format!(".{class}"))
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// First descendant carrying `class`.
#[must_use]
pub fn first_by_class<'a>(root: &Selection<'a>, class: &str) -> Option<Selection<'a>> {
    non_empty(root.select_single(&format!(".{class}")))
}

// === Tree Navigation ===

/// Direct element children, in order.
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Element child at `index`, if there are that many.
#[must_use]
pub fn child<'a>(sel: &Selection<'a>, index: usize) -> Option<Selection<'a>> {
    sel.children().nodes().get(index).map(|node| Selection::from(*node))
}

/// Follows a path of element-child indices, e.g. `table > tbody > tr`.
#[must_use]
pub fn descend<'a>(sel: &Selection<'a>, path: &[usize]) -> Option<Selection<'a>> {
    path.iter()
        .try_fold(sel.clone(), |current, &index| child(&current, index))
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.prev_sibling();
        }
        None
    })
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Collapses runs of whitespace (including no-break spaces) and trims.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Text of the node and all descendants, whitespace-normalised.
#[must_use]
pub fn text(sel: &Selection) -> String {
    normalize_whitespace(&sel.text())
}

/// Text of the node's own text children only, whitespace-normalised.
///
/// `<td>12 pages <span>x</span></td>` yields `"12 pages"`.
#[must_use]
pub fn own_text(sel: &Selection) -> String {
    let Some(node) = sel.nodes().first() else {
        return String::new();
    };

    let mut raw = String::new();
    let mut current = node.first_child();
    while let Some(child) = current {
        if child.is_text() {
            raw.push_str(&child.text());
        }
        current = child.next_sibling();
    }
    normalize_whitespace(&raw)
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

// === Traversal ===

/// Visits the node and every descendant in document order until `visit`
/// returns `true`. Returns whether any visit did.
pub fn any_node<F>(sel: &Selection, mut visit: F) -> bool
where
    F: FnMut(&NodeRef) -> bool,
{
    let Some(root) = sel.nodes().first() else {
        return false;
    };
    if visit(root) {
        return true;
    }
    root.descendants().into_iter().any(|node| visit(&node))
}

// === Tree Manipulation ===

/// Rename element tag
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}
