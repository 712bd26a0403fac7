//! Comment list extraction (`#cdiv`).
//!
//! Every comment is a `.c1` block preceded by an `<a name="c{id}">` anchor.
//! A comment that cannot be read, or that the filter rejects, is dropped
//! without affecting its neighbours.

use chrono::{DateTime, NaiveDateTime, Utc};
use dom_query::Selection;

use crate::dom;
use crate::filter::CommentFilter;
use crate::result::{Comment, CommentList, ANONYMOUS};

/// Comment timestamp format, e.g. `"05 November 2019, 13:56"` (UTC).
pub const COMMENT_DATE_FORMAT: &str = "%d %B %Y, %H:%M";

const POSTED_PREFIX: &str = "Posted on ";
const BY_SUFFIX: &str = " by:";

/// Text of the expander shown when only part of the thread is rendered.
const SHOW_ALL: &str = "click to show all";

/// Why a single comment was dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    #[error("comment has no id anchor")]
    MissingId,
    #[error("comment id {0:?} is not numeric")]
    BadId(String),
    #[error("comment has no {0} element")]
    MissingElement(&'static str),
    #[error("unreadable comment date {0:?}")]
    BadDate(String),
    #[error("comment {0} rejected by filter")]
    Filtered(i64),
}

/// Parse the comment list of a detail page.
///
/// A missing `#cdiv` gives an empty list. `has_more` is set when the
/// `#chd` expander anywhere below contains "click to show all".
#[must_use]
pub fn parse_comments(
    root: &Selection,
    threshold: i32,
    filter: &dyn CommentFilter,
) -> CommentList {
    let Some(cdiv) = dom::by_id(root, "cdiv") else {
        log::debug!("no #cdiv container");
        return CommentList::default();
    };

    let comments = dom::by_class(&cdiv, "c1")
        .iter()
        .filter_map(|element| match parse_comment(element, threshold, filter) {
            Ok(comment) => Some(comment),
            Err(CommentError::Filtered(id)) => {
                log::debug!("comment {id} hidden by filter");
                None
            }
            Err(err) => {
                log::warn!("skipping comment: {err}");
                None
            }
        })
        .collect();

    let has_more = dom::by_id(&cdiv, "chd").is_some_and(|chd| has_show_all(&chd));

    CommentList { comments, has_more }
}

/// Whether the expander subtree offers to show the full thread.
#[must_use]
pub fn has_show_all(chd: &Selection) -> bool {
    dom::any_node(chd, |node| {
        if node.is_text() {
            dom::normalize_whitespace(&node.text()) == SHOW_ALL
        } else {
            node.is_element() && dom::text(&Selection::from(*node)) == SHOW_ALL
        }
    })
}

/// Parse one `.c1` comment block.
pub fn parse_comment(
    element: &Selection,
    threshold: i32,
    filter: &dyn CommentFilter,
) -> Result<Comment, CommentError> {
    let mut comment = Comment {
        id: parse_id(element)?,
        ..Comment::default()
    };

    // Uploader marker, vote and edit affordances
    if let Some(c4) = dom::first_by_class(element, "c4") {
        if dom::text(&c4) == "Uploader Comment" {
            comment.uploader = true;
        }
        for action in dom::children(&c4) {
            let applied = || dom::attr(&action, "style").is_some_and(|style| !style.trim().is_empty());
            match dom::text(&action).as_str() {
                "Vote+" => {
                    comment.vote_up_able = true;
                    comment.vote_up_ed = applied();
                }
                "Vote-" => {
                    comment.vote_down_able = true;
                    comment.vote_down_ed = applied();
                }
                "Edit" => comment.editable = true,
                _ => {}
            }
        }
    }

    if let Some(c7) = dom::first_by_class(element, "c7") {
        comment.vote_state = Some(dom::text(&c7));
    }

    comment.score = dom::first_by_class(element, "c5")
        .and_then(|c5| dom::child(&c5, 0))
        .and_then(|score| dom::text(&score).parse().ok())
        .unwrap_or(0);

    let c3 = dom::first_by_class(element, "c3").ok_or(CommentError::MissingElement("c3"))?;
    let posted = dom::own_text(&c3);
    let (time, has_user) = split_posted(&posted);
    comment.time = parse_comment_date(time)?;
    comment.user = if has_user {
        dom::child(&c3, 0).map_or_else(|| ANONYMOUS.to_string(), |user| dom::text(&user))
    } else {
        ANONYMOUS.to_string()
    };

    let c6 = dom::first_by_class(element, "c6").ok_or(CommentError::MissingElement("c6"))?;
    comment.comment = normalize_body(&c6);

    if !comment.uploader
        && (comment.score <= threshold
            || !filter.allow_commenter(&comment.user)
            || !filter.allow_comment(&comment.comment))
    {
        return Err(CommentError::Filtered(comment.id));
    }

    if let Some(edited) = dom::first_by_class(element, "c8").and_then(|c8| dom::child(&c8, 0)) {
        let text = dom::text(&edited);
        if !text.is_empty() {
            comment.last_edited = Some(parse_comment_date(&text)?);
        }
    }

    Ok(comment)
}

/// Id from the `name="c123"` anchor right before the comment block.
fn parse_id(element: &Selection) -> Result<i64, CommentError> {
    let name = dom::previous_element_sibling(element)
        .and_then(|anchor| dom::attr(&anchor, "name"))
        .ok_or(CommentError::MissingId)?;
    let name = name.trim();
    name.get(1..)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| CommentError::BadId(name.to_string()))
}

/// Splits `"Posted on <date> by:"` / `"Posted on <date>"` into the date and
/// whether an author link follows.
fn split_posted(line: &str) -> (&str, bool) {
    let rest = line.strip_prefix(POSTED_PREFIX).unwrap_or(line);
    match rest.strip_suffix(BY_SUFFIX) {
        Some(time) => (time, true),
        None => (rest.strip_suffix(':').unwrap_or(rest), line.ends_with(':')),
    }
}

/// Parses a comment timestamp as UTC.
pub fn parse_comment_date(text: &str) -> Result<DateTime<Utc>, CommentError> {
    NaiveDateTime::parse_from_str(text.trim(), COMMENT_DATE_FORMAT)
        .map(|time| time.and_utc())
        .map_err(|_| CommentError::BadDate(text.to_string()))
}

/// Rewrites body markup before it is stored.
///
/// Underline spans become `<u>`; `<s>`/`<strike>` become `<del>`.
fn normalize_body(c6: &Selection) -> String {
    for span in c6.select("span").nodes() {
        let span = Selection::from(*span);
        if dom::attr(&span, "style").as_deref() == Some("text-decoration:underline;") {
            dom::rename(&span, "u");
        }
    }
    for strike in c6.select("s, strike").nodes() {
        dom::rename(&Selection::from(*strike), "del");
    }
    dom::inner_html(c6)
}
