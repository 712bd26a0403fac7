//! The label/value info table (`#gdd`).
//!
//! Rows are dispatched on their label through a closed [`InfoLabel`] enum.
//! Labels are matched by prefix so that variants such as
//! "Favorited by you:" still land on the right field. Unknown labels are
//! ignored.

use dom_query::Selection;

use crate::dom;

/// Recognised row labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLabel {
    Posted,
    Parent,
    Visible,
    Language,
    FileSize,
    Length,
    Favorited,
}

impl InfoLabel {
    const PREFIXES: [(&'static str, InfoLabel); 7] = [
        ("Posted", InfoLabel::Posted),
        ("Parent", InfoLabel::Parent),
        ("Visible", InfoLabel::Visible),
        ("Language", InfoLabel::Language),
        ("File Size", InfoLabel::FileSize),
        ("Length", InfoLabel::Length),
        ("Favorited", InfoLabel::Favorited),
    ];

    /// Label for the text of a row's first cell, `None` when unrecognised.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, label)| *label)
    }
}

/// Fields read from the info table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoTable {
    pub posted: String,
    pub parent: String,
    pub visible: String,
    pub language: String,
    pub size: String,
    pub pages: i32,
    pub favorite_count: i32,
}

/// Reads every row of the table body inside `#gdd`.
///
/// Returns `None` when the expected `table > tbody` nesting is missing.
#[must_use]
pub fn parse_info_table(gdd: &Selection) -> Option<InfoTable> {
    let tbody = dom::descend(gdd, &[0, 0])?;
    let mut table = InfoTable::default();
    for row in dom::children(&tbody) {
        parse_info_row(&row, &mut table);
    }
    Some(table)
}

/// Applies a single `<tr><td>label</td><td>value</td></tr>` row.
///
/// Rows with fewer than two cells are skipped.
pub fn parse_info_row(row: &Selection, table: &mut InfoTable) {
    let cells = dom::children(row);
    let [key_cell, value_cell, ..] = cells.as_slice() else {
        return;
    };

    let Some(label) = InfoLabel::from_key(&dom::text(key_cell)) else {
        return;
    };
    apply(label, value_cell, table);
}

/// Stores the value cell of a row into the field selected by `label`.
pub fn apply(label: InfoLabel, value_cell: &Selection, table: &mut InfoTable) {
    let value = dom::own_text(value_cell);
    match label {
        InfoLabel::Posted => table.posted = value,
        InfoLabel::Parent => {
            if let Some(href) = dom::child(value_cell, 0).and_then(|a| dom::attr(&a, "href")) {
                table.parent = href;
            }
        }
        InfoLabel::Visible => table.visible = value,
        InfoLabel::Language => table.language = value,
        InfoLabel::FileSize => table.size = value,
        InfoLabel::Length => table.pages = parse_length(&value),
        InfoLabel::Favorited => table.favorite_count = parse_favorite_count(&value),
    }
}

/// Leading integer of thousands-separated text, e.g. `"1,234"`.
fn parse_count(token: &str) -> Option<i32> {
    token.replace(',', "").parse().ok()
}

/// `"53 pages"` → 53. Anything without a leading count is a single page.
#[must_use]
pub fn parse_length(value: &str) -> i32 {
    value
        .split_once(' ')
        .and_then(|(count, _)| parse_count(count))
        .unwrap_or(1)
}

/// `"Never"` → 0, `"Once"` → 1, `"1234 times"` → 1234, anything else 0.
#[must_use]
pub fn parse_favorite_count(value: &str) -> i32 {
    match value {
        "Never" => 0,
        "Once" => 1,
        _ => value
            .split_once(' ')
            .and_then(|(count, _)| parse_count(count))
            .unwrap_or(0),
    }
}
