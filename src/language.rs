//! Simple language codes.
//!
//! Local favorites are filtered by a two-letter language code. It is derived
//! from the info table's language value when possible, and from bracketed
//! hints in the title otherwise.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Language name as printed by the site, and its simple code.
const LANGUAGES: &[(&str, &str)] = &[
    ("japanese", "JA"),
    ("english", "EN"),
    ("chinese", "ZH"),
    ("dutch", "NL"),
    ("french", "FR"),
    ("german", "DE"),
    ("hungarian", "HU"),
    ("italian", "IT"),
    ("korean", "KO"),
    ("polish", "PL"),
    ("portuguese", "PT"),
    ("russian", "RU"),
    ("spanish", "ES"),
    ("thai", "TH"),
    ("vietnamese", "VI"),
];

/// Title hints, checked in order. Japanese has none: untranslated titles
/// carry no marker.
static TITLE_HINTS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)[(\[]eng(?:lish)?[)\]]|英訳", "EN"),
        (r"(?i)[(\[]chinese[)\]]|中文|汉化|漢化|中国翻訳", "ZH"),
        (r"(?i)[(\[]spanish[)\]]|[(\[]español[)\]]|[(\[]espanol[)\]]", "ES"),
        (r"(?i)[(\[]korean?[)\]]|한국어", "KO"),
        (r"(?i)[(\[]rus(?:sian)?[)\]]", "RU"),
        (r"(?i)[(\[]fr(?:ench)?[)\]]|[(\[]français[)\]]", "FR"),
        (r"(?i)[(\[](?:portuguese|português)[)\]]", "PT"),
        (r"(?i)[(\[]thai(?: ภาษาไทย)?[)\]]|แปลไทย", "TH"),
        (r"(?i)[(\[]german[)\]]|[(\[]deutsch[)\]]", "DE"),
        (r"(?i)[(\[]italiano?[)\]]", "IT"),
        (r"(?i)[(\[]vietnamese(?: Tiếng Việt)?[)\]]", "VI"),
        (r"(?i)[(\[]polish[)\]]", "PL"),
        (r"(?i)[(\[]hun(?:garian)?[)\]]|[(\[]magyar[)\]]", "HU"),
        (r"(?i)[(\[]dutch[)\]]|[(\[]nederlands[)\]]", "NL"),
    ]
    .into_iter()
    .map(|(pattern, code)| (Regex::new(pattern).expect("title language regex"), code))
    .collect()
});

/// Code for an info table language value such as `"English  TR"`.
#[must_use]
pub fn from_language(language: &str) -> Option<&'static str> {
    let name = language.split_whitespace().next()?.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, code)| *code)
}

/// Code hinted by a gallery title, e.g. `"[Artist] Title [English]"`.
#[must_use]
pub fn from_title(title: &str) -> Option<&'static str> {
    TITLE_HINTS
        .iter()
        .find(|(pattern, _)| pattern.is_match(title))
        .map(|(_, code)| *code)
}

/// Simple language of a gallery: the language value first, then the title.
#[must_use]
pub fn simple_language(language: &str, title: Option<&str>) -> Option<String> {
    from_language(language)
        .or_else(|| title.and_then(from_title))
        .map(str::to_string)
}
