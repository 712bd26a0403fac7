//! Gallery categories.
//!
//! The detail page shows the category as its display name. The numeric
//! values are the bit flags the site uses in search filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gallery category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Misc,
    Doujinshi,
    Manga,
    #[serde(rename = "Artist CG")]
    ArtistCg,
    #[serde(rename = "Game CG")]
    GameCg,
    #[serde(rename = "Image Set")]
    ImageSet,
    Cosplay,
    #[serde(rename = "Asian Porn")]
    AsianPorn,
    #[serde(rename = "Non-H")]
    NonH,
    Western,
    #[serde(rename = "private")]
    Private,
    #[default]
    Unknown,
}

/// Returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Misc,
        Category::Doujinshi,
        Category::Manga,
        Category::ArtistCg,
        Category::GameCg,
        Category::ImageSet,
        Category::Cosplay,
        Category::AsianPorn,
        Category::NonH,
        Category::Western,
        Category::Private,
    ];

    /// Search filter bit of the category.
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            Self::Misc => 0x1,
            Self::Doujinshi => 0x2,
            Self::Manga => 0x4,
            Self::ArtistCg => 0x8,
            Self::GameCg => 0x10,
            Self::ImageSet => 0x20,
            Self::Cosplay => 0x40,
            Self::AsianPorn => 0x80,
            Self::NonH => 0x100,
            Self::Western => 0x200,
            Self::Private => 0x400,
            Self::Unknown => 0x800,
        }
    }

    /// Display name as printed by the site.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Misc => "Misc",
            Self::Doujinshi => "Doujinshi",
            Self::Manga => "Manga",
            Self::ArtistCg => "Artist CG",
            Self::GameCg => "Game CG",
            Self::ImageSet => "Image Set",
            Self::Cosplay => "Cosplay",
            Self::AsianPorn => "Asian Porn",
            Self::NonH => "Non-H",
            Self::Western => "Western",
            Self::Private => "private",
            Self::Unknown => "unknown",
        }
    }

    /// Resolves a display name, falling back to [`Category::Unknown`].
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or(Self::Unknown)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the display name in any case, with or without inner spaces
    /// (`"Artist CG"`, `"artistcg"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|category| category.name().replace(' ', "").eq_ignore_ascii_case(&key))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
