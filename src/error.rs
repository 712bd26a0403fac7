//! Error types for eh-detail.
//!
//! Only a handful of conditions are fatal for a detail page. Everything else
//! is recovered locally by the sub-parsers and never surfaces here.

/// Error type for detail page parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page is the content warning interstitial.
    #[error("Gallery is behind a content warning")]
    Offensive,

    /// The gallery has been removed or has expired.
    #[error("Gallery is pining for the fjords")]
    Pining,

    /// The site rendered its own error message; the text is kept verbatim.
    #[error("{0}")]
    Site(String),

    /// A required element or pattern was missing or unreadable.
    #[error("Parse failed: {0}")]
    Parse(String),
}

/// Fieldless discriminant of [`Error`], for callers that only branch on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ContentPolicy,
    Unavailable,
    SiteReported,
    StructureParse,
}

impl Error {
    /// Returns the kind of failure without its payload.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Offensive => ErrorKind::ContentPolicy,
            Self::Pining => ErrorKind::Unavailable,
            Self::Site(_) => ErrorKind::SiteReported,
            Self::Parse(_) => ErrorKind::StructureParse,
        }
    }

    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse(reason.into())
    }
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
