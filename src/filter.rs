//! Collaborators consulted while parsing.
//!
//! The parser owns no storage. Whether a gallery sits in the local favorites
//! and whether a comment should be hidden are decided by the caller through
//! these two traits.

use crate::options::Options;

/// Decides which non-uploader comments are kept.
///
/// Uploader comments are never passed through the filter.
pub trait CommentFilter {
    /// Returns `false` to hide every comment written by `user`.
    fn allow_commenter(&self, user: &str) -> bool;

    /// Returns `false` to hide a comment with this body markup.
    fn allow_comment(&self, html: &str) -> bool;
}

/// Answers whether a gallery is stored in the local (offline) favorites.
pub trait LocalFavorites {
    fn contains(&self, gid: i64) -> bool;
}

/// Local favorites that are always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalFavorites;

impl LocalFavorites for NoLocalFavorites {
    fn contains(&self, _gid: i64) -> bool {
        false
    }
}

impl<F> LocalFavorites for F
where
    F: Fn(i64) -> bool,
{
    fn contains(&self, gid: i64) -> bool {
        self(gid)
    }
}

/// Comment filter that keeps everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl CommentFilter for AllowAll {
    fn allow_commenter(&self, _user: &str) -> bool {
        true
    }

    fn allow_comment(&self, _html: &str) -> bool {
        true
    }
}

/// The blacklists configured in [`Options`] act as the built-in filter.
impl CommentFilter for Options {
    fn allow_commenter(&self, user: &str) -> bool {
        let Some(ref blacklist) = self.commenter_blacklist else {
            return true;
        };
        !blacklist
            .iter()
            .any(|name| !name.trim().is_empty() && name.trim().eq_ignore_ascii_case(user.trim()))
    }

    fn allow_comment(&self, html: &str) -> bool {
        let Some(ref blacklist) = self.comment_blacklist else {
            return true;
        };
        let body = html.to_lowercase();
        !blacklist.iter().any(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            !keyword.is_empty() && body.contains(&keyword)
        })
    }
}
