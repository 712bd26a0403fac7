//! Page state classification.
//!
//! Some responses are not detail pages at all. They are recognised by fixed
//! substrings of the raw body before any tree is built.

use crate::error::{Error, Result};
use crate::patterns::SITE_ERROR;

/// Last paragraph of the content warning interstitial.
pub const OFFENSIVE_STRING: &str =
    "<p>(And if you choose to ignore this warning, you lose all rights to complain about it in the future.)</p>";

/// Body of the removed/expired gallery page.
pub const PINING_STRING: &str = "<p>This gallery is pining for the fjords.</p>";

/// Fails when the body is a warning, removal or site error page.
///
/// The checks run in a fixed order: content warning, removal, then the
/// generic inline error box whose text is returned verbatim.
pub fn check(body: &str) -> Result<()> {
    if body.contains(OFFENSIVE_STRING) {
        return Err(Error::Offensive);
    }
    if body.contains(PINING_STRING) {
        return Err(Error::Pining);
    }
    if let Some(caps) = SITE_ERROR.captures(body) {
        return Err(Error::Site(caps[1].to_string()));
    }
    Ok(())
}
