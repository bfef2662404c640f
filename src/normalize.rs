//! Text normalization: joins page texts into one blob, folds CRLF line
//! endings, strips extraction artifacts, and substitutes link anchors with
//! their targets.

use crate::ingest::text::FORM_FEED;
use crate::ingest::AnchorMap;

/// Inserted between pages so paragraph splitting never merges adjacent pages.
pub const PAGE_BREAK: &str = "\n\n\n\n\n";

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// URL schemes replaced by their bare address.
const BARE_SCHEMES: [&str; 2] = ["mailto:", "tel:"];

/// Replacement text for a link target: `mailto:`/`tel:` lose their scheme.
#[must_use]
pub fn resolve_target(url: &str) -> &str {
    if BARE_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        url.split_once(':').map_or(url, |(_, address)| address)
    } else {
        url
    }
}

/// Produce the normalized text blob for the section parser.
#[must_use]
pub fn normalize<S: AsRef<str>>(pages: &[S], anchors: &AnchorMap) -> String {
    let joined = pages
        .iter()
        .map(|page| page.as_ref())
        .collect::<Vec<&str>>()
        .join(PAGE_BREAK)
        .replace("\r\n", "\n");

    let mut text: String = joined
        .chars()
        .filter(|c| *c != ZERO_WIDTH_SPACE && *c != FORM_FEED)
        .collect();

    for (anchor, url) in anchors.iter() {
        if anchor.is_empty() {
            continue;
        }
        let target = resolve_target(url);
        if text.contains(anchor) {
            tracing::debug!(anchor, target, "substituting link anchor");
            text = text.replace(anchor, target);
        }
    }

    text
}
