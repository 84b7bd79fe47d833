//! Text helpers for turning feed entries into chat messages.

use once_cell::sync::Lazy;
use regex::Regex;

pub const TEASER_MAX_CHARS: usize = 220;

static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/shorts/)([A-Za-z0-9_-]{11})").expect("valid video id pattern"));

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("valid tag pattern"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Extract the 11-character video id from a `watch?v=` or `/shorts/` URL.
/// Any other URL is returned unchanged and used as the id itself.
pub fn extract_video_id(url: &str) -> String {
    VIDEO_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| url.to_string())
}

/// Drop anything that looks like a tag. Entities are left as-is.
pub fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// Short single-line teaser: whitespace collapsed, capped at
/// [`TEASER_MAX_CHARS`] characters with a trailing `...` when cut.
pub fn teaser(description: &str) -> String {
    let collapsed = WHITESPACE.replace_all(description.trim(), " ");

    if collapsed.chars().count() > TEASER_MAX_CHARS {
        let cut: String = collapsed.chars().take(TEASER_MAX_CHARS).collect();
        format!("{}...", cut)
    } else {
        collapsed.into_owned()
    }
}
