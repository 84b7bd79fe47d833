use crate::state::State;
use crate::text::{extract_video_id, strip_html};
use crate::types::{Candidate, FeedEntry};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

pub const DEFAULT_TITLE: &str = "New upload";

/// Publication time of an entry, falling back to its update time.
pub fn published_at(entry: &FeedEntry) -> Option<DateTime<Utc>> {
    entry.published.or(entry.updated)
}

/// A window reaching past the earliest representable time covers every entry.
pub fn is_within_lookback(published: DateTime<Utc>, now: DateTime<Utc>, lookback_hours: u32) -> bool {
    match now.checked_sub_signed(Duration::hours(i64::from(lookback_hours))) {
        Some(cutoff) => published >= cutoff,
        None => true,
    }
}

/// Pick the entries worth announcing, newest first.
pub fn select_candidates(
    entries: &[FeedEntry],
    state: &State,
    now: DateTime<Utc>,
    lookback_hours: u32,
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = entries
        .iter()
        .filter_map(|entry| {
            let video_id = extract_video_id(&entry.url);

            let Some(published) = published_at(entry) else {
                debug!("Skipping {}: no published or updated time", video_id);
                return None;
            };
            if !is_within_lookback(published, now, lookback_hours) {
                debug!("Skipping {}: published {} is outside the window", video_id, published);
                return None;
            }
            if state.is_posted(&video_id) {
                debug!("Skipping {}: already posted", video_id);
                return None;
            }

            Some(Candidate {
                published_at: published,
                video_id,
                title: entry.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                description: entry.summary.as_deref().map(strip_html).unwrap_or_default(),
                url: entry.url.clone(),
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    candidates
}
