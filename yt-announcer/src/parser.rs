use crate::types::{AnnouncerError, FeedEntry, Result};
use feed_rs::parser;
use tracing::{debug, info};

pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_feed(&self, content: &str) -> Result<Vec<FeedEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| AnnouncerError::Parse(format!("Failed to parse feed: {}", e)))?;

        let entries: Vec<FeedEntry> = feed
            .entries
            .into_iter()
            .filter_map(|entry| self.parse_entry(entry))
            .collect();

        info!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    fn parse_entry(&self, entry: feed_rs::model::Entry) -> Option<FeedEntry> {
        let Some(link) = entry.links.first() else {
            debug!("Skipping entry without link: {}", entry.id);
            return None;
        };
        let url = link.href.clone();

        // YouTube keeps the video description under media:group
        let summary = entry.summary.map(|s| s.content).or_else(|| {
            entry
                .media
                .iter()
                .find_map(|m| m.description.as_ref().map(|d| d.content.clone()))
        });

        Some(FeedEntry {
            url,
            title: entry.title.map(|t| t.content),
            summary,
            published: entry.published,
            updated: entry.updated,
        })
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}
