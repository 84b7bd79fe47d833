use crate::types::{FeedEntry, Result};
use crate::{Config, FeedParser, Fetcher};
use async_trait::async_trait;
use tracing::info;

/// A source of video feed entries.
#[async_trait]
pub trait VideoFeed: Send + Sync {
    /// Human-readable name for this source
    fn source_name(&self) -> String;

    /// Fetch and parse every entry currently in the feed
    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>>;
}

/// Upload feed of a single YouTube channel.
pub struct YouTubeFeed {
    channel_id: String,
    feed_url: String,
    fetcher: Fetcher,
    parser: FeedParser,
}

impl YouTubeFeed {
    pub fn new(config: &Config, fetcher: Fetcher) -> Self {
        Self {
            channel_id: config.channel_id.clone(),
            feed_url: config.feed_url(),
            fetcher,
            parser: FeedParser::new(),
        }
    }
}

#[async_trait]
impl VideoFeed for YouTubeFeed {
    fn source_name(&self) -> String {
        format!("YouTube channel {}", self.channel_id)
    }

    async fn fetch_entries(&self) -> Result<Vec<FeedEntry>> {
        info!("Pulling upload feed: {}", self.feed_url);

        let content = self.fetcher.fetch_text(&self.feed_url).await?;
        self.parser.parse_feed(&content)
    }
}
