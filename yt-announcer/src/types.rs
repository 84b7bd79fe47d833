use chrono::{DateTime, Utc};

/// A single entry of the channel's upload feed, as parsed.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub url: String,
    pub title: Option<String>,
    pub summary: Option<String>, // may carry HTML
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// A feed entry that survived the lookback and dedup filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub published_at: DateTime<Utc>,
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lookback_hours: u32,
    pub candidates: usize,
    pub announced: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_feed_size_mb: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "yt-announcer/0.1".to_string(),
            timeout_seconds: 30,
            max_feed_size_mb: 10,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnnouncerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Telegram API rejected message ({status}): {body}")]
    Telegram { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing environment variable {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: String, value: String },

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnnouncerError>;
