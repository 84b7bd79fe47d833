use crate::types::{AnnouncerError, FetchConfig, Result};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_LOOKBACK_HOURS: u32 = 24;
const DEFAULT_STATE_FILE: &str = "state.json";
const DEFAULT_PREVIEW_DELAY_SECS: u64 = 3;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Run configuration, assembled once at startup.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub channel_id: String,
    pub channel_url: Option<String>,
    pub lookback_hours: u32,
    pub state_file: PathBuf,
    pub preview_delay: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| optional(name).ok_or_else(|| AnnouncerError::MissingEnv(name.to_string()));

        Ok(Self {
            bot_token: required("TELEGRAM_BOT_TOKEN")?,
            chat_id: required("TELEGRAM_CHAT_ID")?,
            channel_id: required("YOUTUBE_CHANNEL_ID")?,
            channel_url: optional("YOUTUBE_CHANNEL_URL"),
            lookback_hours: parse_or("LOOKBACK_HOURS", optional("LOOKBACK_HOURS"), DEFAULT_LOOKBACK_HOURS)?,
            state_file: optional("STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE)),
            preview_delay: Duration::from_secs(parse_or(
                "PREVIEW_DELAY_SECS",
                optional("PREVIEW_DELAY_SECS"),
                DEFAULT_PREVIEW_DELAY_SECS,
            )?),
            request_timeout: Duration::from_secs(parse_or(
                "REQUEST_TIMEOUT_SECS",
                optional("REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn feed_url(&self) -> String {
        format!("https://www.youtube.com/feeds/videos.xml?channel_id={}", self.channel_id)
    }

    /// Link used for the "Subscribe" line of the follow-up message.
    pub fn subscribe_url(&self) -> String {
        self.channel_url
            .clone()
            .unwrap_or_else(|| format!("https://www.youtube.com/channel/{}", self.channel_id))
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout_seconds: self.request_timeout.as_secs(),
            ..FetchConfig::default()
        }
    }
}

fn parse_or<T: std::str::FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| AnnouncerError::InvalidEnv {
            name: name.to_string(),
            value,
        }),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"***")
            .field("chat_id", &self.chat_id)
            .field("channel_id", &self.channel_id)
            .field("channel_url", &self.channel_url)
            .field("lookback_hours", &self.lookback_hours)
            .field("state_file", &self.state_file)
            .field("preview_delay", &self.preview_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
