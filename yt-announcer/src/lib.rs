pub mod types;
pub mod config;
pub mod fetcher;
pub mod parser;
pub mod feed;
pub mod filter;
pub mod text;
pub mod message;
pub mod telegram;
pub mod state;
pub mod announcer;

pub use types::*;
pub use config::Config;
pub use fetcher::Fetcher;
pub use parser::FeedParser;
pub use feed::{VideoFeed, YouTubeFeed};
pub use telegram::{ChatSender, Pause, TelegramSender, TokioPause};
pub use state::{State, StateError};
pub use announcer::{AnnounceSettings, Announcer};
