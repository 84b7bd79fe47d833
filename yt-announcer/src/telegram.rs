use crate::types::{AnnouncerError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

const TELEGRAM_API: &str = "https://api.telegram.org";

/// Outbound side of an announcement: posts text to a fixed chat.
#[async_trait]
pub trait ChatSender: Send + Sync {
    async fn send_message(&self, text: &str, disable_preview: bool) -> Result<()>;
}

/// The deliberate wait between the preview link and the follow-up.
#[async_trait]
pub trait Pause: Send + Sync {
    async fn wait(&self, duration: Duration);
}

pub struct TokioPause;

#[async_trait]
impl Pause for TokioPause {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Bot API `sendMessage` client for one chat.
pub struct TelegramSender {
    client: Client,
    endpoint: String,
    chat_id: String,
}

impl TelegramSender {
    pub fn new(client: Client, bot_token: &str, chat_id: impl Into<String>) -> Self {
        Self::with_api_base(client, TELEGRAM_API, bot_token, chat_id)
    }

    /// Same as [`TelegramSender::new`] against a different Bot API host.
    pub fn with_api_base(client: Client, api_base: &str, bot_token: &str, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: format!("{}/bot{}/sendMessage", api_base.trim_end_matches('/'), bot_token),
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl ChatSender for TelegramSender {
    async fn send_message(&self, text: &str, disable_preview: bool) -> Result<()> {
        debug!("Sending message to chat {} (preview disabled: {})", self.chat_id, disable_preview);

        let disable_preview = if disable_preview { "true" } else { "false" };
        let res = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text),
                ("disable_web_page_preview", disable_preview),
            ])
            .send()
            .await
            // the endpoint URL embeds the bot token
            .map_err(|e| e.without_url())?;

        if res.status() != StatusCode::OK {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            error!("Telegram error: {} {}", status, body);
            return Err(AnnouncerError::Telegram {
                status: status.as_u16(),
                body,
            });
        }

        res.bytes().await.map_err(|e| e.without_url())?;
        Ok(())
    }
}
