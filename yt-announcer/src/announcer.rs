use crate::feed::VideoFeed;
use crate::filter::select_candidates;
use crate::message::{details_text, preview_text};
use crate::state::State;
use crate::telegram::{ChatSender, Pause};
use crate::types::{Candidate, Result, RunSummary};
use crate::Config;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Knobs the announcer needs from [`Config`].
#[derive(Debug, Clone)]
pub struct AnnounceSettings {
    pub lookback_hours: u32,
    pub preview_delay: Duration,
    pub subscribe_url: String,
}

impl From<&Config> for AnnounceSettings {
    fn from(config: &Config) -> Self {
        Self {
            lookback_hours: config.lookback_hours,
            preview_delay: config.preview_delay,
            subscribe_url: config.subscribe_url(),
        }
    }
}

pub struct Announcer {
    feed: Box<dyn VideoFeed>,
    sender: Box<dyn ChatSender>,
    pause: Box<dyn Pause>,
    settings: AnnounceSettings,
}

impl Announcer {
    pub fn new(
        feed: Box<dyn VideoFeed>,
        sender: Box<dyn ChatSender>,
        pause: Box<dyn Pause>,
        settings: AnnounceSettings,
    ) -> Self {
        Self {
            feed,
            sender,
            pause,
            settings,
        }
    }

    /// Load state, announce new uploads, save state.
    ///
    /// The state file is only written when every candidate was delivered.
    pub async fn run(&self, state_path: &Path, now: DateTime<Utc>) -> Result<RunSummary> {
        let mut state = State::load_or_default(state_path);

        let summary = self.announce(&mut state, now).await?;

        if summary.announced.is_empty() {
            info!("No new videos in last {} hours.", summary.lookback_hours);
            return Ok(summary);
        }

        state.save(state_path)?;
        info!("State updated.");
        Ok(summary)
    }

    /// Fetch the feed and deliver every candidate, newest first.
    pub async fn announce(&self, state: &mut State, now: DateTime<Utc>) -> Result<RunSummary> {
        let entries = self.feed.fetch_entries().await?;
        info!("{} returned {} entries", self.feed.source_name(), entries.len());

        let candidates = select_candidates(&entries, state, now, self.settings.lookback_hours);
        let mut summary = RunSummary {
            lookback_hours: self.settings.lookback_hours,
            candidates: candidates.len(),
            announced: Vec::new(),
        };

        for candidate in &candidates {
            if let Err(e) = self.deliver(candidate).await {
                if !summary.announced.is_empty() {
                    warn!(
                        "Delivery of {} failed; delivered but not persisted: {}",
                        candidate.video_id,
                        summary.announced.join(", ")
                    );
                }
                return Err(e);
            }
            state.mark_posted(&candidate.video_id);
            summary.announced.push(candidate.video_id.clone());
            info!("Posted: {} {}", candidate.video_id, candidate.title);
        }

        Ok(summary)
    }

    /// Preview link, pause, then the formatted follow-up.
    pub async fn deliver(&self, candidate: &Candidate) -> Result<()> {
        self.sender.send_message(&preview_text(candidate), false).await?;

        self.pause.wait(self.settings.preview_delay).await;

        self.sender
            .send_message(&details_text(candidate, &self.settings.subscribe_url), true)
            .await
    }
}
