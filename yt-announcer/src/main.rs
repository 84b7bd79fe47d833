use anyhow::Context;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use yt_announcer::{AnnounceSettings, Announcer, Config, Fetcher, TelegramSender, TokioPause, YouTubeFeed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    info!("Starting announcer: {:?}", config);

    let fetcher = Fetcher::new(config.fetch_config())?;
    let sender = TelegramSender::new(fetcher.client().clone(), &config.bot_token, config.chat_id.clone());
    let feed = YouTubeFeed::new(&config, fetcher);

    let announcer = Announcer::new(
        Box::new(feed),
        Box::new(sender),
        Box::new(TokioPause),
        AnnounceSettings::from(&config),
    );

    let summary = announcer.run(&config.state_file, Utc::now()).await?;
    info!(
        "Run finished: {} candidates, {} announced",
        summary.candidates,
        summary.announced.len()
    );
    Ok(())
}
