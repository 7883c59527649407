use std::path::Path;

use anyhow::Result;
use apify_client::ApifyClient;
use mediavault_common::Config;
use mediavault_harvest::{store, MediaDownloader, TikTokService};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Target profile for this run. Compiled in; there is no CLI.
const USERNAME: &str = "willcaplan_changemakers";
const RESULTS_LIMIT: u32 = 200;
/// Whether to ask the actor for source videos and download them alongside
/// the audio tracks.
const WITH_VIDEOS: bool = false;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("mediavault_harvest=info".parse()?)
                .add_directive("mediavault_common=info".parse()?)
                .add_directive("apify_client=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    config.log_redacted();

    info!(username = USERNAME, "Fetching TikTok profile data");

    let service = TikTokService::new(ApifyClient::new(config.apify_api_key));
    let clips = service
        .fetch_clips(USERNAME, RESULTS_LIMIT, WITH_VIDEOS)
        .await?;

    let out_dir = Path::new(".");
    store::persist_posts(out_dir, "tt", USERNAME, &clips).await?;

    info!("Downloading media...");
    let downloader = MediaDownloader::new();
    service
        .download_media(&downloader, out_dir, USERNAME, &clips, WITH_VIDEOS)
        .await?;

    Ok(())
}
