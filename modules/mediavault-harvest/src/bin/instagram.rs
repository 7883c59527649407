use std::path::Path;

use anyhow::Result;
use apify_client::ApifyClient;
use mediavault_common::Config;
use mediavault_harvest::{store, InstagramService, MediaDownloader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Target profile for this run. Compiled in; there is no CLI.
const USERNAME: &str = "oliviacaplandesign";
const RESULTS_LIMIT: u32 = 200;

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

    info!(username = USERNAME, "Fetching Instagram profile data");

    let service = InstagramService::new(ApifyClient::new(config.apify_api_key));
    let reels = service.fetch_reels(USERNAME, RESULTS_LIMIT).await?;

    let out_dir = Path::new(".");
    store::persist_posts(out_dir, "ig", USERNAME, &reels).await?;

    info!("Downloading videos...");
    let downloader = MediaDownloader::new();
    service
        .download_media(&downloader, out_dir, USERNAME, &reels)
        .await?;

    Ok(())
}
