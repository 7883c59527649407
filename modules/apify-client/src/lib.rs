pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{InstagramPost, InstagramReelInput, TikTokPost, TikTokScraperInput};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor name for apify/instagram-reel-scraper.
const INSTAGRAM_REEL_SCRAPER: &str = "apify~instagram-reel-scraper";

/// Actor name for clockworks/free-tiktok-scraper.
const TIKTOK_SCRAPER: &str = "clockworks~free-tiktok-scraper";

pub struct ApifyClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, BASE_URL)
    }

    /// Client pointed at a non-default API root. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(token: String, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Run an actor synchronously and return its dataset items.
    ///
    /// The `run-sync-get-dataset-items` endpoint blocks until the run
    /// finishes and answers 201 Created with the dataset as a JSON array.
    /// Anything other than 201 is a hard failure with no partial result.
    async fn run_sync<I, T>(&self, actor: &str, input: &I) -> Result<Vec<T>>
    where
        I: Serialize,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/acts/{}/run-sync-get-dataset-items",
            self.base_url, actor
        );
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Scrape reels from an Instagram profile. One synchronous run, no paging.
    pub async fn scrape_instagram_reels(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<InstagramPost>> {
        tracing::info!(username, limit, actor = INSTAGRAM_REEL_SCRAPER, "Starting Instagram reel scrape");

        let input = InstagramReelInput {
            username: vec![username.to_string()],
            results_limit: limit,
        };
        let posts: Vec<InstagramPost> = self.run_sync(INSTAGRAM_REEL_SCRAPER, &input).await?;

        tracing::info!(count = posts.len(), "Fetched Instagram reels");
        Ok(posts)
    }

    /// Scrape posts from a TikTok profile. `with_videos` asks the actor to
    /// populate a direct video download address on each item.
    pub async fn scrape_tiktok_posts(
        &self,
        username: &str,
        limit: u32,
        with_videos: bool,
    ) -> Result<Vec<TikTokPost>> {
        tracing::info!(username, limit, with_videos, actor = TIKTOK_SCRAPER, "Starting TikTok profile scrape");

        let input = TikTokScraperInput::profile(username, limit, with_videos);
        let posts: Vec<TikTokPost> = self.run_sync(TIKTOK_SCRAPER, &input).await?;

        tracing::info!(count = posts.len(), "Fetched TikTok posts");
        Ok(posts)
    }
}
