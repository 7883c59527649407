// Instagram service: reel metadata via Apify, media files via direct GET.

use std::path::Path;

use anyhow::Context;
use apify_client::{ApifyClient, InstagramPost};
use mediavault_common::{InstagramReel, Result};
use tracing::{info, warn};

use crate::media::{DownloadJob, DownloadStats, MediaDownloader};
use crate::services::non_empty;

pub struct InstagramService {
    client: ApifyClient,
}

impl InstagramService {
    pub fn new(client: ApifyClient) -> Self {
        Self { client }
    }

    /// Fetch reels for a profile and normalize them. Records missing the
    /// fields the rest of the pipeline depends on are logged and dropped.
    pub async fn fetch_reels(&self, username: &str, limit: u32) -> Result<Vec<InstagramReel>> {
        info!(username, limit, "instagram: fetching reels");

        let raw = self.client.scrape_instagram_reels(username, limit).await?;
        let reels: Vec<InstagramReel> = raw.into_iter().filter_map(normalize).collect();

        info!(count = reels.len(), "instagram: normalized reels");
        Ok(reels)
    }

    /// Download every reel's video under `{username}_ig_videos/`. The
    /// directory is created up front (idempotent); per-file failures are
    /// contained by the downloader, so this only fails on directory setup.
    pub async fn download_media(
        &self,
        downloader: &MediaDownloader,
        dir: &Path,
        username: &str,
        reels: &[InstagramReel],
    ) -> Result<DownloadStats> {
        let video_dir = dir.join(format!("{username}_ig_videos"));
        tokio::fs::create_dir_all(&video_dir)
            .await
            .with_context(|| format!("Failed to create {}", video_dir.display()))?;

        let jobs = media_jobs(&video_dir, username, reels);
        info!(jobs = jobs.len(), dir = %video_dir.display(), "instagram: downloading media");

        Ok(downloader.download_all(jobs).await)
    }
}

/// One job per reel that actually carries a video URL.
fn media_jobs(video_dir: &Path, username: &str, reels: &[InstagramReel]) -> Vec<DownloadJob> {
    reels
        .iter()
        .filter_map(|reel| {
            let url = reel.video_url.clone()?;
            Some(DownloadJob {
                url,
                dest: video_dir.join(format!("ig_{username}_{}.mp4", reel.short_code)),
            })
        })
        .collect()
}

fn normalize(post: InstagramPost) -> Option<InstagramReel> {
    let Some(id) = post.id else {
        warn!(
            short_code = post.short_code.as_deref().unwrap_or(""),
            "instagram: dropping record with no id"
        );
        return None;
    };
    let Some(short_code) = post.short_code else {
        warn!(id = id.as_str(), "instagram: dropping record with no shortCode");
        return None;
    };

    Some(InstagramReel {
        id,
        short_code,
        timestamp: post.timestamp,
        page_url: non_empty(post.url),
        video_url: non_empty(post.video_url),
        caption: post.caption,
        hashtags: post.hashtags.unwrap_or_default(),
        display_url: non_empty(post.display_url),
        likes_count: post.likes_count,
    })
}
