// TikTok service: post metadata via Apify, audio and (optionally) video
// files via direct GET.

use std::path::Path;

use anyhow::Context;
use apify_client::{ApifyClient, TikTokPost};
use mediavault_common::{Result, TikTokClip};
use tracing::{info, warn};

use crate::media::{DownloadJob, DownloadStats, MediaDownloader};
use crate::services::non_empty;

pub struct TikTokService {
    client: ApifyClient,
}

impl TikTokService {
    pub fn new(client: ApifyClient) -> Self {
        Self { client }
    }

    /// Fetch posts for a profile and normalize them. `with_videos` is passed
    /// through to the actor so the dataset carries direct video addresses.
    pub async fn fetch_clips(
        &self,
        username: &str,
        limit: u32,
        with_videos: bool,
    ) -> Result<Vec<TikTokClip>> {
        info!(username, limit, with_videos, "tiktok: fetching posts");

        let raw = self
            .client
            .scrape_tiktok_posts(username, limit, with_videos)
            .await?;
        let clips: Vec<TikTokClip> = raw.into_iter().filter_map(normalize).collect();

        info!(count = clips.len(), "tiktok: normalized posts");
        Ok(clips)
    }

    /// Download each clip's audio track, plus its video when `with_videos`
    /// is set, under `{username}_tt_media/{audios,videos}/`. Directory setup
    /// is idempotent and happens before the pool starts.
    pub async fn download_media(
        &self,
        downloader: &MediaDownloader,
        dir: &Path,
        username: &str,
        clips: &[TikTokClip],
        with_videos: bool,
    ) -> Result<DownloadStats> {
        let media_dir = dir.join(format!("{username}_tt_media"));
        let audio_dir = media_dir.join("audios");
        let video_dir = media_dir.join("videos");
        for d in [&audio_dir, &video_dir] {
            tokio::fs::create_dir_all(d)
                .await
                .with_context(|| format!("Failed to create {}", d.display()))?;
        }

        let jobs = media_jobs(&audio_dir, &video_dir, username, clips, with_videos);
        info!(jobs = jobs.len(), dir = %media_dir.display(), "tiktok: downloading media");

        Ok(downloader.download_all(jobs).await)
    }
}

/// Audio jobs for every clip with a track; video jobs only when the run asked
/// for videos. Clips with neither produce nothing.
fn media_jobs(
    audio_dir: &Path,
    video_dir: &Path,
    username: &str,
    clips: &[TikTokClip],
    with_videos: bool,
) -> Vec<DownloadJob> {
    let mut jobs = Vec::new();
    for clip in clips {
        if let Some(ref url) = clip.audio_url {
            jobs.push(DownloadJob {
                url: url.clone(),
                dest: audio_dir.join(format!("tt_{username}_{}_audio.mp3", clip.id)),
            });
        }
        if with_videos {
            if let Some(ref url) = clip.video_url {
                jobs.push(DownloadJob {
                    url: url.clone(),
                    dest: video_dir.join(format!("tt_{username}_{}_video.mp4", clip.id)),
                });
            }
        }
    }
    jobs
}

fn normalize(post: TikTokPost) -> Option<TikTokClip> {
    let Some(id) = post.id else {
        warn!(
            url = post.web_video_url.as_deref().unwrap_or(""),
            "tiktok: dropping record with no id"
        );
        return None;
    };

    Some(TikTokClip {
        id,
        timestamp: post.create_time,
        post_url: non_empty(post.web_video_url),
        video_url: non_empty(post.video_meta.and_then(|m| m.download_addr)),
        audio_url: non_empty(post.music_meta.and_then(|m| m.play_url)),
        caption: post.text,
        hashtags: post
            .hashtags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|h| h.name.map(|n| n.to_lowercase()))
            .collect(),
        is_pinned: post.is_pinned.unwrap_or(false),
        is_sponsored: post.is_sponsored.unwrap_or(false),
    })
}
