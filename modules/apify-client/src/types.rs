use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Actor inputs ---

/// Input for the apify/instagram-reel-scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct InstagramReelInput {
    pub username: Vec<String>,
    #[serde(rename = "resultsLimit")]
    pub results_limit: u32,
}

/// Input for the clockworks/free-tiktok-scraper actor (profile-based).
///
/// The cover/slideshow/subtitle download flags are always off: Apify would
/// otherwise mirror that media into its own storage, which this client never
/// reads. `should_download_videos` controls whether the dataset items carry a
/// usable `videoMeta.downloadAddr`.
#[derive(Debug, Clone, Serialize)]
pub struct TikTokScraperInput {
    #[serde(rename = "excludePinnedPosts")]
    pub exclude_pinned_posts: bool,
    pub profiles: Vec<String>,
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
    #[serde(rename = "shouldDownloadCovers")]
    pub should_download_covers: bool,
    #[serde(rename = "shouldDownloadSlideshowImages")]
    pub should_download_slideshow_images: bool,
    #[serde(rename = "shouldDownloadSubtitles")]
    pub should_download_subtitles: bool,
    #[serde(rename = "shouldDownloadVideos")]
    pub should_download_videos: bool,
    #[serde(rename = "searchSection")]
    pub search_section: String,
    #[serde(rename = "maxProfilesPerQuery")]
    pub max_profiles_per_query: u32,
}

impl TikTokScraperInput {
    /// Profile scrape input with the fixed flag set this client uses.
    pub fn profile(username: &str, limit: u32, with_videos: bool) -> Self {
        Self {
            exclude_pinned_posts: false,
            profiles: vec![username.to_string()],
            results_per_page: limit,
            should_download_covers: false,
            should_download_slideshow_images: false,
            should_download_subtitles: false,
            should_download_videos: with_videos,
            search_section: String::new(),
            max_profiles_per_query: 1,
        }
    }
}

// --- Dataset items ---

/// A single Instagram reel from the Apify dataset.
/// Every field is optional; the dataset schema is not contractual.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramPost {
    pub id: Option<String>,
    #[serde(rename = "shortCode")]
    pub short_code: Option<String>,
    pub caption: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub url: Option<String>,
    #[serde(rename = "displayUrl")]
    pub display_url: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "likesCount")]
    pub likes_count: Option<i64>,
    #[serde(rename = "commentsCount")]
    pub comments_count: Option<i64>,
    #[serde(rename = "ownerUsername")]
    pub owner_username: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// A single TikTok post from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokPost {
    pub id: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "createTime")]
    pub create_time: Option<i64>,
    #[serde(rename = "webVideoUrl")]
    pub web_video_url: Option<String>,
    #[serde(rename = "videoMeta")]
    pub video_meta: Option<TikTokVideoMeta>,
    #[serde(rename = "musicMeta")]
    pub music_meta: Option<TikTokMusicMeta>,
    pub hashtags: Option<Vec<TikTokHashtag>>,
    #[serde(rename = "diggCount")]
    pub digg_count: Option<i64>,
    #[serde(rename = "playCount")]
    pub play_count: Option<i64>,
    #[serde(rename = "isPinned")]
    pub is_pinned: Option<bool>,
    #[serde(rename = "isSponsored")]
    pub is_sponsored: Option<bool>,
}

/// Video metadata nested inside a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokVideoMeta {
    #[serde(rename = "downloadAddr")]
    pub download_addr: Option<String>,
}

/// Music metadata nested inside a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokMusicMeta {
    #[serde(rename = "playUrl")]
    pub play_url: Option<String>,
}

/// A hashtag reference in a TikTok post.
#[derive(Debug, Clone, Deserialize)]
pub struct TikTokHashtag {
    pub name: Option<String>,
}
