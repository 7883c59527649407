use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Normalized post types: the subset of the Apify dataset this system persists
// and downloads media for. Field names on disk stay camelCase so the JSON
// summaries read like the upstream dataset they were cut from.

/// A normalized Instagram reel.
///
/// `id` and `short_code` are required since the output filename is derived
/// from `short_code`. A reel with no `video_url` is persisted but downloads
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramReel {
    pub id: String,
    pub short_code: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub page_url: Option<String>,
    pub video_url: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    pub display_url: Option<String>,
    pub likes_count: Option<i64>,
}

/// A normalized TikTok post.
///
/// `audio_url` is the track behind the post and is downloaded whenever
/// present; `video_url` is only populated when the scrape run asked the actor
/// for source videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokClip {
    pub id: String,
    /// Post creation time as epoch seconds, as the actor reports it.
    pub timestamp: Option<i64>,
    pub post_url: Option<String>,
    pub video_url: Option<String>,
    pub audio_url: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_sponsored: bool,
}
