use chrono::{TimeZone, Utc};
use mediavault_common::{InstagramReel, TikTokClip};
use mediavault_harvest::store;

fn sample_reels() -> Vec<InstagramReel> {
    vec![
        InstagramReel {
            id: "1".to_string(),
            short_code: "Caaa".to_string(),
            timestamp: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()),
            page_url: Some("https://www.instagram.com/p/Caaa/".to_string()),
            video_url: Some("https://cdn.example.com/1.mp4".to_string()),
            caption: Some("first".to_string()),
            hashtags: vec!["a".to_string(), "b".to_string()],
            display_url: Some("https://cdn.example.com/1.jpg".to_string()),
            likes_count: Some(10),
        },
        InstagramReel {
            id: "2".to_string(),
            short_code: "Cbbb".to_string(),
            timestamp: None,
            page_url: None,
            video_url: None,
            caption: None,
            hashtags: Vec::new(),
            display_url: None,
            likes_count: None,
        },
    ]
}

#[tokio::test]
async fn persisted_posts_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let reels = sample_reels();

    let path = store::persist_posts(dir.path(), "ig", "someuser", &reels)
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("ig_someuser_posts.json"));

    let body = std::fs::read_to_string(&path).unwrap();
    let back: Vec<InstagramReel> = serde_json::from_str(&body).unwrap();
    assert_eq!(back, reels);
}

#[tokio::test]
async fn persist_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let reels = sample_reels();

    store::persist_posts(dir.path(), "ig", "someuser", &reels)
        .await
        .unwrap();
    let path = store::persist_posts(dir.path(), "ig", "someuser", &reels[..1])
        .await
        .unwrap();

    let back: Vec<InstagramReel> = serde_json::from_str(&std::fs::read_to_string(path).unwrap())
        .unwrap();
    assert_eq!(back.len(), 1);
}

#[tokio::test]
async fn persist_writes_pretty_json_with_wire_names() {
    let dir = tempfile::tempdir().unwrap();
    let clips = vec![TikTokClip {
        id: "7301".to_string(),
        timestamp: Some(1714564800),
        post_url: Some("https://www.tiktok.com/@x/video/7301".to_string()),
        video_url: None,
        audio_url: Some("https://cdn.example.com/a.mp3".to_string()),
        caption: Some("clip".to_string()),
        hashtags: vec!["fun".to_string()],
        is_pinned: false,
        is_sponsored: false,
    }];

    let path = store::persist_posts(dir.path(), "tt", "someuser", &clips)
        .await
        .unwrap();
    let body = std::fs::read_to_string(path).unwrap();

    assert!(body.contains('\n'), "expected pretty-printed output");
    assert!(body.contains("\"postUrl\""));
    assert!(body.contains("\"audioUrl\""));
    assert!(body.contains("\"isPinned\""));
}

#[tokio::test]
async fn unwritable_directory_is_a_persist_error() {
    let err = store::persist_posts(
        std::path::Path::new("/nonexistent-mediavault-dir"),
        "ig",
        "someuser",
        &sample_reels(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, mediavault_common::HarvestError::Persist(_)));
}
