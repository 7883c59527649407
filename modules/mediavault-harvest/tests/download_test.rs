use std::time::{Duration, Instant};

use mediavault_harvest::{DownloadJob, DownloadStats, MediaDownloader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn job(server: &MockServer, route: &str, dest: &std::path::Path) -> DownloadJob {
    DownloadJob {
        url: format!("{}{}", server.uri(), route),
        dest: dest.to_path_buf(),
    }
}

#[tokio::test]
async fn one_failed_download_does_not_abort_the_batch() {
    let server = MockServer::start().await;
    for n in [1, 2, 4, 5] {
        Mock::given(method("GET"))
            .and(path(format!("/media/{n}")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![n as u8; 64]))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/media/3"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let jobs: Vec<DownloadJob> = (1..=5)
        .map(|n| {
            job(
                &server,
                &format!("/media/{n}"),
                &dir.path().join(format!("file_{n}.mp4")),
            )
        })
        .collect();

    let downloader = MediaDownloader::new();
    let stats = downloader.download_all(jobs).await;

    assert_eq!(stats, DownloadStats { saved: 4, failed: 1 });
    for n in [1, 2, 4, 5] {
        let written = std::fs::read(dir.path().join(format!("file_{n}.mp4"))).unwrap();
        assert_eq!(written, vec![n as u8; 64]);
    }
    assert!(!dir.path().join("file_3.mp4").exists());
}

#[tokio::test]
async fn unwritable_destination_is_contained_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let jobs = vec![
        job(&server, "/media/1", &dir.path().join("ok.mp4")),
        // Parent directory does not exist, so the write fails.
        job(&server, "/media/2", &dir.path().join("missing").join("bad.mp4")),
    ];

    let stats = MediaDownloader::new().download_all(jobs).await;
    assert_eq!(stats, DownloadStats { saved: 1, failed: 1 });
}

#[tokio::test]
async fn non_http_urls_are_rejected_per_job() {
    let dir = tempfile::tempdir().unwrap();
    let jobs = vec![DownloadJob {
        url: "ftp://example.com/v.mp4".to_string(),
        dest: dir.path().join("v.mp4"),
    }];

    let stats = MediaDownloader::new().download_all(jobs).await;
    assert_eq!(stats, DownloadStats { saved: 0, failed: 1 });
}

#[tokio::test]
async fn at_most_two_downloads_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(200);
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(delay)
                .set_body_bytes(b"x".to_vec()),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let jobs: Vec<DownloadJob> = (0..6)
        .map(|n| job(&server, "/media", &dir.path().join(format!("f{n}"))))
        .collect();

    let start = Instant::now();
    let stats = MediaDownloader::new().download_all(jobs).await;
    let elapsed = start.elapsed();

    assert_eq!(stats, DownloadStats { saved: 6, failed: 0 });
    // 6 jobs with a 200ms response delay take three waves under a ceiling of
    // 2; an unbounded pool would finish in roughly one delay.
    assert!(
        elapsed >= delay * 2 + Duration::from_millis(100),
        "6 delayed jobs finished in {elapsed:?}; concurrency ceiling not enforced"
    );
}

#[tokio::test]
async fn empty_job_list_is_a_no_op() {
    let stats = MediaDownloader::new().download_all(Vec::new()).await;
    assert_eq!(stats, DownloadStats::default());
}
