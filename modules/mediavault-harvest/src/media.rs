// Bounded-concurrency media downloader. Platform services build the jobs;
// this module fetches them and contains per-job failures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use futures::{stream, StreamExt};
use tracing::{info, warn};

/// Max media downloads in flight at once.
const MAX_CONCURRENT_DOWNLOADS: usize = 2;

/// One media file to fetch: source URL and destination path.
/// Destinations are unique per post, so concurrent jobs never collide.
#[derive(Debug, Clone)]
pub struct DownloadJob {
    pub url: String,
    pub dest: PathBuf,
}

/// Outcome counters for one download batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadStats {
    pub saved: usize,
    pub failed: usize,
}

pub struct MediaDownloader {
    client: reqwest::Client,
}

impl Default for MediaDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch every job with at most `MAX_CONCURRENT_DOWNLOADS` in flight.
    /// Jobs are dispatched in input order; completion order is whatever the
    /// network gives. A failed job is logged and counted, never raised; the
    /// rest of the batch keeps going and the batch itself always succeeds.
    pub async fn download_all(&self, jobs: Vec<DownloadJob>) -> DownloadStats {
        let results: Vec<bool> = stream::iter(jobs.into_iter().map(|job| async move {
            match self.fetch_one(&job).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(
                        url = job.url.as_str(),
                        dest = %job.dest.display(),
                        error = %e,
                        "Failed to download media"
                    );
                    false
                }
            }
        }))
        .buffer_unordered(MAX_CONCURRENT_DOWNLOADS)
        .collect()
        .await;

        let saved = results.iter().filter(|ok| **ok).count();
        let stats = DownloadStats {
            saved,
            failed: results.len() - saved,
        };
        info!(saved = stats.saved, failed = stats.failed, "Media download complete");
        stats
    }

    /// GET one media URL and write the body to the destination, overwriting
    /// any existing file.
    async fn fetch_one(&self, job: &DownloadJob) -> Result<()> {
        let parsed = url::Url::parse(&job.url).context("Invalid media URL")?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("Only http/https URLs allowed, got: {}", parsed.scheme());
        }

        let resp = self
            .client
            .get(&job.url)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, job.url);
        }

        let bytes = resp
            .bytes()
            .await
            .context("Failed to read response body")?;

        tokio::fs::write(&job.dest, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", job.dest.display()))?;

        info!(dest = %job.dest.display(), bytes = bytes.len(), "Saved media file");
        Ok(())
    }
}
