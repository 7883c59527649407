// Platform-specific services. Each service knows how to fetch one platform's
// post metadata via Apify, normalize it, and build the media download jobs.

pub mod instagram;
pub mod tiktok;

/// Treat empty strings from the dataset as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
