pub mod media;
pub mod services;
pub mod store;

pub use media::{DownloadJob, DownloadStats, MediaDownloader};
pub use services::instagram::InstagramService;
pub use services::tiktok::TikTokService;
