use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] apify_client::ApifyError),

    #[error("Persist failed: {0}")]
    Persist(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
