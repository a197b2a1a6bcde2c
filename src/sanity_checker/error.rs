use crate::http_client;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Sanity check request failed: {0}")]
    Request(#[from] http_client::error::Error),

    #[error("Failed to write the check report: {0}")]
    Report(#[from] std::io::Error),
}
