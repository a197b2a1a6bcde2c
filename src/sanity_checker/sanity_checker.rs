use async_trait::async_trait;

use crate::{http_client::error::Error, sanity_checker::check_outcome::CheckOutcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SanityChecker: Send + Sync {
    async fn run_check(&self) -> Result<CheckOutcome, Error>;
}
