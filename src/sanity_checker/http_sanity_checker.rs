use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{
    http_client::{error::Error, http_client::HttpClient, request::Request},
    sanity_checker::{
        check_outcome::{CheckOutcome, SUCCESS_STATUS},
        sanity_checker::SanityChecker,
    },
};

pub struct HttpSanityChecker {
    pub http_client: Arc<dyn HttpClient>,
    pub url: String,
}

impl HttpSanityChecker {
    pub fn new(http_client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }

    async fn check(&self) -> Result<CheckOutcome, Error> {
        let response = self.http_client.execute(Request::get(&self.url)).await?;

        if response.status != SUCCESS_STATUS {
            warn!("{} returned unhealthy status: {}", self.url, response.status);
            return Ok(CheckOutcome::Failure {
                status: response.status,
            });
        }

        let body = response.bytes().await?;
        info!("✓ {} is healthy, read {} bytes", self.url, body.len());

        Ok(CheckOutcome::Success { body })
    }
}

#[async_trait]
impl SanityChecker for HttpSanityChecker {
    /// Sends exactly one GET. The body is only read on a 200.
    async fn run_check(&self) -> Result<CheckOutcome, Error> {
        let span = info_span!(
            "sanity_check",
            check_id = %Uuid::new_v4(),
            url = %self.url,
        );

        self.check().instrument(span).await
    }
}
