use async_trait::async_trait;

use crate::http_client::{error::Error, request::Request, response::Response};

/// Sends a request and resolves as soon as the status line and headers are in.
///
/// The body stays on the wire until [`Response::bytes`] is called.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}
