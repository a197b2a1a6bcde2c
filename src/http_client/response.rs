use std::{
    collections::HashMap,
    fmt,
    ops::Deref,
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::http_client::error::Error;

/// A response whose status and headers have arrived.
///
/// The body is read at most once: [`Response::bytes`] consumes the response.
/// Dropping it unread releases the underlying connection.
pub struct Response {
    pub status: u16,
    pub headers: ResponseHeaders,
    body: Box<dyn ResponseBody>,
}

impl Response {
    pub fn new(status: u16, headers: ResponseHeaders, body: impl ResponseBody + 'static) -> Self {
        Self {
            status,
            headers,
            body: Box::new(body),
        }
    }

    pub async fn bytes(self) -> Result<Bytes, Error> {
        self.body.read().await
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

#[async_trait]
pub trait ResponseBody: Send {
    async fn read(self: Box<Self>) -> Result<Bytes, Error>;
}

#[async_trait]
impl ResponseBody for Bytes {
    async fn read(self: Box<Self>) -> Result<Bytes, Error> {
        Ok(*self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeaders(pub HashMap<String, String>);

impl Deref for ResponseHeaders {
    type Target = HashMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
