use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use tracing::{debug, info};

use crate::http_client::{
    error::{Error, HttpClientErrorChecker},
    http_client::HttpClient,
    request::{Request, RequestMethod},
    response::{Response, ResponseBody, ResponseHeaders},
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// No timeout is configured: a silent endpoint blocks the check indefinitely.
///
/// Redirects are not followed, so a 3xx is the response the caller sees and
/// every `execute` sends exactly one request.
impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self {
            client: reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        info!("Sending {} {}", request.method, request.url);

        let reqwest_response = self
            .client
            .request(request.method.into(), request.url)
            .send()
            .await
            .map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();
        let headers: ResponseHeaders = reqwest_response.headers().into();

        debug!("Received status {} with headers {:?}", status, headers);

        Ok(Response::new(status, headers, reqwest_response))
    }
}

#[async_trait]
impl ResponseBody for reqwest::Response {
    async fn read(self: Box<Self>) -> Result<Bytes, Error> {
        let response = *self;
        response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_connect(&self) -> bool {
        self.is_connect()
    }

    fn is_request(&self) -> bool {
        self.is_request()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}

impl From<&HeaderMap> for ResponseHeaders {
    fn from(headers: &HeaderMap) -> Self {
        let map = headers
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|val| (k.to_string(), val.to_string())))
            .collect();
        ResponseHeaders(map)
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(value: RequestMethod) -> Self {
        match value {
            RequestMethod::Get => reqwest::Method::GET,
        }
    }
}
