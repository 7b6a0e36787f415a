//! The HTTP exchange seam between the client and the network.
//!
//! [`Client`](crate::Client) never talks to the network directly: every call
//! goes through a [`Transport`]. The default is [`ReqwestTransport`]; tests and
//! callers with special needs can inject their own.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::Error;

/// Request timeout applied by the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully-formed request, ready to be sent.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// The raw result of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Performs one HTTP exchange.
///
/// Implementations must not retry; whatever error the exchange produces is
/// handed back to the caller unchanged.
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the response status, headers and body.
    fn execute(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// A failure reported by a [`Transport`].
///
/// Displays exactly as the wrapped error does.
#[derive(Debug)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(error.into())
    }

    /// Returns the wrapped error.
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

/// Default [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with a 30-second request timeout.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.into())
            })?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
