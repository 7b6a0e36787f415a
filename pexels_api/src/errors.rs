//! Error types for the API client.

use crate::transport::TransportError;

/// Errors that can occur when building a client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was built without an API key.
    #[error("an API key is required")]
    MissingApiKey,
    /// A configured base URL could not be parsed.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// A request URL could not be assembled from the base URL and path.
    #[error("invalid request URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for header {name}")]
    InvalidHeader { name: &'static str },
    /// A search was attempted with an empty query.
    #[error("query is required")]
    MissingQuery,
    /// A path identifier cannot be sent as a single URL path segment.
    #[error("invalid path segment {0:?}")]
    InvalidPathSegment(String),
    /// A collection lookup was attempted without a collection ID.
    #[error("a collection ID must be specified")]
    MissingCollectionId,
    /// A string could not be parsed into one of the API's enumerated values.
    #[error("unknown {kind} {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
    /// The transport failed to complete the HTTP exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// A media element carried a discriminator other than `Photo` or `Video`.
    #[error("unsupported media type {0:?}")]
    UnsupportedMediaType(Option<String>),
}
