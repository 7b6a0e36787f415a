//! Typed client for the Pexels photo and video API.
//!
//! ```no_run
//! use pexels_api::{Client, PhotoSearchParams, Query, Search};
//! use pexels_api::types::Orientation;
//!
//! # async fn run() -> Result<(), pexels_api::Error> {
//! let client = Client::new("my-api-key")?;
//! let params = PhotoSearchParams::new("mountains")
//!     .with_orientation(Orientation::Landscape)
//!     .with_per_page(5);
//! let resp = client.search_photos(&params).await?;
//! println!(
//!     "{} photos, {} requests left",
//!     resp.payload.pagination.total_results,
//!     resp.common.rate_limit_remaining()
//! );
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod payload;
mod query;
mod response;
pub mod transport;
pub mod types;
pub use self::client::{Client, ClientBuilder, PHOTO_BASE_URL, VIDEO_BASE_URL};
pub use self::errors::Error;
pub use self::payload::Payload;
pub use self::query::{
    CollectionMediaParams, CollectionParams, CuratedPhotosParams, General, PhotoSearchParams,
    PopularVideoParams, Query, QueryCommon, QueryField, QueryValue, Search, VideoSearchParams,
};
pub use self::response::{
    CollectionsResponse, MediaResponse, PhotoResponse, PhotosResponse, Response, ResponseCommon,
    VideoResponse, VideosResponse,
};
pub use self::transport::{ReqwestTransport, Transport, TransportError};
