//! Photo records returned by the photo endpoints and inside collections.

use serde::{Deserialize, Serialize};

use super::Pagination;

/// Numeric identifier for a photo, as found at the end of its page URL.
pub type PhotoID = u64;

/// A single photo.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Photo {
    pub id: PhotoID,
    pub width: u32,
    pub height: u32,
    /// Page URL of the photo on pexels.com.
    pub url: String,
    /// Text description of the photo.
    pub alt: String,
    pub photographer: String,
    pub photographer_url: String,
    pub photographer_id: u64,
    /// Average colour as a hex string, e.g. `#978E82`.
    pub avg_color: String,
    /// Image URLs at the sizes the API renders.
    pub src: PhotoSource,
    /// Whether the requesting user liked the photo.
    pub liked: bool,
}

/// Image URLs for one photo at several sizes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoSource {
    pub original: String,
    /// W 940px x H 650px, DPR 2.
    pub large2x: String,
    /// W 940px x H 650px, DPR 1.
    pub large: String,
    /// Scaled width, H 350px.
    pub medium: String,
    /// Scaled width, H 130px.
    pub small: String,
    /// W 800px x H 1200px.
    pub portrait: String,
    /// W 1200px x H 627px.
    pub landscape: String,
    /// W 280px x H 200px.
    pub tiny: String,
}

/// A page of photos.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoPayload {
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
