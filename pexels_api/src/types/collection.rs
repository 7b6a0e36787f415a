//! Collections and their mixed media listings.

use serde::{Deserialize, Serialize};

use super::{Media, Pagination};

/// A named collection of photos and videos.
///
/// The three counts come straight from the API and are not checked against
/// each other.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub private: bool,
    pub media_count: u32,
    pub photos_count: u32,
    pub videos_count: u32,
}

/// A page of collections.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionPayload {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// A page of the media inside one collection, in API order.
///
/// Decoded element by element through [`Media::from_value`]; see
/// [`crate::Payload`].
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPayload {
    pub id: String,
    pub media: Vec<Media>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Wire form of [`MediaPayload`] with each element still undecoded.
#[derive(Deserialize)]
pub(crate) struct RawMediaPayload {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub media: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub pagination: Pagination,
}
