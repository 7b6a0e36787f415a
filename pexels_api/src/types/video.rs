//! Video records returned by the video endpoints and inside collections.

use serde::{Deserialize, Serialize};

use super::Pagination;

/// Numeric identifier for a video.
pub type VideoID = u64;

/// A single video with its renditions and preview pictures.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Video {
    pub id: VideoID,
    pub width: u32,
    pub height: u32,
    /// Page URL of the video on pexels.com.
    pub url: String,
    /// Screenshot of the video.
    pub image: String,
    /// Length in seconds.
    pub duration: u32,
    /// The videographer.
    pub user: User,
    pub video_files: Vec<VideoFile>,
    pub video_pictures: Vec<VideoPicture>,
}

/// The person who shot a video.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// One rendition of a video.
///
/// Adaptive-streaming renditions report no dimensions, so `width` and
/// `height` are optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VideoFile {
    pub id: u64,
    /// `"sd"`, `"hd"`, `"uhd"` or `"hls"`.
    pub quality: Option<String>,
    pub file_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub link: String,
}

/// A preview picture taken from a video.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    /// Position of the picture within the preview sequence.
    pub nr: u32,
}

/// A page of videos.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoPayload {
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl Video {
    /// Returns the widest rendition with known dimensions.
    pub fn best_file(&self) -> Option<&VideoFile> {
        self.video_files
            .iter()
            .filter(|f| f.width.is_some())
            .max_by_key(|f| f.width.unwrap_or(0))
    }
}
