//! Response metadata shared by every endpoint, and the per-endpoint
//! response records built from it.

use reqwest::header::HeaderMap;

use crate::transport::TransportResponse;
use crate::types::{
    CollectionPayload, Media, MediaPayload, Pagination, Photo, PhotoPayload, Video, VideoPayload,
};

const RATE_LIMIT: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Status and headers of the HTTP response that produced a payload.
#[derive(Debug, Clone, Default)]
pub struct ResponseCommon {
    /// Numeric HTTP status code, e.g. `200`.
    pub status_code: u16,
    /// Status line text, e.g. `"200 OK"`.
    pub status: String,
    /// All response headers.
    pub headers: HeaderMap,
}

impl ResponseCommon {
    pub(crate) fn from_transport(resp: &TransportResponse) -> Self {
        Self {
            status_code: resp.status.as_u16(),
            status: resp.status.to_string(),
            headers: resp.headers.clone(),
        }
    }

    /// Total request limit for the current monthly period.
    pub fn rate_limit(&self) -> u64 {
        self.header_as_int(RATE_LIMIT)
    }

    /// Requests remaining in the current monthly period.
    pub fn rate_limit_remaining(&self) -> u64 {
        self.header_as_int(RATE_LIMIT_REMAINING)
    }

    /// UNIX timestamp at which the current monthly period rolls over.
    pub fn rate_limit_reset(&self) -> u64 {
        self.header_as_int(RATE_LIMIT_RESET)
    }

    // Missing or unparsable headers read as 0.
    fn header_as_int(&self, name: &str) -> u64 {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// A decoded payload together with the metadata of the response it came from.
#[derive(Debug, Clone, Default)]
pub struct Response<T> {
    pub common: ResponseCommon,
    pub data: T,
}

impl<T> Response<T> {
    /// Copies this response's metadata into another envelope's metadata.
    pub fn copy_common(&self, target: &mut ResponseCommon) {
        target.status_code = self.common.status_code;
        target.status.clone_from(&self.common.status);
        target.headers.clone_from(&self.common.headers);
    }
}

/// A single photo.
#[derive(Debug, Clone, Default)]
pub struct PhotoResponse {
    pub common: ResponseCommon,
    pub photo: Photo,
}

/// A page of photos from search or the curated feed.
#[derive(Debug, Clone, Default)]
pub struct PhotosResponse {
    pub common: ResponseCommon,
    pub payload: PhotoPayload,
}

/// A single video.
#[derive(Debug, Clone, Default)]
pub struct VideoResponse {
    pub common: ResponseCommon,
    pub video: Video,
}

/// A page of videos from search or the popular feed.
#[derive(Debug, Clone, Default)]
pub struct VideosResponse {
    pub common: ResponseCommon,
    pub payload: VideoPayload,
}

/// A page of collections.
#[derive(Debug, Clone, Default)]
pub struct CollectionsResponse {
    pub common: ResponseCommon,
    pub payload: CollectionPayload,
}

/// The media of one collection, split by kind.
///
/// Either list may be empty; each keeps the order the API returned.
#[derive(Debug, Clone, Default)]
pub struct MediaResponse {
    pub common: ResponseCommon,
    pub id: String,
    pub photos: Vec<Photo>,
    pub videos: Vec<Video>,
    pub pagination: Pagination,
}

impl From<Response<MediaPayload>> for MediaResponse {
    fn from(resp: Response<MediaPayload>) -> Self {
        let mut out = MediaResponse::default();
        resp.copy_common(&mut out.common);
        let MediaPayload {
            id,
            media,
            pagination,
        } = resp.data;
        for m in media {
            match m {
                Media::Photo(p) => out.photos.push(p),
                Media::Video(v) => out.videos.push(v),
            }
        }
        out.id = id;
        out.pagination = pagination;
        out
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};

    use super::*;

    fn common_with(name: &str, value: &str) -> ResponseCommon {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
        ResponseCommon {
            headers,
            ..Default::default()
        }
    }

    #[test]
    fn rate_limit_headers_parse() {
        assert_eq!(common_with("X-Ratelimit-Limit", "20000").rate_limit(), 20000);
        assert_eq!(
            common_with("X-Ratelimit-Remaining", "18000").rate_limit_remaining(),
            18000
        );
        assert_eq!(
            common_with("X-Ratelimit-Reset", "1625092515").rate_limit_reset(),
            1625092515
        );
    }

    #[test]
    fn missing_or_garbage_headers_read_as_zero() {
        let common = ResponseCommon::default();
        assert_eq!(common.rate_limit(), 0);
        assert_eq!(common.rate_limit_remaining(), 0);
        assert_eq!(common.rate_limit_reset(), 0);

        assert_eq!(common_with("X-Ratelimit-Limit", "lots").rate_limit(), 0);
        assert_eq!(common_with("X-Ratelimit-Limit", "-5").rate_limit(), 0);
    }

    #[test]
    fn copy_common_copies_status_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let source = Response {
            common: ResponseCommon {
                status_code: 200,
                status: "200 OK".to_string(),
                headers,
            },
            data: (),
        };

        let mut target = ResponseCommon::default();
        source.copy_common(&mut target);
        assert_eq!(target.status_code, 200);
        assert_eq!(target.status, "200 OK");
        assert_eq!(target.headers, source.common.headers);
    }
}
