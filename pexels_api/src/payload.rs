//! Body decoding for each result shape the API returns.

use crate::types::{
    CollectionPayload, Media, MediaPayload, Photo, PhotoPayload, RawMediaPayload, Video,
    VideoPayload,
};
use crate::Error;

/// A response body shape the client knows how to decode.
pub trait Payload: Sized {
    fn decode(body: &[u8]) -> Result<Self, Error>;
}

macro_rules! json_payload {
    ($($t:ty),+ $(,)?) => {
        $(impl Payload for $t {
            fn decode(body: &[u8]) -> Result<Self, Error> {
                Ok(serde_json::from_slice(body)?)
            }
        })+
    };
}

json_payload!(Photo, Video, PhotoPayload, VideoPayload, CollectionPayload);

// Elements are kept as raw JSON until their `type` tag has been read.
impl Payload for MediaPayload {
    fn decode(body: &[u8]) -> Result<Self, Error> {
        let raw: RawMediaPayload = serde_json::from_slice(body)?;
        let media = raw
            .media
            .into_iter()
            .map(Media::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MediaPayload {
            id: raw.id,
            media,
            pagination: raw.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_media_keeps_wire_order() {
        let body = br#"{
            "id": "9mp14cx",
            "media": [
                {"type": "Video", "id": 3},
                {"type": "Photo", "id": 1},
                {"type": "Video", "id": 2}
            ],
            "page": 1,
            "per_page": 15,
            "total_results": 3
        }"#;
        let payload = MediaPayload::decode(body).unwrap();
        assert_eq!(payload.id, "9mp14cx");
        assert_eq!(payload.pagination.total_results, 3);
        let kinds: Vec<_> = payload.media.iter().map(|m| (m.media_type(), m.id())).collect();
        assert_eq!(kinds, vec![("Video", 3), ("Photo", 1), ("Video", 2)]);
    }

    #[test]
    fn one_bad_element_fails_the_whole_payload() {
        let body = br#"{"id": "x", "media": [{"type": "Photo", "id": 1}, {"id": 2}]}"#;
        let err = MediaPayload::decode(body).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType(None)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = Photo::decode(br#"data":["key":"value"]}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        let err = MediaPayload::decode(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
