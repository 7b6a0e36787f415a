//! The photo-or-video union used by collection listings.

use serde::Serialize;
use serde_json::Value;

use super::{Photo, Video};
use crate::Error;

/// Wire discriminator for photos.
pub const PHOTO_TYPE: &str = "Photo";
/// Wire discriminator for videos.
pub const VIDEO_TYPE: &str = "Video";

/// An element of a collection: either a photo or a video.
///
/// Serializes with the `type` discriminator the API uses, so a serialized
/// element decodes back into the same variant.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Media {
    Photo(Photo),
    Video(Video),
}

impl Media {
    /// Decodes one collection element.
    ///
    /// The `type` field is read first and selects the shape the whole object
    /// is decoded into. Anything other than `"Photo"` or `"Video"`, including
    /// a missing or null tag, is rejected.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let is_video = match value.get("type") {
            Some(Value::String(tag)) if tag == VIDEO_TYPE => true,
            Some(Value::String(tag)) if tag == PHOTO_TYPE => false,
            Some(Value::String(tag)) => return Err(Error::UnsupportedMediaType(Some(tag.clone()))),
            Some(Value::Null) | None => return Err(Error::UnsupportedMediaType(None)),
            Some(other) => return Err(Error::UnsupportedMediaType(Some(other.to_string()))),
        };
        if is_video {
            Ok(Media::Video(serde_json::from_value(value)?))
        } else {
            Ok(Media::Photo(serde_json::from_value(value)?))
        }
    }

    /// Returns the wire discriminator for this element.
    pub fn media_type(&self) -> &'static str {
        match self {
            Media::Photo(_) => PHOTO_TYPE,
            Media::Video(_) => VIDEO_TYPE,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Media::Photo(p) => p.id,
            Media::Video(v) => v.id,
        }
    }

    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            Media::Photo(p) => Some(p),
            Media::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&Video> {
        match self {
            Media::Video(v) => Some(v),
            Media::Photo(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_each_variant_by_tag() {
        let photo =
            Media::from_value(json!({"type": "Photo", "id": 1, "photographer": "A"})).unwrap();
        assert_eq!(photo.media_type(), "Photo");
        assert_eq!(photo.as_photo().unwrap().photographer, "A");

        let video = Media::from_value(json!({"type": "Video", "id": 2, "duration": 9})).unwrap();
        assert_eq!(video.id(), 2);
        assert_eq!(video.as_video().unwrap().duration, 9);
        assert!(video.as_photo().is_none());
    }

    #[test]
    fn rejects_unknown_missing_and_null_tags() {
        let err = Media::from_value(json!({"type": "Collection"})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType(Some(ref t)) if t == "Collection"));

        let err = Media::from_value(json!({"data": {"notype": []}})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType(None)));

        let err = Media::from_value(json!({"type": null, "id": 3})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType(None)));

        let err = Media::from_value(json!({"type": 7})).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType(Some(_))));
    }

    #[test]
    fn tag_is_case_sensitive() {
        assert!(Media::from_value(json!({"type": "photo"})).is_err());
    }

    #[test]
    fn type_mismatch_inside_element_is_a_decode_error() {
        let err = Media::from_value(json!({"type": "Photo", "id": "not a number"})).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn serializes_with_discriminator() {
        let media = Media::Video(Video {
            id: 42,
            ..Default::default()
        });
        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["type"], "Video");
        assert_eq!(Media::from_value(value).unwrap(), media);
    }
}
