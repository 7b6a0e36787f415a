mod pagination;
pub use self::pagination::Pagination;

mod photo;
pub use self::photo::{Photo, PhotoID, PhotoPayload, PhotoSource};

mod video;
pub use self::video::{User, Video, VideoFile, VideoID, VideoPayload, VideoPicture};

mod media;
pub use self::media::{Media, PHOTO_TYPE, VIDEO_TYPE};

mod collection;
pub(crate) use self::collection::RawMediaPayload;
pub use self::collection::{Collection, CollectionPayload, MediaPayload};

mod filters;
pub use self::filters::{Color, Locale, MediaFilter, Orientation, Size};
