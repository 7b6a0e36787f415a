mod common;
pub use self::common::{General, Query, QueryCommon, QueryField, QueryValue, Search};

mod photo;
pub use self::photo::{CuratedPhotosParams, PhotoSearchParams};

mod video;
pub use self::video::{PopularVideoParams, VideoSearchParams};

mod collection;
pub use self::collection::{CollectionMediaParams, CollectionParams};
