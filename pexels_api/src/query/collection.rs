use crate::types::MediaFilter;

use super::{
    common::{QueryCommon, QueryField},
    Query,
};

/// Paging for collection listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionParams {
    pub common: QueryCommon,
}

impl Query for CollectionParams {
    fn fields(&self) -> Vec<QueryField> {
        self.common.fields().into()
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

/// Selects one collection's media, optionally only its photos or videos.
///
/// `id` is part of the request path, not the query string, and is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionMediaParams {
    pub id: String,
    pub media_type: Option<MediaFilter>,
    pub common: QueryCommon,
}

impl Query for CollectionMediaParams {
    fn fields(&self) -> Vec<QueryField> {
        let mut fields = vec![QueryField::new("type", &self.media_type)];
        fields.extend(self.common.fields());
        fields
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    // The id never reaches the query string, so it does not count as a filter.
    fn is_zero(&self) -> bool {
        self.media_type.is_none() && self.common == QueryCommon::default()
    }
}

impl CollectionMediaParams {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_media_type(mut self, media_type: MediaFilter) -> Self {
        self.media_type = Some(media_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{CollectionMediaParams, CollectionParams, Query},
        types::MediaFilter,
    };

    #[test]
    fn test_collection_media_query() {
        let url = Url::parse("https://example.com/collections/abc123").unwrap();

        assert_eq!(
            CollectionMediaParams::new("abc123").add_to_url(&url),
            url,
            "an id alone adds no query"
        );
        insta::assert_snapshot!(CollectionMediaParams::new("abc123")
            .with_media_type(MediaFilter::Videos)
            .with_page(22)
            .with_per_page(80)
            .add_to_url(&url)
            .to_string(), @"https://example.com/collections/abc123?page=22&per_page=80&type=videos");
    }

    #[test]
    fn test_collections_query() {
        let url = Url::parse("https://example.com/collections").unwrap();

        insta::assert_snapshot!(CollectionParams::default()
            .with_page(2)
            .add_to_url(&url)
            .to_string(), @"https://example.com/collections?page=2&per_page=15");
    }
}
