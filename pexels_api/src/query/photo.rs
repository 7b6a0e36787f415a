use crate::types::Color;

use super::{
    common::{General, QueryCommon, QueryField, Search},
    Query,
};

/// Paging for the curated photos feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedPhotosParams {
    pub common: QueryCommon,
}

impl Query for CuratedPhotosParams {
    fn fields(&self) -> Vec<QueryField> {
        self.common.fields().into()
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

/// Photo search. `query` is required; everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSearchParams {
    pub query: String,
    pub general: General,
    pub color: Option<Color>,
    pub common: QueryCommon,
}

impl Query for PhotoSearchParams {
    fn fields(&self) -> Vec<QueryField> {
        let mut fields = vec![QueryField::new("query", &self.query)];
        fields.extend(self.general.fields());
        fields.push(QueryField::new("color", &self.color));
        fields.extend(self.common.fields());
        fields
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl Search for PhotoSearchParams {
    fn get_general(&mut self) -> &mut General {
        &mut self.general
    }
}

impl PhotoSearchParams {
    pub fn new(query: &str) -> Self {
        Self::default().with_query(query)
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{common::Search, CuratedPhotosParams, PhotoSearchParams, Query},
        types::{Color, Locale, Orientation, Size},
    };

    #[test]
    fn test_photo_search_query() {
        let url = Url::parse("https://example.com/search").unwrap();

        insta::assert_snapshot!(PhotoSearchParams::new("ocean waves")
            .with_locale(Locale::PtBr)
            .with_orientation(Orientation::Landscape)
            .with_size(Size::Medium)
            .with_color(Color::Turquoise)
            .with_page(3)
            .with_per_page(40)
            .add_to_url(&url)
            .to_string(), @"https://example.com/search?color=turquoise&locale=pt-BR&orientation=landscape&page=3&per_page=40&query=ocean+waves&size=medium");

        insta::assert_snapshot!(PhotoSearchParams::new("cats")
            .add_to_url(&url)
            .to_string(), @"https://example.com/search?page=1&per_page=15&query=cats");
    }

    #[test]
    fn test_curated_query() {
        let url = Url::parse("https://example.com/curated").unwrap();

        assert_eq!(
            CuratedPhotosParams::default().add_to_url(&url).to_string(),
            "https://example.com/curated"
        );
        insta::assert_snapshot!(CuratedPhotosParams::default()
            .with_per_page(5)
            .add_to_url(&url)
            .to_string(), @"https://example.com/curated?page=1&per_page=5");
    }
}
