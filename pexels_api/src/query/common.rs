//! Shared query infrastructure: the [`Query`] trait, its field table, and the
//! paging and filter fields common to several endpoints.

use url::{form_urlencoded, Url};

use crate::types::{Color, Locale, MediaFilter, Orientation, Size};

/// One entry of a parameter type's field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryField {
    /// Query-string key.
    pub key: &'static str,
    /// The field's current value rendered as text.
    pub value: String,
    /// Sent in place of an unset value, if declared.
    pub default: Option<&'static str>,
}

impl QueryField {
    pub fn new(key: &'static str, value: &impl QueryValue) -> Self {
        Self {
            key,
            value: value.render(),
            default: None,
        }
    }

    /// Declares the literal sent when the field is unset.
    pub fn or_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Resolves the pair to emit. Empty text and `"0"` count as unset.
    fn resolve(self) -> Option<(&'static str, String)> {
        if self.value.is_empty() || self.value == "0" {
            self.default.map(|default| (self.key, default.to_string()))
        } else {
            Some((self.key, self.value))
        }
    }
}

/// Values that can appear in a query string.
pub trait QueryValue {
    fn render(&self) -> String;
}

macro_rules! impl_query_value {
    ($($t:ty),+ $(,)?) => {
        $(impl QueryValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })+
    };
}

impl_query_value!(u8, u16, u32, u64, String, Locale, Orientation, Size, Color, MediaFilter);

impl<T: QueryValue> QueryValue for Option<T> {
    fn render(&self) -> String {
        self.as_ref().map(|v| v.render()).unwrap_or_default()
    }
}

/// Trait implemented by all parameter types. Provides URL serialization from a
/// declared field table and shared builder methods for paging.
///
/// A value equal to `Self::default()` means "no filters": it encodes to an
/// empty query and the server's own defaults apply.
pub trait Query: Default + PartialEq {
    /// The field table: every query key with its current value and default.
    fn fields(&self) -> Vec<QueryField>;

    /// Returns a mutable reference to the paging fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Returns `true` when no field has been set.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Renders the query string, keys in lexicographic order.
    fn encode(&self) -> String {
        if self.is_zero() {
            return String::new();
        }
        let mut pairs: Vec<(&'static str, String)> = self
            .fields()
            .into_iter()
            .filter_map(QueryField::resolve)
            .collect();
        pairs.sort_by_key(|(key, _)| *key);
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let query = self.encode();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        url
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u16) -> Self {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. The API caps this at 80.
    fn with_per_page(mut self, per_page: u8) -> Self {
        self.get_common().per_page = per_page;
        self
    }
}

/// Paging fields shared by every list endpoint.
///
/// Zero means unset; an unset page is sent as `1` and an unset page size as
/// `15` once any other field of the query is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCommon {
    pub page: u16,
    pub per_page: u8,
}

impl QueryCommon {
    pub fn fields(&self) -> [QueryField; 2] {
        [
            QueryField::new("page", &self.page).or_default("1"),
            QueryField::new("per_page", &self.per_page).or_default("15"),
        ]
    }
}

/// Filters shared by photo and video search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct General {
    pub locale: Option<Locale>,
    pub orientation: Option<Orientation>,
    pub size: Option<Size>,
}

impl General {
    pub fn fields(&self) -> [QueryField; 3] {
        [
            QueryField::new("locale", &self.locale),
            QueryField::new("orientation", &self.orientation),
            QueryField::new("size", &self.size),
        ]
    }
}

/// Builder methods for the [`General`] search filters.
pub trait Search: Query {
    fn get_general(&mut self) -> &mut General;

    fn with_locale(mut self, locale: Locale) -> Self {
        self.get_general().locale = Some(locale);
        self
    }

    fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.get_general().orientation = Some(orientation);
        self
    }

    fn with_size(mut self, size: Size) -> Self {
        self.get_general().size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, PartialEq)]
    struct Probe {
        name: String,
        count: u32,
        flag: Option<Size>,
        common: QueryCommon,
    }

    impl Query for Probe {
        fn fields(&self) -> Vec<QueryField> {
            let mut fields = vec![
                QueryField::new("name", &self.name),
                QueryField::new("count", &self.count).or_default("3"),
                QueryField::new("flag", &self.flag),
            ];
            fields.extend(self.common.fields());
            fields
        }

        fn get_common(&mut self) -> &mut QueryCommon {
            &mut self.common
        }
    }

    #[test]
    fn zero_value_encodes_to_nothing() {
        assert_eq!(Probe::default().encode(), "");
        let url = Url::parse("https://example.com/curated").unwrap();
        assert_eq!(Probe::default().add_to_url(&url), url);
    }

    #[test]
    fn defaults_fill_unset_fields_once_anything_is_set() {
        let probe = Probe {
            name: "a b&c".to_string(),
            ..Default::default()
        };
        insta::assert_snapshot!(probe.encode(), @"count=3&name=a+b%26c&page=1&per_page=15");
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let probe = Probe {
            count: 9,
            flag: Some(Size::Large),
            ..Default::default()
        }
        .with_page(4)
        .with_per_page(80);
        insta::assert_snapshot!(probe.encode(), @"count=9&flag=large&page=4&per_page=80");
    }

    #[test]
    fn literal_zero_text_counts_as_unset() {
        let probe = Probe {
            name: "0".to_string(),
            flag: Some(Size::Small),
            ..Default::default()
        };
        insta::assert_snapshot!(probe.encode(), @"count=3&flag=small&page=1&per_page=15");
    }

    #[test]
    fn option_renders_empty_when_none() {
        assert_eq!(None::<Locale>.render(), "");
        assert_eq!(Some(Locale::JaJp).render(), "ja-JP");
    }
}
