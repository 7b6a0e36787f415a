use pexels_api::types::{Color, Locale, MediaFilter, Orientation, Size};
use pexels_api::{
    CollectionMediaParams, CollectionParams, CuratedPhotosParams, PhotoSearchParams,
    PopularVideoParams, Query, Search, VideoSearchParams,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn zero_params_encode_to_nothing() {
    assert_eq!(CuratedPhotosParams::default().encode(), "");
    assert_eq!(PhotoSearchParams::default().encode(), "");
    assert_eq!(VideoSearchParams::default().encode(), "");
    assert_eq!(PopularVideoParams::default().encode(), "");
    assert_eq!(CollectionParams::default().encode(), "");
    assert_eq!(CollectionMediaParams::default().encode(), "");
    assert_eq!(PopularVideoParams::default().add_to_url(&base_url()).query(), None);
}

#[test]
fn unset_paging_falls_back_to_defaults() {
    let url = PhotoSearchParams::new("cats").add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=1"));
    assert!(query.contains("per_page=15"));
}

#[test]
fn explicit_paging_overrides_defaults() {
    let url = CollectionParams::default()
        .with_page(7)
        .with_per_page(80)
        .add_to_url(&base_url());
    assert_eq!(
        pairs(&url),
        vec![
            ("page".to_string(), "7".to_string()),
            ("per_page".to_string(), "80".to_string()),
        ]
    );
}

#[test]
fn unset_filters_without_defaults_are_omitted() {
    let url = PopularVideoParams::default()
        .with_min_width(1920)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("min_width=1920"));
    assert!(!query.contains("min_height"));
    assert!(!query.contains("max_duration"));
}

#[test]
fn keys_are_sorted() {
    let url = PhotoSearchParams::new("sea")
        .with_size(Size::Small)
        .with_color(Color::Blue)
        .with_locale(Locale::EnUs)
        .with_orientation(Orientation::Square)
        .add_to_url(&base_url());
    let keys: Vec<String> = pairs(&url).into_iter().map(|(k, _)| k).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.len(), 7);
}

#[test]
fn search_text_is_form_encoded() {
    let url = VideoSearchParams::new("city lights & rain").add_to_url(&base_url());
    assert!(url.query().unwrap().contains("query=city+lights+%26+rain"));
    assert!(pairs(&url).contains(&("query".to_string(), "city lights & rain".to_string())));
}

#[test]
fn collection_media_type_filter() {
    let url = CollectionMediaParams::new("abc")
        .with_media_type(MediaFilter::Photos)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("type=photos"));
    assert!(!query.contains("abc"), "id belongs in the path");
}

#[test]
fn encoding_is_deterministic() {
    let params = VideoSearchParams::new("forest")
        .with_locale(Locale::DeDe)
        .with_page(2);
    assert_eq!(params.encode(), params.clone().encode());
    insta::assert_snapshot!(params.encode(), @"locale=de-DE&page=2&per_page=15&query=forest");
}
