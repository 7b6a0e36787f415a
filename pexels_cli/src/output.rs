use anyhow::Result;
use pexels_api::types::{Collection, Photo, Video};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct PhotoRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Photographer")]
    #[serde(rename = "Photographer")]
    photographer: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "Color")]
    #[serde(rename = "Color")]
    avg_color: String,
    #[tabled(rename = "Alt")]
    #[serde(rename = "Alt")]
    alt: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
struct VideoRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Author")]
    #[serde(rename = "Author")]
    author: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "Duration")]
    #[serde(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Best File")]
    #[serde(rename = "Best File")]
    best_file: String,
}

#[derive(Tabled, Serialize)]
struct CollectionRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Media")]
    #[serde(rename = "Media")]
    media: u32,
    #[tabled(rename = "Photos")]
    #[serde(rename = "Photos")]
    photos: u32,
    #[tabled(rename = "Videos")]
    #[serde(rename = "Videos")]
    videos: u32,
    #[tabled(rename = "Private")]
    #[serde(rename = "Private")]
    private: bool,
}

#[derive(Tabled, Serialize)]
struct MediaRow {
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Credit")]
    #[serde(rename = "Credit")]
    credit: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

fn build_photo_rows(photos: &[Photo]) -> Vec<PhotoRow> {
    photos
        .iter()
        .map(|p| PhotoRow {
            id: p.id,
            photographer: p.photographer.clone(),
            size: format_size(p.width, p.height),
            avg_color: p.avg_color.clone(),
            alt: p.alt.clone(),
            url: p.url.clone(),
        })
        .collect()
}

fn build_video_rows(videos: &[Video]) -> Vec<VideoRow> {
    videos
        .iter()
        .map(|v| VideoRow {
            id: v.id,
            author: v.user.name.clone(),
            size: format_size(v.width, v.height),
            duration: format_duration(v.duration),
            best_file: v.best_file().map(|f| f.link.clone()).unwrap_or_default(),
        })
        .collect()
}

fn build_collection_rows(collections: &[Collection]) -> Vec<CollectionRow> {
    collections
        .iter()
        .map(|c| CollectionRow {
            id: c.id.clone(),
            title: c.title.clone(),
            media: c.media_count,
            photos: c.photos_count,
            videos: c.videos_count,
            private: c.private,
        })
        .collect()
}

// Photos first, then videos: the split response no longer carries the
// interleaving order.
fn build_media_rows(photos: &[Photo], videos: &[Video]) -> Vec<MediaRow> {
    let photo_rows = photos.iter().map(|p| MediaRow {
        kind: "Photo",
        id: p.id,
        credit: p.photographer.clone(),
        size: format_size(p.width, p.height),
        url: p.url.clone(),
    });
    let video_rows = videos.iter().map(|v| MediaRow {
        kind: "Video",
        id: v.id,
        credit: v.user.name.clone(),
        size: format_size(v.width, v.height),
        url: v.url.clone(),
    });
    photo_rows.chain(video_rows).collect()
}

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

// Table, markdown and CSV print flattened rows; JSON prints the full records.

pub fn print_photos(photos: &[Photo], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&photos);
            Ok(())
        }
        _ => print_rows(build_photo_rows(photos), format),
    }
}

pub fn print_videos(videos: &[Video], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&videos);
            Ok(())
        }
        _ => print_rows(build_video_rows(videos), format),
    }
}

pub fn print_collections(collections: &[Collection], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&collections);
            Ok(())
        }
        _ => print_rows(build_collection_rows(collections), format),
    }
}

pub fn print_media(photos: &[Photo], videos: &[Video], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "photos": photos, "videos": videos }));
            Ok(())
        }
        _ => print_rows(build_media_rows(photos, videos), format),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_size(width: u32, height: u32) -> String {
    format!("{}x{}", width, height)
}

fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pexels_api::types::{CollectionPayload, PhotoPayload, VideoPayload};

    fn load_photos_fixture() -> Vec<Photo> {
        let json_str = include_str!("../../pexels_api/tests/fixtures/curated_photos.json");
        serde_json::from_str::<PhotoPayload>(json_str).unwrap().photos
    }

    fn load_video_fixture() -> Video {
        let json_str = include_str!("../../pexels_api/tests/fixtures/video.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn load_videos_fixture() -> Vec<Video> {
        let json_str = include_str!("../../pexels_api/tests/fixtures/popular_videos.json");
        serde_json::from_str::<VideoPayload>(json_str).unwrap().videos
    }

    fn load_collections_fixture() -> Vec<Collection> {
        let json_str = include_str!("../../pexels_api/tests/fixtures/collections.json");
        serde_json::from_str::<CollectionPayload>(json_str)
            .unwrap()
            .collections
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(22), "0:22");
        assert_eq!(format_duration(125), "2:05");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(3024, 3024), "3024x3024");
    }

    #[test]
    fn test_build_photo_rows_mapping() {
        let rows = build_photo_rows(&load_photos_fixture());
        assert_eq!(rows.len(), 2);

        let row = &rows[1];
        assert_eq!(row.id, 2014422);
        assert_eq!(row.photographer, "Joey Farina");
        assert_eq!(row.size, "3024x3024");
        assert_eq!(row.avg_color, "#978E82");
    }

    #[test]
    fn test_build_video_rows_picks_widest_file() {
        let video = load_video_fixture();
        let rows = build_video_rows(std::slice::from_ref(&video));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].author, "Joey Farina");
        assert_eq!(rows[0].duration, "0:22");
        assert_eq!(rows[0].best_file, video.video_files[0].link);
    }

    #[test]
    fn test_build_video_rows_without_files() {
        let video = Video {
            id: 7,
            duration: 61,
            ..Default::default()
        };
        let rows = build_video_rows(&[video]);
        assert_eq!(rows[0].best_file, "");
        assert_eq!(rows[0].duration, "1:01");
    }

    #[test]
    fn test_build_collection_rows_mapping() {
        let rows = build_collection_rows(&load_collections_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Cool Cats");
        assert_eq!(rows[0].media, 6);
        assert!(rows[1].private);
    }

    #[test]
    fn test_build_media_rows_lists_photos_then_videos() {
        let rows = build_media_rows(&load_photos_fixture(), &load_videos_fixture());
        let kinds: Vec<&str> = rows.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec!["Photo", "Photo", "Video", "Video"]);
        assert_eq!(rows[2].id, 2953633);
    }

    #[test]
    fn test_empty_rows() {
        assert!(build_photo_rows(&[]).is_empty());
        assert!(build_media_rows(&[], &[]).is_empty());
    }

    #[test]
    fn test_csv_headers_use_renamed_columns() {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in build_collection_rows(&load_collections_fixture()) {
            wtr.serialize(row).unwrap();
        }
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let header = data.lines().next().unwrap();
        assert_eq!(header, "ID,Title,Media,Photos,Videos,Private");
    }

    #[test]
    fn test_markdown_table_has_pipe_header() {
        let mut table = Table::new(build_photo_rows(&load_photos_fixture()));
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.starts_with("| ID "));
        assert!(rendered.contains("Joey Farina"));
    }
}
