use anyhow::Result;
use clap::Args;
use pexels_api::types::{Color, Locale, Orientation, Size};
use pexels_api::{Client, CuratedPhotosParams, PhotoSearchParams, Search};

use super::{check_status, paged, print_quota, print_summary};
use crate::output::{print_photos, OutputFormat};

#[derive(Args)]
pub struct PhotosArgs {
    /// Get a single photo by ID
    #[arg(long, conflicts_with = "query")]
    pub id: Option<u64>,

    /// Search text. Without it the curated feed is listed
    #[arg(long)]
    pub query: Option<String>,

    /// Search locale (e.g. en-US, pt-BR, ja-JP)
    #[arg(long, requires = "query")]
    pub locale: Option<String>,

    /// Orientation: landscape, portrait, square
    #[arg(long, requires = "query")]
    pub orientation: Option<String>,

    /// Minimum size: large, medium, small
    #[arg(long, requires = "query")]
    pub size: Option<String>,

    /// Dominant colour (e.g. red, blue, turquoise)
    #[arg(long, requires = "query")]
    pub color: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u16>,

    /// Results per page (max 80)
    #[arg(long)]
    pub per_page: Option<u8>,
}

pub async fn run(args: &PhotosArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let resp = client.get_photo(id).await?;
        check_status(&resp.common)?;
        print_quota(&resp.common);
        return print_photos(&[resp.photo], format);
    }

    let resp = match &args.query {
        Some(text) => {
            let mut params = PhotoSearchParams::new(text);
            if let Some(locale) = &args.locale {
                params = params.with_locale(locale.parse::<Locale>()?);
            }
            if let Some(orientation) = &args.orientation {
                params = params.with_orientation(orientation.parse::<Orientation>()?);
            }
            if let Some(size) = &args.size {
                params = params.with_size(size.parse::<Size>()?);
            }
            if let Some(color) = &args.color {
                params = params.with_color(color.parse::<Color>()?);
            }
            client.search_photos(&paged(params, args.page, args.per_page)).await?
        }
        None => {
            let params = paged(CuratedPhotosParams::default(), args.page, args.per_page);
            client.get_curated_photos(&params).await?
        }
    };
    check_status(&resp.common)?;

    print_summary(&resp.common, &resp.payload.pagination, "photos");
    print_photos(&resp.payload.photos, format)
}
