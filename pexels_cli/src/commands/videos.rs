use anyhow::Result;
use clap::Args;
use pexels_api::types::{Locale, Orientation, Size};
use pexels_api::{Client, PopularVideoParams, Search, VideoSearchParams};

use super::{check_status, paged, print_quota, print_summary};
use crate::output::{print_videos, OutputFormat};

#[derive(Args)]
pub struct VideosArgs {
    /// Get a single video by ID
    #[arg(long, conflicts_with = "query")]
    pub id: Option<u64>,

    /// Search text. Without it popular videos are listed
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

    /// Minimum width in pixels (popular only)
    #[arg(long, conflicts_with = "query")]
    pub min_width: Option<u32>,

    /// Minimum height in pixels (popular only)
    #[arg(long, conflicts_with = "query")]
    pub min_height: Option<u32>,

    /// Minimum duration in seconds (popular only)
    #[arg(long, conflicts_with = "query")]
    pub min_duration: Option<u32>,

    /// Maximum duration in seconds (popular only)
    #[arg(long, conflicts_with = "query")]
    pub max_duration: Option<u32>,

    /// Page number
    #[arg(long)]
    pub page: Option<u16>,

    /// Results per page (max 80)
    #[arg(long)]
    pub per_page: Option<u8>,
}

pub async fn run(args: &VideosArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = args.id {
        let resp = client.get_video(id).await?;
        check_status(&resp.common)?;
        print_quota(&resp.common);
        return print_videos(&[resp.video], format);
    }

    let resp = match &args.query {
        Some(text) => {
            let mut params = VideoSearchParams::new(text);
            if let Some(locale) = &args.locale {
                params = params.with_locale(locale.parse::<Locale>()?);
            }
            if let Some(orientation) = &args.orientation {
                params = params.with_orientation(orientation.parse::<Orientation>()?);
            }
            if let Some(size) = &args.size {
                params = params.with_size(size.parse::<Size>()?);
            }
            client.search_videos(&paged(params, args.page, args.per_page)).await?
        }
        None => {
            let mut params = PopularVideoParams::default();
            if let Some(width) = args.min_width {
                params = params.with_min_width(width);
            }
            if let Some(height) = args.min_height {
                params = params.with_min_height(height);
            }
            if let Some(duration) = args.min_duration {
                params = params.with_min_duration(duration);
            }
            if let Some(duration) = args.max_duration {
                params = params.with_max_duration(duration);
            }
            client.get_popular_videos(&paged(params, args.page, args.per_page)).await?
        }
    };
    check_status(&resp.common)?;

    print_summary(&resp.common, &resp.payload.pagination, "videos");
    print_videos(&resp.payload.videos, format)
}
