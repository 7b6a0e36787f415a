use anyhow::Result;
use clap::Args;
use pexels_api::types::MediaFilter;
use pexels_api::{Client, CollectionMediaParams, CollectionParams};

use super::{check_status, paged, print_summary};
use crate::output::{print_collections, print_media, OutputFormat};

#[derive(Args)]
pub struct CollectionsArgs {
    /// List the media of one collection
    #[arg(long, conflicts_with = "featured")]
    pub id: Option<String>,

    /// Restrict collection media to photos or videos
    #[arg(long = "type", requires = "id")]
    pub media_type: Option<String>,

    /// List featured collections instead of your own
    #[arg(long)]
    pub featured: bool,

    /// Page number
    #[arg(long)]
    pub page: Option<u16>,

    /// Results per page (max 80)
    #[arg(long)]
    pub per_page: Option<u8>,
}

pub async fn run(args: &CollectionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let mut params = paged(CollectionMediaParams::new(id), args.page, args.per_page);
        if let Some(media_type) = &args.media_type {
            params = params.with_media_type(media_type.parse::<MediaFilter>()?);
        }
        let resp = client.get_collection(&params).await?;
        check_status(&resp.common)?;

        print_summary(&resp.common, &resp.pagination, "media");
        return print_media(&resp.photos, &resp.videos, format);
    }

    let params = paged(CollectionParams::default(), args.page, args.per_page);
    let resp = if args.featured {
        client.get_featured_collections(&params).await?
    } else {
        client.get_collections(&params).await?
    };
    check_status(&resp.common)?;

    print_summary(&resp.common, &resp.payload.pagination, "collections");
    print_collections(&resp.payload.collections, format)
}
