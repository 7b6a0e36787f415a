//! CLI subcommand implementations.

use pexels_api::types::Pagination;
use pexels_api::{Query, ResponseCommon};

pub mod collections;
pub mod photos;
pub mod videos;

/// Prints the page position and remaining request quota to stderr.
pub fn print_summary(common: &ResponseCommon, pagination: &Pagination, noun: &str) {
    let per_page = u32::from(pagination.per_page.max(1));
    let total_pages = pagination.total_results.div_ceil(per_page);
    eprintln!(
        "Page {}/{} ({} total {})",
        pagination.page, total_pages, pagination.total_results, noun
    );
    print_quota(common);
}

pub fn print_quota(common: &ResponseCommon) {
    eprintln!(
        "{} of {} requests remaining",
        common.rate_limit_remaining(),
        common.rate_limit()
    );
}

/// Fails on a non-2xx status, reporting it the way the API did.
pub fn check_status(common: &ResponseCommon) -> anyhow::Result<()> {
    if (200..300).contains(&common.status_code) {
        Ok(())
    } else {
        anyhow::bail!("Pexels API returned {}", common.status)
    }
}

/// Applies the paging flags shared by every listing subcommand.
pub fn paged<Q: Query>(mut params: Q, page: Option<u16>, per_page: Option<u8>) -> Q {
    if let Some(page) = page {
        params = params.with_page(page);
    }
    if let Some(per_page) = per_page {
        params = params.with_per_page(per_page);
    }
    params
}
