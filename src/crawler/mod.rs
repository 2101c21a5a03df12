//! Crawler module for page fetching and entity assembly
//!
//! This module contains the scraping logic, including:
//! - HTTP fetching
//! - Listing and discussion page parsing
//! - Link resolution through gallery pages
//! - Overall pipeline coordination

mod coordinator;
mod fetcher;
mod parser;
mod resolver;
#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::Pipeline;
pub use fetcher::{build_http_client, HttpFetcher, PageSource};
pub use parser::{first_level_replies, parse_discussion, parse_listing};
pub use resolver::{parse_image_src, GalleryResolution, LinkResolver};

use crate::config::Config;
use crate::entities::Submission;
use crate::GalleryError;

/// Runs a complete scrape over HTTP
///
/// This is the main entry point for building a gallery. It will:
/// 1. Build the HTTP client
/// 2. Fetch the listing page
/// 3. Resolve every submission's reference image
/// 4. Fetch every discussion page and build its artworks
///
/// # Returns
///
/// * `Ok(Vec<Submission>)` - Scrape completed
/// * `Err(GalleryError)` - The client could not be built or the listing fetch failed
pub async fn scrape(config: Config) -> Result<Vec<Submission>, GalleryError> {
    let fetcher = HttpFetcher::new(&config.fetch)?;
    Pipeline::new(config, fetcher).run().await
}
