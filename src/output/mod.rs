//! Output module for the rendered gallery and console reports
//!
//! This module handles:
//! - Rendering submissions into the static gallery page
//! - Writing the gallery to disk
//! - Formatting the per-submission console report and scrape statistics

mod html;
mod report;
pub mod stats;

pub use html::{render_gallery, write_gallery, RenderOptions};
pub use report::format_report;
pub use stats::{print_statistics, GalleryStats};

use crate::config::Config;

impl RenderOptions {
    /// Builds render options from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_title: config.output.page_title.clone(),
            board_name: config.site.board_name.clone(),
            board_url: config.site.listing_url(),
        }
    }
}
