//! URL handling module for gotdrawn
//!
//! This module classifies raw hrefs found in listing and comment markup into
//! direct image links, gallery pages that need a second fetch, or links that
//! cannot be used at all.

mod domain;
mod matcher;
mod normalize;

use crate::config::Config;

// Re-export main functions
pub use domain::{extract_host, resolve_href};
pub use matcher::matches_wildcard;
pub use normalize::{has_image_extension, normalize_link};

/// Outcome of classifying a raw href
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedLink {
    /// A URL that serves image bytes directly
    Direct(String),
    /// An album or gallery page that must be fetched to find the image
    GalleryIndirect(String),
    /// Excluded or unrecognized link shape
    Unclassifiable,
}

/// Everything the normalizer needs to know about the site and image host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    /// Substrings that disqualify an href outright
    pub exclude: Vec<String>,
    /// Host serving bare image bytes
    pub direct_host: String,
    /// Domain whose pages are galleries
    pub gallery_domain: String,
    /// Recognized image extensions, without the leading dot
    pub extensions: Vec<String>,
    /// Extension appended to extensionless direct-host links
    pub fallback_extension: String,
}

impl LinkContext {
    /// Builds the normalizer context from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            exclude: config.site.exclusions(),
            direct_host: config.image_host.direct_host.to_lowercase(),
            gallery_domain: config.image_host.gallery_domain.to_lowercase(),
            extensions: config.image_host.extensions.clone(),
            fallback_extension: config.image_host.fallback_extension.clone(),
        }
    }
}

impl Default for LinkContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
