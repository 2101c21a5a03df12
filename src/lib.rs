//! gotdrawn: a viewer-friendly gallery for drawing-request boards
//!
//! This crate scrapes a board's listing page, follows each submission to its
//! discussion page, collects the artwork posted as first-level replies and
//! renders everything as a single static HTML gallery.

pub mod config;
pub mod crawler;
pub mod entities;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while fetching a page over HTTP
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },
}

/// Result type alias for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{first_level_replies, GalleryResolution, HttpFetcher, PageSource, Pipeline};
pub use entities::{Artwork, Submission, Submitter};
pub use output::{render_gallery, write_gallery};
pub use url::{normalize_link, LinkContext, NormalizedLink};
