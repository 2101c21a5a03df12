//! Configuration module for gotdrawn
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; the defaults scrape the stock board.
//!
//! # Example
//!
//! ```no_run
//! use gotdrawn::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("gotdrawn.toml")).unwrap();
//! println!("Gallery will be written to: {}", config.output.gallery_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, ImageHostConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
