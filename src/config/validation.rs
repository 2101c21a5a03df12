use crate::config::types::{Config, FetchConfig, ImageHostConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_image_host_config(&config.image_host)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the board origin and listing path
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let origin = Url::parse(&config.origin)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid origin '{}': {}", config.origin, e)))?;

    if origin.scheme() != "http" && origin.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Origin '{}' must use HTTP or HTTPS",
            config.origin
        )));
    }

    if origin.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Origin '{}' has no host",
            config.origin
        )));
    }

    if config.origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "origin must not end with '/', got '{}'",
            config.origin
        )));
    }

    if !config.board_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "board_path must start with '/', got '{}'",
            config.board_path
        )));
    }

    if config.board_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "board_name cannot be empty".to_string(),
        ));
    }

    if config.exclude.iter().any(|pattern| pattern.is_empty()) {
        return Err(ConfigError::Validation(
            "exclude entries cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates image host shapes
fn validate_image_host_config(config: &ImageHostConfig) -> Result<(), ConfigError> {
    validate_domain_string(&config.direct_host)?;
    validate_domain_string(&config.gallery_domain)?;

    if config.extensions.is_empty() {
        return Err(ConfigError::Validation(
            "extensions must list at least one image extension".to_string(),
        ));
    }

    for ext in config
        .extensions
        .iter()
        .chain(std::iter::once(&config.fallback_extension))
    {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "image extensions must be non-empty and have no leading dot, got '{}'",
                ext
            )));
        }
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.gallery_path.is_empty() {
        return Err(ConfigError::Validation(
            "gallery_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates a bare domain string
fn validate_domain_string(domain: &str) -> Result<(), ConfigError> {
    if domain.is_empty() {
        return Err(ConfigError::Validation(
            "Domain cannot be empty".to_string(),
        ));
    }

    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' contains invalid characters",
            domain
        )));
    }

    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    if domain.contains("..") {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Domain '{}' must contain at least one dot (e.g., 'imgur.com')",
            domain
        )));
    }

    Ok(())
}
