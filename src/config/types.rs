use serde::Deserialize;

/// Main configuration structure for gotdrawn
///
/// Every section falls back to its default, so an empty file (or no file at
/// all) scrapes the stock board and writes the stock gallery path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "image-host")]
    pub image_host: ImageHostConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The board being scraped
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host of the board site, without a trailing slash
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the listing page, relative to the origin
    #[serde(default = "default_board_path", rename = "board-path")]
    pub board_path: String,

    /// Display name of the board, shown in the gallery header
    #[serde(default = "default_board_name", rename = "board-name")]
    pub board_name: String,

    /// Substrings that mark a link as self-referential
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

/// Image host URL shapes used by the link normalizer
#[derive(Debug, Clone, Deserialize)]
pub struct ImageHostConfig {
    /// Host that serves bare image bytes at a predictable path
    #[serde(default = "default_direct_host", rename = "direct-host")]
    pub direct_host: String,

    /// Domain whose pages are albums that need a second fetch
    #[serde(default = "default_gallery_domain", rename = "gallery-domain")]
    pub gallery_domain: String,

    /// Recognized image extensions, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extension appended to extensionless direct-host links
    #[serde(default = "default_fallback_extension", rename = "fallback-extension")]
    pub fallback_extension: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_user_agent", rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (seconds)
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(default = "default_connect_timeout_secs", rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the rendered gallery file
    #[serde(default = "default_gallery_path", rename = "gallery-path")]
    pub gallery_path: String,

    /// Contents of the gallery's <title> element
    #[serde(default = "default_page_title", rename = "page-title")]
    pub page_title: String,
}

impl SiteConfig {
    /// Absolute URL of the listing page
    pub fn listing_url(&self) -> String {
        format!("{}{}", self.origin, self.board_path)
    }

    /// Profile link for a handle on this site
    pub fn profile_url(&self, handle: &str) -> String {
        format!("{}/user/{}", self.origin, handle)
    }

    /// Exclusion substrings, including a link back into the board itself
    pub fn exclusions(&self) -> Vec<String> {
        let mut exclusions = self.exclude.clone();
        let board = format!("{}/", self.board_path.trim_end_matches('/'));
        if !exclusions.contains(&board) {
            exclusions.push(board);
        }
        exclusions
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            board_path: default_board_path(),
            board_name: default_board_name(),
            exclude: default_exclude(),
        }
    }
}

impl Default for ImageHostConfig {
    fn default() -> Self {
        Self {
            direct_host: default_direct_host(),
            gallery_domain: default_gallery_domain(),
            extensions: default_extensions(),
            fallback_extension: default_fallback_extension(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            gallery_path: default_gallery_path(),
            page_title: default_page_title(),
        }
    }
}

fn default_origin() -> String {
    "http://www.reddit.com".to_string()
}

fn default_board_path() -> String {
    "/r/redditgetsdrawn".to_string()
}

fn default_board_name() -> String {
    "RedditGetsDrawn".to_string()
}

fn default_exclude() -> Vec<String> {
    vec!["/domain/".to_string()]
}

fn default_direct_host() -> String {
    "i.imgur.com".to_string()
}

fn default_gallery_domain() -> String {
    "imgur.com".to_string()
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_fallback_extension() -> String {
    "jpg".to_string()
}

fn default_user_agent() -> String {
    format!("gotdrawn/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_gallery_path() -> String {
    "RGD_HTML/RGD_Gallery.html".to_string()
}

fn default_page_title() -> String {
    "gotdrawn".to_string()
}
