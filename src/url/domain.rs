use std::borrow::Cow;
use url::Url;

/// Gives protocol-relative hrefs (`//host/path`) an explicit `http:` scheme
///
/// Any other href is returned unchanged.
pub fn with_scheme(href: &str) -> Cow<'_, str> {
    if href.starts_with("//") {
        Cow::Owned(format!("http:{}", href))
    } else {
        Cow::Borrowed(href)
    }
}

/// Extracts the lowercase host from a raw href
///
/// Protocol-relative hrefs (`//host/path`) are read as `http:`. Relative paths
/// and unparseable strings have no host.
///
/// # Examples
///
/// ```
/// use gotdrawn::url::extract_host;
///
/// assert_eq!(extract_host("http://I.Imgur.com/abc"), Some("i.imgur.com".to_string()));
/// assert_eq!(extract_host("//imgur.com/abc"), Some("imgur.com".to_string()));
/// assert_eq!(extract_host("/r/redditgetsdrawn/"), None);
/// ```
pub fn extract_host(href: &str) -> Option<String> {
    Url::parse(&with_scheme(href.trim()))
        .ok()
        .and_then(|url| url.host_str().map(|h| h.to_lowercase()))
}

/// Resolves a possibly relative href against a base URL
///
/// Returns `None` when the result is not an HTTP(S) URL.
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    let base = Url::parse(base).ok()?;
    let resolved = base.join(href.trim()).ok()?;

    if resolved.scheme() == "http" || resolved.scheme() == "https" {
        Some(resolved.to_string())
    } else {
        None
    }
}
