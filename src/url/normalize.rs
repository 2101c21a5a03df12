use crate::url::domain::{extract_host, with_scheme};
use crate::url::matcher::matches_wildcard;
use crate::url::{LinkContext, NormalizedLink};

/// Classifies a raw href into a usable image link
///
/// # Rules (first match wins)
///
/// 1. The href contains an exclusion substring → `Unclassifiable`
/// 2. Host is the direct-image host → `Direct`, with the fallback extension
///    appended when the path carries no recognized image extension
/// 3. Host is the gallery domain (or one of its subdomains) → `GalleryIndirect`
/// 4. Any other href ending in a recognized image extension → `Direct`
/// 5. Otherwise → `Unclassifiable`
///
/// Protocol-relative hrefs come back with an `http:` scheme so every
/// `Direct` and `GalleryIndirect` URL can be fetched as is. The input is never
/// modified; every outcome owns a fresh string.
///
/// # Examples
///
/// ```
/// use gotdrawn::url::{normalize_link, LinkContext, NormalizedLink};
///
/// let ctx = LinkContext::default();
/// assert_eq!(
///     normalize_link("http://i.imgur.com/abc123", &ctx),
///     NormalizedLink::Direct("http://i.imgur.com/abc123.jpg".to_string())
/// );
/// assert_eq!(
///     normalize_link("http://imgur.com/LVJy5YG", &ctx),
///     NormalizedLink::GalleryIndirect("http://imgur.com/LVJy5YG".to_string())
/// );
/// ```
pub fn normalize_link(raw_href: &str, ctx: &LinkContext) -> NormalizedLink {
    let href = raw_href.trim();

    if href.is_empty() || ctx.exclude.iter().any(|pattern| href.contains(pattern.as_str())) {
        return NormalizedLink::Unclassifiable;
    }

    let href = with_scheme(href);
    let href = href.as_ref();
    let host = extract_host(href);

    if host.as_deref() == Some(ctx.direct_host.as_str()) {
        return if has_image_extension(href, &ctx.extensions) {
            NormalizedLink::Direct(href.to_string())
        } else {
            NormalizedLink::Direct(with_extension(href, &ctx.fallback_extension))
        };
    }

    if let Some(host) = &host {
        if matches_wildcard(&format!("*.{}", ctx.gallery_domain), host) {
            return NormalizedLink::GalleryIndirect(href.to_string());
        }
    }

    if has_image_extension(href, &ctx.extensions) {
        return NormalizedLink::Direct(href.to_string());
    }

    NormalizedLink::Unclassifiable
}

/// Returns true if the href's path ends in one of the given extensions
pub fn has_image_extension(href: &str, extensions: &[String]) -> bool {
    let (path, _) = split_suffix(href);
    let path = path.to_lowercase();

    extensions
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext.to_lowercase())))
}

/// Builds a new href with `.{ext}` inserted before any query or fragment
fn with_extension(href: &str, ext: &str) -> String {
    let (path, suffix) = split_suffix(href);
    format!("{}.{}{}", path, ext, suffix)
}

/// Splits an href into the part before `?`/`#` and the remainder
fn split_suffix(href: &str) -> (&str, &str) {
    match href.find(['?', '#']) {
        Some(idx) => href.split_at(idx),
        None => (href, ""),
    }
}
