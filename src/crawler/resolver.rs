//! Link resolution: normalization plus the gallery second fetch

use crate::crawler::fetcher::PageSource;
use crate::url::{normalize_link, resolve_href, LinkContext, NormalizedLink};
use crate::FetchError;
use scraper::{Html, Selector};

/// Outcome of looking up the image behind a gallery page
#[derive(Debug)]
pub enum GalleryResolution {
    /// The page advertised its image
    Resolved(String),
    /// The page loaded but has no `image_src` link element
    NoImageElement,
    /// The page could not be fetched
    FetchFailed(FetchError),
}

impl GalleryResolution {
    /// Collapses the outcome to the image URL, if any
    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Resolved(url) => Some(url),
            Self::NoImageElement | Self::FetchFailed(_) => None,
        }
    }
}

/// Finds the `<link rel="image_src">` target in a gallery page
///
/// Relative hrefs are resolved against `page_url`.
pub fn parse_image_src(html: &str, page_url: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link").ok()?;

    let href = document
        .select(&selector)
        .find(|link| link.value().attr("rel") == Some("image_src"))?
        .value()
        .attr("href")?
        .trim();

    if href.is_empty() {
        return None;
    }

    Some(resolve_href(page_url, href).unwrap_or_else(|| href.to_string()))
}

/// Turns raw hrefs into direct image URLs, fetching gallery pages as needed
pub struct LinkResolver<'a, S> {
    source: &'a S,
    ctx: &'a LinkContext,
}

impl<'a, S: PageSource> LinkResolver<'a, S> {
    pub fn new(source: &'a S, ctx: &'a LinkContext) -> Self {
        Self { source, ctx }
    }

    /// Fetches a gallery page and reads its canonical image
    pub async fn resolve_gallery(&self, gallery_url: &str) -> GalleryResolution {
        match self.source.fetch_page(gallery_url).await {
            Ok(body) => match parse_image_src(&body, gallery_url) {
                Some(url) => GalleryResolution::Resolved(url),
                None => GalleryResolution::NoImageElement,
            },
            Err(e) => GalleryResolution::FetchFailed(e),
        }
    }

    /// Resolves one href to a direct image URL
    ///
    /// Gallery failures are logged and collapse to `None`.
    pub async fn resolve_href(&self, href: &str) -> Option<String> {
        match normalize_link(href, self.ctx) {
            NormalizedLink::Direct(url) => Some(url),
            NormalizedLink::GalleryIndirect(url) => match self.resolve_gallery(&url).await {
                GalleryResolution::Resolved(image) => {
                    tracing::debug!("Resolved gallery {} -> {}", url, image);
                    Some(image)
                }
                GalleryResolution::NoImageElement => {
                    tracing::warn!("Gallery {} has no image_src link", url);
                    None
                }
                GalleryResolution::FetchFailed(e) => {
                    tracing::warn!("Gallery fetch failed: {}", e);
                    None
                }
            },
            NormalizedLink::Unclassifiable => {
                tracing::trace!("Skipping unclassifiable link {}", href);
                None
            }
        }
    }

    /// Returns the first href that resolves, trying them in order
    ///
    /// Later candidates are not fetched once one succeeds.
    pub async fn first_resolved(&self, hrefs: &[String]) -> Option<String> {
        for href in hrefs {
            if let Some(url) = self.resolve_href(href).await {
                return Some(url);
            }
        }
        None
    }
}
