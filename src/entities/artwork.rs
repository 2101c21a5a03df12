use crate::config::SiteConfig;
use crate::crawler::{LinkResolver, PageSource};
use crate::entities::fields::{first_attr, first_text, first_timestamp};
use crate::entities::submitter::{extract_submitter, Submitter};
use chrono::{DateTime, FixedOffset};
use scraper::ElementRef;

/// A first-level reply carrying a drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Direct image link; absent when the reply has no usable link
    pub source_image_url: Option<String>,
    pub submitter: Submitter,
    pub submitted_at: Option<DateTime<FixedOffset>>,
    /// Score from the "likes" widget; absent when that widget is missing
    pub score: Option<i64>,
}

/// Fields read from a reply fragment before any link is resolved
///
/// Drafts own their data, so the parsed document can be dropped before
/// the gallery fetches start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkDraft {
    /// Raw href of the first link in the reply body
    pub href: Option<String>,
    pub submitter: Submitter,
    pub submitted_at: Option<DateTime<FixedOffset>>,
    pub score: Option<i64>,
}

impl ArtworkDraft {
    /// Reads every field of a reply fragment
    pub fn from_fragment(fragment: ElementRef<'_>, site: &SiteConfig) -> Self {
        Self {
            href: first_attr(fragment, ".md p a", "href"),
            submitter: extract_submitter(fragment, site),
            submitted_at: first_timestamp(fragment),
            score: extract_score(fragment),
        }
    }

    /// Resolves the body link into a direct image URL
    ///
    /// Unclassifiable links and failed gallery lookups leave the image absent.
    pub async fn resolve<S: PageSource>(self, resolver: &LinkResolver<'_, S>) -> Artwork {
        let source_image_url = match &self.href {
            Some(href) => resolver.resolve_href(href).await,
            None => None,
        };

        Artwork {
            source_image_url,
            submitter: self.submitter,
            submitted_at: self.submitted_at,
            score: self.score,
        }
    }
}

/// Reads the score shown by the "likes" variant of the score widget
///
/// Replies render several score variants at once (dislikes, unvoted, likes);
/// only the likes one counts. The first whitespace-delimited token must parse
/// as an integer, otherwise the score is absent.
pub fn extract_score(fragment: ElementRef<'_>) -> Option<i64> {
    let text = first_text(fragment, ".score.likes")?;
    text.split_whitespace().next()?.parse().ok()
}
