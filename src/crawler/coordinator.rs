//! Scrape coordinator - main pipeline orchestration
//!
//! This module drives one scrape from start to finish:
//! - Fetching and splitting the listing page
//! - Resolving each submission's reference image
//! - Fetching each discussion page and building its artworks
//!
//! Every fetch is awaited before the next one starts, in document order.
//! Only the listing fetch can fail the run; discussion and gallery failures
//! degrade the affected fields.

use crate::config::Config;
use crate::crawler::fetcher::PageSource;
use crate::crawler::parser::{parse_discussion, parse_listing};
use crate::crawler::resolver::LinkResolver;
use crate::entities::{Artwork, Submission, SubmissionDraft};
use crate::url::LinkContext;
use crate::GalleryError;

/// Main scrape pipeline
pub struct Pipeline<S> {
    config: Config,
    ctx: LinkContext,
    source: S,
}

impl<S: PageSource> Pipeline<S> {
    /// Creates a pipeline reading pages from `source`
    pub fn new(config: Config, source: S) -> Self {
        let ctx = LinkContext::from_config(&config);
        Self {
            config,
            ctx,
            source,
        }
    }

    /// Returns the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    fn resolver(&self) -> LinkResolver<'_, S> {
        LinkResolver::new(&self.source, &self.ctx)
    }

    /// Runs the full scrape
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Submission>)` - One submission per listing entry, in listing order
    /// * `Err(GalleryError)` - The listing page could not be fetched
    pub async fn run(&self) -> Result<Vec<Submission>, GalleryError> {
        let listing_url = self.config.site.listing_url();
        tracing::info!("Fetching listing page {}", listing_url);

        let body = self.source.fetch_page(&listing_url).await?;
        let drafts = parse_listing(&body, &self.config.site);
        tracing::info!("Found {} submissions", drafts.len());

        let mut submissions = Vec::with_capacity(drafts.len());
        for (index, draft) in drafts.into_iter().enumerate() {
            let submission = self.build_submission(draft).await;
            tracing::debug!(
                "Submission {} ({}): {} artworks",
                index,
                submission.id,
                submission.artworks.len()
            );
            submissions.push(submission);
        }

        Ok(submissions)
    }

    /// Completes one listing entry
    pub async fn build_submission(&self, draft: SubmissionDraft) -> Submission {
        let reference = self
            .resolver()
            .first_resolved(&draft.reference_candidates)
            .await;

        if reference.is_none() {
            tracing::debug!("No usable reference image for '{}'", draft.title);
        }

        let artworks = match &draft.discussion_url {
            Some(url) => self.collect_artworks(url).await,
            None => Vec::new(),
        };

        draft.into_submission(reference, artworks)
    }

    /// Fetches a discussion page and builds one artwork per first-level reply
    ///
    /// A failed fetch yields no artworks.
    pub async fn collect_artworks(&self, discussion_url: &str) -> Vec<Artwork> {
        let body = match self.source.fetch_page(discussion_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Discussion fetch failed: {}", e);
                return Vec::new();
            }
        };

        let drafts = parse_discussion(&body, &self.config.site);
        let resolver = self.resolver();

        let mut artworks = Vec::with_capacity(drafts.len());
        for draft in drafts {
            artworks.push(draft.resolve(&resolver).await);
        }
        artworks
    }
}
