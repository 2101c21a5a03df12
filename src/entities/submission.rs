use crate::config::SiteConfig;
use crate::entities::artwork::Artwork;
use crate::entities::fields::{all_attrs, first_attr, first_text, first_timestamp};
use crate::entities::submitter::{extract_submitter, Submitter};
use crate::url::resolve_href;
use chrono::{DateTime, FixedOffset};
use scraper::ElementRef;

/// One listing entry: a reference photo plus the drawings it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Thread id taken from the discussion URL
    pub id: String,
    pub title: String,
    /// Direct image link to the reference photo, never a gallery page
    pub reference_image_url: Option<String>,
    pub submitter: Submitter,
    pub submitted_at: Option<DateTime<FixedOffset>>,
    pub discussion_url: Option<String>,
    pub artworks: Vec<Artwork>,
}

impl Submission {
    /// Returns true if the submission has something to show in the gallery
    pub fn is_renderable(&self) -> bool {
        self.reference_image_url.is_some() && !self.artworks.is_empty()
    }

    /// Artworks whose image link resolved, in reply order
    pub fn resolved_artworks(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks
            .iter()
            .filter(|artwork| artwork.source_image_url.is_some())
    }
}

/// Fields read from a listing entry before any page is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub title: String,
    /// Hrefs of every title anchor, in document order
    pub reference_candidates: Vec<String>,
    pub submitter: Submitter,
    pub submitted_at: Option<DateTime<FixedOffset>>,
    /// Absolute discussion link
    pub discussion_url: Option<String>,
}

impl SubmissionDraft {
    /// Reads every field of a listing entry
    ///
    /// A relative comments link is resolved against the site origin.
    pub fn from_fragment(fragment: ElementRef<'_>, site: &SiteConfig) -> Self {
        let discussion_url = first_attr(fragment, "a.comments", "href")
            .and_then(|href| resolve_href(&site.origin, &href));

        Self {
            title: first_text(fragment, "p.title a.title").unwrap_or_default(),
            reference_candidates: all_attrs(fragment, ".title a", "href"),
            submitter: extract_submitter(fragment, site),
            submitted_at: first_timestamp(fragment),
            discussion_url,
        }
    }

    /// Completes the submission with its resolved reference image and artworks
    pub fn into_submission(
        self,
        reference_image_url: Option<String>,
        artworks: Vec<Artwork>,
    ) -> Submission {
        let id = self
            .discussion_url
            .as_deref()
            .map(discussion_id)
            .unwrap_or_default();

        Submission {
            id,
            title: self.title,
            reference_image_url,
            submitter: self.submitter,
            submitted_at: self.submitted_at,
            discussion_url: self.discussion_url,
            artworks,
        }
    }
}

/// Derives a thread id from a discussion URL
///
/// `.../comments/1zysx2/some_slug/` gives `1zysx2`. URLs without a
/// `comments` segment are used whole.
pub fn discussion_id(discussion_url: &str) -> String {
    let mut segments = discussion_url.split('/').filter(|s| !s.is_empty());

    while let Some(segment) = segments.next() {
        if segment == "comments" {
            if let Some(id) = segments.next() {
                return id.to_string();
            }
        }
    }

    discussion_url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const ENTRY: &str = r#"
<div class="entry unvoted">
  <p class="title"><a class="title " href="http://imgur.com/LVJy5YG" tabindex="1">Please draw my grandparents! It was just their 50th anniversary!</a>&#32;
    <span class="domain">(<a href="/domain/imgur.com/">imgur.com</a>)</span>
  </p>
  <p class="tagline">submitted&#32;
    <time title="Sun Mar 9 14:18:03 2014 UTC" datetime="2014-03-09T14:18:03+00:00">16 hours</time>&#32;ago&#32;by&#32;<a href="http://www.reddit.com/user/jgordon02" class="author id-t2_4ja0p">jgordon02</a>
  </p>
  <ul class="flat-list buttons">
    <li class="first"><a class="comments" href="http://www.reddit.com/r/redditgetsdrawn/comments/1zysx2/please_draw_my_grandparents_it_was_just_their/" target="_parent">143 comments</a></li>
  </ul>
</div>"#;

    fn draft(html: &str) -> SubmissionDraft {
        let document = Html::parse_fragment(html);
        SubmissionDraft::from_fragment(document.root_element(), &SiteConfig::default())
    }

    #[test]
    fn test_draft_reads_listing_entry() {
        let draft = draft(ENTRY);

        assert_eq!(
            draft.title,
            "Please draw my grandparents! It was just their 50th anniversary!"
        );
        assert_eq!(
            draft.reference_candidates,
            vec!["http://imgur.com/LVJy5YG", "/domain/imgur.com/"]
        );
        assert_eq!(draft.submitter.handle, "jgordon02");
        assert_eq!(
            draft.submitted_at.map(|ts| ts.to_rfc3339()),
            Some("2014-03-09T14:18:03+00:00".to_string())
        );
        assert_eq!(
            draft.discussion_url.as_deref(),
            Some("http://www.reddit.com/r/redditgetsdrawn/comments/1zysx2/please_draw_my_grandparents_it_was_just_their/")
        );
    }

    #[test]
    fn test_relative_comments_link_resolved() {
        let draft = draft(r#"<a class="comments" href="/r/redditgetsdrawn/comments/abc/x/">3 comments</a>"#);
        assert_eq!(
            draft.discussion_url.as_deref(),
            Some("http://www.reddit.com/r/redditgetsdrawn/comments/abc/x/")
        );
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let draft = draft(r#"<div class="entry"><p>nothing here</p></div>"#);

        assert_eq!(draft.title, "");
        assert!(draft.reference_candidates.is_empty());
        assert_eq!(draft.submitter.handle, "");
        assert_eq!(draft.submitted_at, None);
        assert_eq!(draft.discussion_url, None);
    }

    #[test]
    fn test_into_submission_derives_id() {
        let submission = draft(ENTRY).into_submission(None, vec![]);
        assert_eq!(submission.id, "1zysx2");
        assert!(!submission.is_renderable());
    }

    #[test]
    fn test_discussion_id() {
        assert_eq!(
            discussion_id("http://www.reddit.com/r/redditgetsdrawn/comments/2052uh/my_boyfriend/"),
            "2052uh"
        );
        assert_eq!(discussion_id("http://example.com/thread/9"), "http://example.com/thread/9");
        assert_eq!(discussion_id("http://example.com/comments/"), "http://example.com/comments/");
    }

    #[test]
    fn test_is_renderable() {
        let artwork = Artwork {
            source_image_url: None,
            submitter: Submitter::new("artist", &SiteConfig::default()),
            submitted_at: None,
            score: None,
        };

        let with_art = draft(ENTRY)
            .into_submission(Some("http://i.imgur.com/a.jpg".to_string()), vec![artwork.clone()]);
        assert!(with_art.is_renderable());
        assert_eq!(with_art.resolved_artworks().count(), 0);

        let without_reference = draft(ENTRY).into_submission(None, vec![artwork]);
        assert!(!without_reference.is_renderable());
    }
}
