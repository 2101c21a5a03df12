//! Page-level parsing for listing and discussion pages
//!
//! This module handles:
//! - Splitting a listing page into submission entries
//! - Picking the first-level replies out of a discussion page
//!
//! Both return owned drafts so no parsed document outlives the call.

use crate::config::SiteConfig;
use crate::entities::{ArtworkDraft, SubmissionDraft};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;

/// Returns the direct replies to a submission, in page order
///
/// # Algorithm
///
/// 1. Collect every entry nested under a `.child` container (replies to replies)
/// 2. Collect every entry on the page
/// 3. Remove the nested ones
/// 4. Drop the first remaining entry, which is the submission itself
///
/// A page without replies yields an empty list.
///
/// # Example
///
/// ```
/// use gotdrawn::crawler::first_level_replies;
/// use scraper::Html;
///
/// let page = Html::parse_document(r#"
///     <div class="entry">original post</div>
///     <div class="comment"><div class="entry">reply</div>
///         <div class="child"><div class="entry">nested</div></div>
///     </div>"#);
/// let replies = first_level_replies(&page);
/// assert_eq!(replies.len(), 1);
/// ```
pub fn first_level_replies(document: &Html) -> Vec<ElementRef<'_>> {
    let (Ok(entry_selector), Ok(nested_selector)) =
        (Selector::parse(".entry"), Selector::parse(".child .entry"))
    else {
        return Vec::new();
    };

    let nested: HashSet<_> = document
        .select(&nested_selector)
        .map(|entry| entry.id())
        .collect();

    document
        .select(&entry_selector)
        .filter(|entry| !nested.contains(&entry.id()))
        .skip(1)
        .collect()
}

/// Splits a listing page into submission drafts
pub fn parse_listing(html: &str, site: &SiteConfig) -> Vec<SubmissionDraft> {
    let document = Html::parse_document(html);
    let Ok(entry_selector) = Selector::parse(".entry") else {
        return Vec::new();
    };

    document
        .select(&entry_selector)
        .map(|entry| SubmissionDraft::from_fragment(entry, site))
        .collect()
}

/// Reads the first-level replies of a discussion page as artwork drafts
pub fn parse_discussion(html: &str, site: &SiteConfig) -> Vec<ArtworkDraft> {
    let document = Html::parse_document(html);

    first_level_replies(&document)
        .into_iter()
        .map(|reply| ArtworkDraft::from_fragment(reply, site))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCUSSION: &str = r#"
<html><body>
<div class="sitetable linklisting">
  <div class="thing link"><div class="entry unvoted">
    <p class="title"><a class="title" href="http://imgur.com/LVJy5YG">Please draw my grandparents!</a></p>
  </div></div>
</div>
<div class="commentarea"><div class="sitetable nestedlisting">
  <div class="thing comment">
    <div class="entry unvoted">
      <a class="author">first_artist</a>
      <div class="md"><p><a href="http://i.imgur.com/aaa.png">mine</a></p></div>
    </div>
    <div class="child"><div class="sitetable listing">
      <div class="thing comment">
        <div class="entry unvoted">
          <a class="author">jgordon02</a>
          <div class="md"><p>Thank you so much!</p></div>
        </div>
        <div class="child"><div class="thing comment">
          <div class="entry unvoted"><a class="author">deeper</a></div>
        </div></div>
      </div>
    </div></div>
  </div>
  <div class="thing comment">
    <div class="entry unvoted">
      <a class="author">second_artist</a>
      <div class="md"><p><a href="http://imgur.com/bbb">here you go</a></p></div>
    </div>
  </div>
</div></div>
</body></html>"#;

    fn handles(drafts: &[ArtworkDraft]) -> Vec<&str> {
        drafts.iter().map(|d| d.submitter.handle.as_str()).collect()
    }

    #[test]
    fn test_first_level_replies_skip_post_and_nested() {
        let document = Html::parse_document(DISCUSSION);
        let replies = first_level_replies(&document);
        assert_eq!(replies.len(), 2);
    }

    #[test]
    fn test_single_reply_with_nested_answer() {
        let document = Html::parse_document(
            r#"<div class="entry">post</div>
               <div class="comment"><div class="entry">top</div>
                 <div class="child"><div class="comment"><div class="entry">nested</div></div></div>
               </div>"#,
        );
        let replies = first_level_replies(&document);

        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text().collect::<String>(), "top");
    }

    #[test]
    fn test_no_replies_is_empty() {
        let document = Html::parse_document(r#"<div class="entry">post only</div>"#);
        assert!(first_level_replies(&document).is_empty());

        let document = Html::parse_document("<html><body></body></html>");
        assert!(first_level_replies(&document).is_empty());
    }

    #[test]
    fn test_parse_discussion_keeps_order() {
        let drafts = parse_discussion(DISCUSSION, &SiteConfig::default());

        assert_eq!(handles(&drafts), vec!["first_artist", "second_artist"]);
        assert_eq!(drafts[0].href.as_deref(), Some("http://i.imgur.com/aaa.png"));
        assert_eq!(drafts[1].href.as_deref(), Some("http://imgur.com/bbb"));
    }

    #[test]
    fn test_parse_listing() {
        let html = r#"
<div id="siteTable">
  <div class="thing"><div class="entry unvoted">
    <p class="title"><a class="title" href="http://i.imgur.com/one.jpg">One</a></p>
    <a class="comments" href="http://www.reddit.com/r/redditgetsdrawn/comments/111/one/">2 comments</a>
  </div></div>
  <div class="thing"><div class="entry unvoted">
    <p class="title"><a class="title" href="http://imgur.com/two">Two</a></p>
  </div></div>
</div>"#;

        let drafts = parse_listing(html, &SiteConfig::default());

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "One");
        assert_eq!(drafts[1].title, "Two");
        assert_eq!(drafts[1].discussion_url, None);
    }

    #[test]
    fn test_parse_listing_without_entries() {
        assert!(parse_listing("<html><body>nothing</body></html>", &SiteConfig::default()).is_empty());
    }
}
