//! Gallery document rendering
//!
//! Folds the scraped submissions into one static HTML page: a header, one
//! block per submission with its reference photo and a horizontally
//! scrolling strip of artworks, then a footer and the scroll script.

use crate::entities::Submission;
use crate::Result;
use std::fs;
use std::path::Path;

/// Page-level settings for the rendered gallery
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Contents of the <title> element
    pub page_title: String,
    /// Board name shown in the header tagline
    pub board_name: String,
    /// Link target for the tagline's board name
    pub board_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_title: "gotdrawn".to_string(),
            board_name: "RedditGetsDrawn".to_string(),
            board_url: "#".to_string(),
        }
    }
}

/// Renders the gallery document
///
/// Submissions without a reference image or without any artworks are
/// skipped. Within a kept submission, artworks whose image did not resolve
/// are skipped individually. Input order is preserved.
///
/// # Example
///
/// ```
/// use gotdrawn::output::{render_gallery, RenderOptions};
///
/// let html = render_gallery(&[], &RenderOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(!html.contains(r#"<div class="posts">"#));
/// ```
pub fn render_gallery(submissions: &[Submission], options: &RenderOptions) -> String {
    let mut html = String::new();

    push_header(&mut html, options);

    for submission in submissions.iter().filter(|s| s.is_renderable()) {
        push_submission(&mut html, submission);
    }

    push_footer(&mut html);

    html
}

/// Writes the gallery to `path`, creating the parent directory if needed
pub fn write_gallery(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, html)?;
    Ok(())
}

fn push_header(html: &mut String, options: &RenderOptions) {
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&options.page_title)));
    html.push_str("<link rel=\"stylesheet\" href=\"css/normalize.css\" type=\"text/css\" media=\"screen\">\n");
    html.push_str("<link rel=\"stylesheet\" href=\"css/style.css\" type=\"text/css\" media=\"screen\">\n");
    html.push_str("<link href=\"http://fonts.googleapis.com/css?family=Droid+Sans:700|PT+Sans\" rel=\"stylesheet\" type=\"text/css\">\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<div id=\"header\">\n");
    html.push_str("<img id=\"logo\" src=\"web_files/RGDlogo.png\">\n");
    html.push_str(&format!(
        "<div id=\"tagline\">A viewer-friendly site displaying the artworks from <a href=\"{}\" target=\"_blank\">{}</a></div>\n",
        escape(&options.board_url),
        escape(&options.board_name)
    ));
    html.push_str("</div> <!-- header -->\n");
}

fn push_submission(html: &mut String, submission: &Submission) {
    let reference = submission.reference_image_url.as_deref().unwrap_or_default();
    let discussion = submission.discussion_url.as_deref().unwrap_or("#");

    html.push_str("<div class=\"posts\">\n");
    html.push_str(&format!(
        "<h2 class=\"title\"><a href=\"{}\">{}</a></h2>\n",
        escape(discussion),
        escape(&submission.title)
    ));
    html.push_str("<div class=\"ref\">\n");
    html.push_str(&format!("<img src=\"{}\"><br>\n", escape(reference)));
    html.push_str(&format!(
        "<div class=\"subUsername\">Submitted by <a href=\"{}\">{}</a></div>\n",
        escape(&submission.submitter.profile_url),
        escape(&submission.submitter.handle)
    ));
    html.push_str("</div> <!-- ref -->\n");
    html.push_str("<div class=\"art\">\n");
    html.push_str("<div class=\"scroller\" style=\"height: 600px; margin: 0 auto;\">\n");
    html.push_str("<div class=\"innerScrollArea\">\n<ul>\n");

    for artwork in submission.resolved_artworks() {
        let image = artwork.source_image_url.as_deref().unwrap_or_default();
        html.push_str(&format!(
            "<li><img src=\"{}\" height=\"500px\" width=\"auto\"/><br><a href=\"{}\" class=\"subUsername\">{}</a></li>\n",
            escape(image),
            escape(&artwork.submitter.profile_url),
            escape(&artwork.submitter.handle)
        ));
    }

    html.push_str("</ul>\n</div></div></div></div>\n");
}

fn push_footer(html: &mut String) {
    html.push_str("<div id=\"footer\">\n<p>\n");
    html.push_str("<a class=\"footerLink\" href=\"#\">view settings</a>\n");
    html.push_str("<a class=\"footerLink\" href=\"#\">about</a>\n");
    html.push_str("</p>\n</div>\n");
    html.push_str(SCROLL_SCRIPT);
    html.push_str("</body>\n</html>\n");
}

/// Lays out each artwork strip side by side and lets it scroll horizontally
const SCROLL_SCRIPT: &str = r#"<script type="text/javascript" src="http://ajax.googleapis.com/ajax/libs/jquery/1.8.1/jquery.min.js"></script>
<script type="text/javascript">
  $(window).load(function () {
    var scroller = $('.scroller div.innerScrollArea');
    scroller.each(function () {
      var $this = $(this);
      var curX = 0;
      $this.children('ul').children().each(function () {
        var $item = $(this);
        $item.css('left', curX);
        curX += $item.outerWidth(true);
      });
    });
    scroller.css('overflow-x', 'auto');
  });
</script>
"#;

/// Escapes text for use in element content and quoted attributes
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::entities::{Artwork, Submitter};
    use crate::GalleryError;
    use tempfile::TempDir;

    fn artwork(handle: &str, image: Option<&str>) -> Artwork {
        Artwork {
            source_image_url: image.map(String::from),
            submitter: Submitter::new(handle, &SiteConfig::default()),
            submitted_at: None,
            score: None,
        }
    }

    fn submission(title: &str, reference: Option<&str>, artworks: Vec<Artwork>) -> Submission {
        Submission {
            id: title.to_string(),
            title: title.to_string(),
            reference_image_url: reference.map(String::from),
            submitter: Submitter::new("requester", &SiteConfig::default()),
            submitted_at: None,
            discussion_url: Some(format!("http://www.reddit.com/r/redditgetsdrawn/comments/{}/", title)),
            artworks,
        }
    }

    fn block_count(html: &str) -> usize {
        html.matches("<div class=\"posts\">").count()
    }

    #[test]
    fn test_empty_artworks_render_no_blocks() {
        let submissions = vec![
            submission("a", Some("http://i.imgur.com/a.jpg"), vec![]),
            submission("b", Some("http://i.imgur.com/b.jpg"), vec![]),
        ];
        let html = render_gallery(&submissions, &RenderOptions::default());

        assert_eq!(block_count(&html), 0);
        assert!(html.contains("<div id=\"footer\">"));
    }

    #[test]
    fn test_missing_reference_dropped() {
        let submissions = vec![submission("a", None, vec![artwork("x", Some("http://i.imgur.com/x.jpg"))])];
        let html = render_gallery(&submissions, &RenderOptions::default());
        assert_eq!(block_count(&html), 0);
    }

    #[test]
    fn test_unresolved_artworks_skipped_individually() {
        let submissions = vec![submission(
            "a",
            Some("http://i.imgur.com/ref.jpg"),
            vec![
                artwork("good", Some("http://i.imgur.com/good.jpg")),
                artwork("broken", None),
                artwork("also_good", Some("http://example.com/also.png")),
            ],
        )];
        let html = render_gallery(&submissions, &RenderOptions::default());

        assert_eq!(block_count(&html), 1);
        assert_eq!(html.matches("<li>").count(), 2);
        assert!(html.contains("http://i.imgur.com/good.jpg"));
        assert!(html.contains("http://example.com/also.png"));
        assert!(!html.contains(">broken<"));
        assert!(html.contains("<img src=\"http://i.imgur.com/ref.jpg\">"));
        assert!(html.contains("Submitted by <a href=\"http://www.reddit.com/user/requester\">requester</a>"));
    }

    #[test]
    fn test_order_preserved() {
        let art = || vec![artwork("x", Some("http://i.imgur.com/x.jpg"))];
        let submissions = vec![
            submission("zeta", Some("http://i.imgur.com/z.jpg"), art()),
            submission("alpha", Some("http://i.imgur.com/a.jpg"), art()),
        ];
        let html = render_gallery(&submissions, &RenderOptions::default());

        let zeta = html.find(">zeta<").unwrap();
        let alpha = html.find(">alpha<").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_text_is_escaped() {
        let submissions = vec![submission(
            "<script>alert(\"x\")</script> & friends",
            Some("http://i.imgur.com/a.jpg"),
            vec![artwork("x", Some("http://i.imgur.com/x.jpg"))],
        )];
        let html = render_gallery(&submissions, &RenderOptions::default());

        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; friends"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_page_chrome() {
        let options = RenderOptions {
            page_title: "my gallery".to_string(),
            board_name: "Sketch <Club>".to_string(),
            board_url: "http://www.reddit.com/r/redditgetsdrawn".to_string(),
        };
        let html = render_gallery(&[], &options);

        assert!(html.contains("<title>my gallery</title>"));
        assert!(html.contains("target=\"_blank\">Sketch &lt;Club&gt;</a>"));
        assert!(!html.contains(">my gallery</a>"));
        assert!(html.contains("href=\"http://www.reddit.com/r/redditgetsdrawn\""));
        assert!(html.contains("overflow-x"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_write_gallery_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("RGD_HTML").join("RGD_Gallery.html");

        write_gallery("<html></html>", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_gallery_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("RGD_HTML");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = write_gallery("<html></html>", &blocker.join("RGD_Gallery.html"));

        assert!(matches!(result, Err(GalleryError::Io(_))));
    }
}
