//! Scrape statistics
//!
//! Counts what a scrape produced and how much of it makes it into the gallery.

use crate::entities::Submission;

/// Counts gathered from one scrape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryStats {
    /// Listing entries scraped
    pub submissions: usize,
    /// Submissions whose reference image resolved
    pub with_reference: usize,
    /// Submissions that will appear in the gallery
    pub rendered: usize,
    /// First-level replies across all submissions
    pub artworks: usize,
    /// Replies whose image resolved
    pub resolved_artworks: usize,
}

impl GalleryStats {
    /// Tallies a scrape result
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut stats = Self {
            submissions: submissions.len(),
            ..Self::default()
        };

        for submission in submissions {
            if submission.reference_image_url.is_some() {
                stats.with_reference += 1;
            }
            if submission.is_renderable() {
                stats.rendered += 1;
            }
            stats.artworks += submission.artworks.len();
            stats.resolved_artworks += submission.resolved_artworks().count();
        }

        stats
    }

    /// Percentage of artworks whose image resolved
    pub fn resolution_rate(&self) -> f64 {
        if self.artworks == 0 {
            0.0
        } else {
            (self.resolved_artworks as f64 / self.artworks as f64) * 100.0
        }
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &GalleryStats) {
    println!("=== Scrape Statistics ===\n");
    println!("Submissions scraped:   {}", stats.submissions);
    println!("With reference image:  {}", stats.with_reference);
    println!("Rendered in gallery:   {}", stats.rendered);
    println!("Artworks found:        {}", stats.artworks);
    println!(
        "Artworks resolved:     {} ({:.2}%)",
        stats.resolved_artworks,
        stats.resolution_rate()
    );
}
