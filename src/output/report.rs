//! Console report of the scraped submissions
//!
//! Lists every submission that makes it into the gallery with its fields,
//! followed by each of its resolved artworks.

use crate::entities::Submission;
use chrono::{DateTime, FixedOffset};

const RULE: &str = "**************************************************************";
const ARTWORK_RULE: &str = "--------------------------------------------------------------";

/// Formats the report for all renderable submissions
///
/// Indices refer to positions in the full submission list, so skipped
/// submissions and unresolved artworks leave gaps in the numbering.
pub fn format_report(submissions: &[Submission]) -> String {
    let mut out = String::new();

    for (i, submission) in submissions.iter().enumerate() {
        if !submission.is_renderable() {
            continue;
        }

        out.push_str(&format!("{}\n", RULE));
        out.push_str(&format!("Submission #{} ({})\n", i, submission.id));
        out.push_str(&format!("{}\n", RULE));
        out.push_str(&format!("Title:           {}\n", submission.title));
        out.push_str(&format!(
            "Reference:       {}\n",
            submission.reference_image_url.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!(
            "Submitter:       {} <{}>\n",
            submission.submitter.handle, submission.submitter.profile_url
        ));
        out.push_str(&format!(
            "Submitted:       {}\n",
            format_timestamp(submission.submitted_at.as_ref())
        ));
        out.push_str(&format!(
            "Discussion:      {}\n\n",
            submission.discussion_url.as_deref().unwrap_or("-")
        ));

        for (index, artwork) in submission.artworks.iter().enumerate() {
            let Some(link) = &artwork.source_image_url else {
                continue;
            };

            out.push_str(&format!("{}\n", ARTWORK_RULE));
            out.push_str(&format!("Artwork #{}\n", index));
            out.push_str(&format!("  Link:          {}\n", link));
            out.push_str(&format!(
                "  Artist:        {} <{}>\n",
                artwork.submitter.handle, artwork.submitter.profile_url
            ));
            out.push_str(&format!(
                "  Posted:        {}\n",
                format_timestamp(artwork.submitted_at.as_ref())
            ));
            out.push_str(&format!(
                "  Score:         {}\n",
                artwork
                    .score
                    .map(|score| score.to_string())
                    .unwrap_or_else(|| "-".to_string())
            ));
        }

        out.push('\n');
    }

    out
}

fn format_timestamp(timestamp: Option<&DateTime<FixedOffset>>) -> String {
    timestamp
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}
