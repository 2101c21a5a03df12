//! Typed entities extracted from board markup
//!
//! Extraction happens in two steps. Drafts are read synchronously from a
//! parsed fragment and own all their data; they are then completed by
//! resolving their links, which may need a gallery fetch.

mod artwork;
pub mod fields;
mod submission;
mod submitter;

pub use artwork::{extract_score, Artwork, ArtworkDraft};
pub use submission::{discussion_id, Submission, SubmissionDraft};
pub use submitter::{extract_submitter, Submitter};
