use crate::config::SiteConfig;
use crate::entities::fields::first_text;
use scraper::ElementRef;

/// The person behind a submission or an artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitter {
    /// Display handle; empty when the fragment has no author element
    pub handle: String,
    /// Profile link, always `{origin}/user/{handle}`
    pub profile_url: String,
}

impl Submitter {
    /// Creates a submitter, deriving the profile link from the handle
    pub fn new(handle: impl Into<String>, site: &SiteConfig) -> Self {
        let handle = handle.into();
        let profile_url = site.profile_url(&handle);
        Self {
            handle,
            profile_url,
        }
    }
}

/// Reads the submitter from the first author-tagged element
///
/// A fragment without an author still yields a submitter with an empty
/// handle (and a profile link ending in `/user/`).
pub fn extract_submitter(fragment: ElementRef<'_>, site: &SiteConfig) -> Submitter {
    let handle = first_text(fragment, ".author").unwrap_or_default();
    Submitter::new(handle, site)
}
