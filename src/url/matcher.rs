/// Checks if a host matches a wildcard pattern
///
/// This function supports two types of patterns:
/// 1. Exact match: "imgur.com" matches only "imgur.com"
/// 2. Wildcard match: "*.imgur.com" matches:
///    - "imgur.com" (the bare domain)
///    - "m.imgur.com" (single subdomain)
///    - "a.b.imgur.com" (nested subdomains)
///
/// # Examples
///
/// ```
/// use gotdrawn::url::matches_wildcard;
///
/// assert!(matches_wildcard("imgur.com", "imgur.com"));
/// assert!(!matches_wildcard("imgur.com", "i.imgur.com"));
///
/// assert!(matches_wildcard("*.imgur.com", "imgur.com"));
/// assert!(matches_wildcard("*.imgur.com", "m.imgur.com"));
/// assert!(!matches_wildcard("*.imgur.com", "notimgur.com"));
/// ```
pub fn matches_wildcard(pattern: &str, candidate: &str) -> bool {
    if let Some(base) = pattern.strip_prefix("*.") {
        candidate == base || candidate.ends_with(&format!(".{}", base))
    } else {
        candidate == pattern
    }
}
