//! Fault-tolerant field getters over markup fragments
//!
//! Each getter answers `None` on missing or malformed markup so that one bad
//! field never stops the others from being read.

use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Selector};

/// Returns the first descendant of `fragment` matching `selector`
pub fn select_first<'a>(fragment: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    fragment.select(&selector).next()
}

/// Returns the trimmed text of the first match
pub fn first_text(fragment: ElementRef<'_>, selector: &str) -> Option<String> {
    select_first(fragment, selector).map(|element| element.text().collect::<String>().trim().to_string())
}

/// Returns an attribute of the first match, if the first match carries it
pub fn first_attr(fragment: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    select_first(fragment, selector)
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.to_string())
}

/// Returns an attribute from every match, in document order
pub fn all_attrs(fragment: ElementRef<'_>, selector: &str, attr: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    fragment
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .map(|value| value.to_string())
        .collect()
}

/// Reads the machine-readable `datetime` of the first `<time>` element
pub fn first_timestamp(fragment: ElementRef<'_>) -> Option<DateTime<FixedOffset>> {
    first_attr(fragment, "time", "datetime").and_then(|raw| parse_timestamp(&raw))
}

/// Parses an RFC 3339 timestamp such as `2014-03-09T14:18:03+00:00`
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}
