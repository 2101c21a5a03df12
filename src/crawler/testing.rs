//! In-memory page source for unit tests

use crate::crawler::fetcher::PageSource;
use crate::{FetchError, FetchResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves canned pages and records every requested URL
#[derive(Debug, Default)]
pub struct MapSource {
    pages: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl MapSource {
    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageSource for MapSource {
    async fn fetch_page(&self, url: &str) -> FetchResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}
