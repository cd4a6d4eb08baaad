//! Mock analytics tracker

use crate::abstractions::Analytics;
use std::sync::{Arc, Mutex};

/// Records tracked page paths in order
#[derive(Clone, Default)]
pub struct MockAnalytics {
    page_views: Arc<Mutex<Vec<String>>>,
}

impl MockAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_views(&self) -> Vec<String> {
        self.page_views.lock().unwrap().clone()
    }
}

impl Analytics for MockAnalytics {
    fn track_page_view(&self, path: &str) {
        self.page_views.lock().unwrap().push(path.to_string());
    }
}
