//! Page-view analytics abstraction

/// Trait for recording page views
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

/// Emits each page view as a tracing event
#[derive(Debug, Clone, Copy, Default)]
pub struct RealAnalytics;

impl Analytics for RealAnalytics {
    fn track_page_view(&self, path: &str) {
        tracing::info!(target: "storefront::analytics", path, "Page view");
    }
}
