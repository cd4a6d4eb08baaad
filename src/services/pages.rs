//! Page rendering

use crate::abstractions::Analytics;

pub const HOME_PATH: &str = "/home";

/// Record a view of the home page and return its markup
pub async fn render_page(analytics: &dyn Analytics) -> String {
    analytics.track_page_view(HOME_PATH);
    "<div>content</div>".to_string()
}
