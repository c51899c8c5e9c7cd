// =============================================================================
// Folio Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Time Utilities
// =============================================================================

use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll the first element matching `selector` into view.
/// Missing targets and selector errors are silent no-ops.
pub fn scroll_to_selector(selector: &str) {
    let Some(document) = window().document() else {
        return;
    };
    let Ok(Some(element)) = document.query_selector(selector) else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

// -----------------------------------------------------------------------------
// 2. Time Utilities
// -----------------------------------------------------------------------------

/// Current calendar year, for the copyright fallback.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}
