//! Browser measurements feeding the section tracker.

use shared::{section::scroll_target, ScrollState, SectionBounds, SectionTracker};

pub fn scroll_state() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height();
    Some(ScrollState {
        scroll_y,
        viewport_height,
        document_height: f64::from(document_height),
    })
}

/// Document-coordinate bounds of every section anchor present on the page.
pub fn measure_sections(tracker: &SectionTracker, scroll_y: f64) -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    tracker.measure(|id| {
        let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
        Some((rect.top() + scroll_y, rect.bottom() + scroll_y))
    })
}

/// Smooth-scrolls so the section lands just below the sticky navigation.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(anchor) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        web_sys::console::debug_1(&format!("[frontend] no anchor for section {id}").into());
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = anchor.get_bounding_client_rect().top() + scroll_y;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_target(top));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
