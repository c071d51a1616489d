//! Browser API accessors that tolerate running without a display surface.
//!
//! Components never reach for `web_sys::window()` directly; going through
//! here keeps the absent case explicit instead of panicking somewhere deep
//! in a render.

use web_sys::{Document, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// True when the user asked for reduced motion. Absent window or an
/// unsupported media query both read as "animate normally".
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Jump to the top of the page, e.g. on route changes.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
