use alloc::format;
use alloc::string::String;

/// Attribute selector marking carousel roots.
pub const ROOT_SELECTOR: &str = "[data-carousel=\"brands\"]";
pub const TRACK_SELECTOR: &str = ".carousel-track";
pub const SLIDE_SELECTOR: &str = ".carousel-slide";
pub const PREV_BUTTON_SELECTOR: &str = ".carousel-btn.prev";
pub const NEXT_BUTTON_SELECTOR: &str = ".carousel-btn.next";
pub const INDICATOR_CONTAINER_SELECTOR: &str = ".carousel-dots";
pub const VIEWPORT_SELECTOR: &str = ".carousel-viewport";

/// Class of every generated indicator button.
pub const INDICATOR_CLASS: &str = "dot";
/// Class toggled on the active slide and the active indicator.
pub const ACTIVE_CLASS: &str = "is-active";

/// Inline `transition` value while dragging.
pub const TRANSITION_NONE: &str = "none";

/// Selectors used to find the parts of a carousel root.
///
/// `Default` matches the host page's `data-carousel="brands"` markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub root: &'static str,
    pub track: &'static str,
    pub slide: &'static str,
    pub prev_button: &'static str,
    pub next_button: &'static str,
    pub indicator_container: &'static str,
    pub viewport: &'static str,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            root: ROOT_SELECTOR,
            track: TRACK_SELECTOR,
            slide: SLIDE_SELECTOR,
            prev_button: PREV_BUTTON_SELECTOR,
            next_button: NEXT_BUTTON_SELECTOR,
            indicator_container: INDICATOR_CONTAINER_SELECTOR,
            viewport: VIEWPORT_SELECTOR,
        }
    }
}

/// Inline `transform` value for a track offset, e.g. `translate3d(-90px, 0, 0)`.
pub fn track_transform(offset: f32) -> String {
    format!("translate3d({offset}px, 0, 0)")
}

/// Inline `transition` value. Restoring clears the inline style so the stylesheet applies again.
pub fn track_transition(enabled: bool) -> &'static str {
    if enabled { "" } else { TRANSITION_NONE }
}
